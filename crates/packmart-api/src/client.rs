//! HTTP client for the marketplace backend REST API.
//!
//! Wraps `reqwest` with typed endpoint methods, cookie-session handling, and
//! back-off retry for idempotent reads. All endpoints surface backend
//! failures as [`ApiError`] variants; a missing or rejected session becomes
//! [`ApiError::AuthenticationRequired`] so callers can route the user to
//! login/registration instead of rendering a raw error.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::{Client, StatusCode, Url};

use crate::error::ApiError;
use crate::retry::retry_with_backoff;
use crate::types::{
    AuthStatus, LoginRequest, MutationResponse, NewProduct, RawProduct, RegistrationRequest,
    SessionResponse,
};

/// Name of the backend's session cookie.
const SESSION_COOKIE: &str = "JSESSIONID";

/// Client for the marketplace backend.
///
/// Carries a cookie jar so a session established by [`MarketClient::login`]
/// (or injected via [`MarketClient::with_session`]) rides along on every
/// subsequent call. Use [`MarketClient::new`] with a mock server's URL in
/// tests.
pub struct MarketClient {
    client: Client,
    base_url: Url,
    jar: Arc<Jar>,
    /// Maximum number of retry attempts after the first failure, applied to
    /// idempotent GETs only.
    max_retries: u32,
    /// Base delay in milliseconds for exponential back-off.
    backoff_base_ms: u64,
}

impl MarketClient {
    /// Creates a new client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `base_url` does not parse, or
    /// [`ApiError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, ApiError> {
        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends the API path instead of replacing the last
        // segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
            jar,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Seeds the cookie jar with a previously captured session id, so a
    /// session can survive across processes.
    #[must_use]
    pub fn with_session(self, session_id: &str) -> Self {
        self.jar.add_cookie_str(
            &format!("{SESSION_COOKIE}={session_id}"),
            &self.base_url,
        );
        self
    }

    /// Checks the current session, `GET api/v1/auth`.
    ///
    /// The backend answers 200 for both outcomes; inspect
    /// [`AuthStatus::authenticated`] on the result.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure after retries.
    /// - [`ApiError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ApiError::Deserialize`] if the body does not match the envelope.
    pub async fn check_auth(&self) -> Result<AuthStatus, ApiError> {
        let url = self.endpoint("api/v1/auth")?;
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move { self.get_json::<AuthStatus>(url).await }
        })
        .await
    }

    /// Checks the session and fails unless it is authenticated.
    ///
    /// # Errors
    ///
    /// [`ApiError::AuthenticationRequired`] when the backend reports an
    /// anonymous session, plus everything [`MarketClient::check_auth`] returns.
    pub async fn require_auth(&self) -> Result<AuthStatus, ApiError> {
        let status = self.check_auth().await?;
        if status.authenticated {
            Ok(status)
        } else {
            Err(ApiError::AuthenticationRequired)
        }
    }

    /// Fetches the current seller's products, `GET api/v1/products`.
    ///
    /// The list is scoped server-side to the session's seller.
    ///
    /// # Errors
    ///
    /// - [`ApiError::AuthenticationRequired`] on 401/403.
    /// - [`ApiError::UnexpectedStatus`] on any other non-2xx.
    /// - [`ApiError::Http`] / [`ApiError::Deserialize`] as usual.
    pub async fn fetch_products(&self) -> Result<Vec<RawProduct>, ApiError> {
        let url = self.endpoint("api/v1/products")?;
        let products = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move { self.get_json::<Vec<RawProduct>>(url).await }
        })
        .await?;
        tracing::debug!(count = products.len(), "fetched product list");
        Ok(products)
    }

    /// Creates a product for the current seller, `POST api/v1/products`.
    ///
    /// Not retried: product creation is not idempotent.
    ///
    /// # Errors
    ///
    /// - [`ApiError::AuthenticationRequired`] on 401/403.
    /// - [`ApiError::UnexpectedStatus`] on any other non-2xx.
    /// - [`ApiError::Http`] / [`ApiError::Deserialize`] as usual.
    pub async fn create_product(&self, product: &NewProduct) -> Result<MutationResponse, ApiError> {
        let url = self.endpoint("api/v1/products")?;
        let response = self.client.post(url.clone()).json(product).send().await?;
        Self::check_status(response.status(), &url)?;
        let body = response.text().await?;
        Self::parse_json(&body, "create product")
    }

    /// Deletes all of the current seller's products, `DELETE api/v1/products`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::AuthenticationRequired`] on 401/403.
    /// - [`ApiError::UnexpectedStatus`] on any other non-2xx.
    pub async fn delete_all_products(&self) -> Result<(), ApiError> {
        let url = self.endpoint("api/v1/products")?;
        let response = self.client.delete(url.clone()).send().await?;
        Self::check_status(response.status(), &url)?;
        Ok(())
    }

    /// Logs in with seller credentials, `POST api/v1/login`.
    ///
    /// On success the session cookie lands in the client's jar (so further
    /// calls on this client are authenticated) and its value is returned for
    /// the caller to persist.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Unauthorized`] on rejected credentials (401).
    /// - [`ApiError::UnexpectedStatus`] on any other non-2xx.
    /// - [`ApiError::Http`] / [`ApiError::Deserialize`] as usual.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(SessionResponse, Option<String>), ApiError> {
        let url = self.endpoint("api/v1/login")?;
        let request = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let response = self.client.post(url.clone()).json(&request).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            let message = Self::parse_json::<SessionResponse>(&body, "login rejection")
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| "invalid email or password".to_owned());
            return Err(ApiError::Unauthorized { message });
        }
        Self::check_status(status, &url)?;

        let session_id = response
            .headers()
            .get_all(reqwest::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(session_cookie_value);

        let body = response.text().await?;
        let parsed = Self::parse_json::<SessionResponse>(&body, "login")?;
        Ok((parsed, session_id))
    }

    /// Ends the current session, `POST api/v1/auth/logout`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ApiError::Http`] / [`ApiError::Deserialize`] as usual.
    pub async fn logout(&self) -> Result<SessionResponse, ApiError> {
        let url = self.endpoint("api/v1/auth/logout")?;
        let response = self.client.post(url.clone()).send().await?;
        Self::check_status(response.status(), &url)?;
        let body = response.text().await?;
        Self::parse_json(&body, "logout")
    }

    /// Registers a new seller, `POST api/v1/registration`.
    ///
    /// Registration also establishes a session; like [`MarketClient::login`],
    /// the captured session cookie value is returned alongside the response.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ApiError::Http`] / [`ApiError::Deserialize`] as usual.
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<(SessionResponse, Option<String>), ApiError> {
        let url = self.endpoint("api/v1/registration")?;
        let response = self.client.post(url.clone()).json(request).send().await?;
        Self::check_status(response.status(), &url)?;

        let session_id = response
            .headers()
            .get_all(reqwest::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(session_cookie_value);

        let body = response.text().await?;
        let parsed = Self::parse_json::<SessionResponse>(&body, "registration")?;
        Ok((parsed, session_id))
    }

    /// Resolves an API path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::InvalidBaseUrl {
            url: self.base_url.to_string(),
            reason: e.to_string(),
        })
    }

    /// Sends a GET request, triages the status, and parses the body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self.client.get(url.clone()).send().await?;
        Self::check_status(response.status(), &url)?;
        let body = response.text().await?;
        Self::parse_json(&body, url.as_str())
    }

    /// Maps 401/403 to the authentication error and any other non-2xx to
    /// [`ApiError::UnexpectedStatus`].
    fn check_status(status: StatusCode, url: &Url) -> Result<(), ApiError> {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::AuthenticationRequired);
        }
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(())
    }

    fn parse_json<T: serde::de::DeserializeOwned>(
        body: &str,
        context: &str,
    ) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

/// Extracts the session id from a `Set-Cookie` header value, e.g.
/// `"JSESSIONID=8A3F...; Path=/; HttpOnly"` → `"8A3F..."`.
fn session_cookie_value(header: &str) -> Option<String> {
    let (name, rest) = header.split_once('=')?;
    if name.trim() != SESSION_COOKIE {
        return None;
    }
    let value = rest.split(';').next().unwrap_or(rest).trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> MarketClient {
        MarketClient::new(base_url, 30, "packmart-test/0.1", 0, 0)
            .expect("client construction should not fail")
    }

    #[test]
    fn endpoint_joins_api_path() {
        let client = test_client("http://localhost:8080");
        let url = client.endpoint("api/v1/products").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/products");
    }

    #[test]
    fn base_url_trailing_slash_is_normalised() {
        let client = test_client("http://localhost:8080///");
        let url = client.endpoint("api/v1/auth").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/auth");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = MarketClient::new("not a url", 30, "packmart-test/0.1", 0, 0);
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn session_cookie_value_parses_attributes_away() {
        assert_eq!(
            session_cookie_value("JSESSIONID=8A3F9C; Path=/; HttpOnly").as_deref(),
            Some("8A3F9C")
        );
    }

    #[test]
    fn session_cookie_value_ignores_other_cookies() {
        assert!(session_cookie_value("theme=dark; Path=/").is_none());
    }

    #[test]
    fn session_cookie_value_rejects_empty_value() {
        assert!(session_cookie_value("JSESSIONID=; Path=/").is_none());
    }

    #[test]
    fn check_status_maps_unauthorized_to_authentication_required() {
        let url = Url::parse("http://localhost:8080/api/v1/products").unwrap();
        assert!(matches!(
            MarketClient::check_status(StatusCode::UNAUTHORIZED, &url),
            Err(ApiError::AuthenticationRequired)
        ));
        assert!(matches!(
            MarketClient::check_status(StatusCode::FORBIDDEN, &url),
            Err(ApiError::AuthenticationRequired)
        ));
    }

    #[test]
    fn check_status_surfaces_other_failures_with_status() {
        let url = Url::parse("http://localhost:8080/api/v1/products").unwrap();
        assert!(matches!(
            MarketClient::check_status(StatusCode::INTERNAL_SERVER_ERROR, &url),
            Err(ApiError::UnexpectedStatus { status: 500, .. })
        ));
        assert!(MarketClient::check_status(StatusCode::OK, &url).is_ok());
    }
}

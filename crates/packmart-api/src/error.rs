use thiserror::Error;

/// Errors returned by the marketplace backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The session check came back `authenticated: false`. Callers should
    /// route the user to login/registration instead of rendering an error.
    #[error("not authenticated — log in or register first")]
    AuthenticationRequired,

    /// The backend rejected the supplied credentials (HTTP 401).
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Any other non-2xx response from the backend.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured backend base URL is not a valid URL.
    #[error("invalid backend URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

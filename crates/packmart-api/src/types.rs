//! Wire types for the marketplace backend's JSON API.
//!
//! ## Observed shape from the live backend
//!
//! ### Field casing
//! All JSON fields are camelCase (`averageRating`, `productPriceRanges`);
//! every type here maps with `#[serde(rename_all = "camelCase")]`.
//!
//! ### `averageRating`
//! A float that the backend initialises to `0` for freshly created products
//! and omits on some older records. Both cases mean "no rating yet" and are
//! defaulted during normalization, so the field is `Option<f32>` here.
//!
//! ### `productPriceRanges`
//! Wholesale tiers `{initialQuantity, finalQuantity, pricePerRange}`.
//! `finalQuantity` is `null` on the unbounded top tier. Prices are whole
//! rubles (a Java `Long` on the backend), so `i64` end to end. The backend
//! usually returns tiers sorted by `initialQuantity`, but that ordering is
//! NOT part of the contract — normalization selects the cheapest-entry tier
//! explicitly rather than trusting index 0.
//!
//! ### `productDetails`
//! Nested spec object; the whole object and each field inside it may be
//! absent. An absent or empty `material` is normalized to `"Unspecified"`.
//!
//! ### Auth envelope
//! `GET api/v1/auth` always answers 200 with `{"authenticated": bool, ...}`;
//! `sellerId` is a JSON number (Java `Long`), not a string.
//!
//! ### Mutation envelopes
//! Create/login/register/logout answer `{"success": bool, "message": ...}`
//! with optional seller fields. Seller identity for mutations comes from the
//! session cookie, never from the request body.

use serde::{Deserialize, Serialize};

/// A product exactly as the backend returns it from `GET api/v1/products`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    /// Backend numeric product ID.
    pub id: i64,

    pub name: String,

    /// Average review rating; `0` or absent until the first review lands.
    #[serde(default)]
    pub average_rating: Option<f32>,

    #[serde(default)]
    pub number_of_reviews: i64,

    /// Units in stock.
    #[serde(default)]
    pub availability: i64,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub detailed_description: Option<String>,

    /// Nested spec object. May be absent entirely.
    #[serde(default)]
    pub product_details: Option<RawProductDetails>,

    /// Wholesale price tiers. May be empty.
    #[serde(default)]
    pub product_price_ranges: Vec<RawPriceRange>,
}

/// Nested product spec object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProductDetails {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub minimum_order_starts_from: Option<i64>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub load_capacity: Option<String>,
}

/// One wholesale price tier.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPriceRange {
    #[serde(default)]
    pub id: Option<i64>,
    /// Quantity at which this tier starts.
    pub initial_quantity: i64,
    /// Quantity at which this tier ends; `None` on the unbounded top tier.
    #[serde(default)]
    pub final_quantity: Option<i64>,
    /// Per-unit price in whole rubles for this tier.
    pub price_per_range: i64,
}

/// Response of the session check, `GET api/v1/auth`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub seller_id: Option<i64>,
    #[serde(default)]
    pub seller_email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response envelope for login, registration, and logout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub seller_id: Option<i64>,
    #[serde(default)]
    pub seller_email: Option<String>,
}

/// Response envelope for product mutations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for `POST api/v1/products`.
///
/// Seller identity is attached server-side from the session cookie and is
/// deliberately absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub availability: i64,
    pub description: String,
    pub detailed_description: String,
    pub product_details: NewProductDetails,
    pub product_price_ranges: Vec<NewPriceRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductDetails {
    pub size: String,
    pub weight: String,
    pub minimum_order_starts_from: i64,
    pub material: String,
    pub color: String,
    pub load_capacity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPriceRange {
    pub initial_quantity: i64,
    pub final_quantity: Option<i64>,
    pub price_per_range: i64,
}

/// Request body for `POST api/v1/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST api/v1/registration`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub company: String,
    pub taxpayer_id: String,
}

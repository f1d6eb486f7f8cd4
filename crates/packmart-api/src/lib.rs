pub mod client;
pub mod error;
pub mod normalize;
mod retry;
pub mod types;

pub use client::MarketClient;
pub use error::ApiError;
pub use normalize::{normalize_product, normalize_products};
pub use types::{
    AuthStatus, MutationResponse, NewPriceRange, NewProduct, NewProductDetails, RawPriceRange,
    RawProduct, RawProductDetails, RegistrationRequest, SessionResponse,
};

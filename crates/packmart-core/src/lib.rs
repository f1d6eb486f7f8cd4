pub mod app_config;
pub mod categories;
pub mod config;
pub mod filter;
pub mod lot;
pub mod products;
pub mod sort;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use categories::{load_rules, CategoriesFile, Category, CategoryRule, CategoryRules};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{filter_products, related_products, FilterCriteria, PriceBucket};
pub use lot::LotSummary;
pub use products::{DisplayProduct, StockStatus};
pub use sort::{sort_products, SortKey};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read categories file {path}: {source}")]
    CategoriesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse categories file: {0}")]
    CategoriesFileParse(#[from] serde_yaml::Error),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}

//! Catalog ordering: a fixed set of total orderings over
//! [`DisplayProduct`] rows.
//!
//! Sorting is pure and stable — ties keep their relative order from the
//! input, and a new sequence is returned rather than reordering in place.

use serde::{Deserialize, Serialize};

use crate::products::DisplayProduct;

/// Catalog sort selector.
///
/// `Popular` and `Rating` share one ordering: descending rating. The catalog
/// has no separate popularity signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Popular,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "popular" => Ok(SortKey::Popular),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "rating" => Ok(SortKey::Rating),
            other => Err(format!("unknown sort key: '{other}'")),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Popular => write!(f, "popular"),
            SortKey::PriceAsc => write!(f, "price-asc"),
            SortKey::PriceDesc => write!(f, "price-desc"),
            SortKey::Rating => write!(f, "rating"),
        }
    }
}

/// Returns a new sequence ordered by `key`. The input is untouched.
#[must_use]
pub fn sort_products(products: &[DisplayProduct], key: SortKey) -> Vec<DisplayProduct> {
    let mut sorted: Vec<DisplayProduct> = products.to_vec();
    // Vec::sort_by is stable, which is what keeps equal-key ties in input order.
    sorted.sort_by(|a, b| match key {
        SortKey::PriceAsc => a.price.cmp(&b.price),
        SortKey::PriceDesc => b.price.cmp(&a.price),
        SortKey::Popular | SortKey::Rating => b.rating.total_cmp(&a.rating),
    });
    sorted
}

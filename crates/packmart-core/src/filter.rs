//! Catalog filtering: a conjunction of independent predicates over
//! [`DisplayProduct`] rows.
//!
//! Filtering is pure and stable — the output preserves the input's relative
//! order and the input is never mutated. An empty result is a valid outcome,
//! not an error.

use serde::{Deserialize, Serialize};

use crate::categories::Category;
use crate::products::DisplayProduct;

/// Price bucket selector. Boundaries are half-open: a price of exactly 100
/// belongs to `Medium`, exactly 300 to `High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBucket {
    #[default]
    All,
    /// `price < 100`
    Low,
    /// `100 <= price < 300`
    Medium,
    /// `price >= 300`
    High,
}

impl PriceBucket {
    /// Returns `true` if `price` falls inside this bucket.
    #[must_use]
    pub fn contains(self, price: i64) -> bool {
        match self {
            PriceBucket::All => true,
            PriceBucket::Low => price < 100,
            PriceBucket::Medium => (100..300).contains(&price),
            PriceBucket::High => price >= 300,
        }
    }
}

impl std::str::FromStr for PriceBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(PriceBucket::All),
            "low" => Ok(PriceBucket::Low),
            "medium" => Ok(PriceBucket::Medium),
            "high" => Ok(PriceBucket::High),
            other => Err(format!("unknown price bucket: '{other}'")),
        }
    }
}

/// Filter selections for a catalog view. All fields are independently
/// optional and combine with logical AND; the default value passes every
/// product through.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match on the product name. Empty string
    /// means no constraint.
    pub search: String,
    /// Exact category, or `None` for all categories.
    pub category: Option<Category>,
    /// Exact material label, or `None` for all materials.
    pub material: Option<String>,
    pub price: PriceBucket,
}

impl FilterCriteria {
    /// Returns `true` if `product` passes every active predicate.
    #[must_use]
    pub fn matches(&self, product: &DisplayProduct) -> bool {
        let matches_search = self.search.is_empty()
            || product
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let matches_category = self.category.is_none_or(|c| product.category == c);
        let matches_material = self
            .material
            .as_ref()
            .is_none_or(|m| product.material == *m);
        let matches_price = self.price.contains(product.price);

        matches_search && matches_category && matches_material && matches_price
    }
}

/// Applies `criteria` to `products`, preserving relative order.
#[must_use]
pub fn filter_products(products: &[DisplayProduct], criteria: &FilterCriteria) -> Vec<DisplayProduct> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

/// Picks up to `limit` products related to `product`: same category or same
/// material, excluding the product itself. Order follows the input list.
#[must_use]
pub fn related_products(
    products: &[DisplayProduct],
    product: &DisplayProduct,
    limit: usize,
) -> Vec<DisplayProduct> {
    products
        .iter()
        .filter(|p| {
            p.id != product.id
                && (p.category == product.category || p.material == product.material)
        })
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

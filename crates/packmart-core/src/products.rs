use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// Low-stock boundary for [`StockStatus`]: fewer than this many units in
/// stock (but more than zero) renders as "low stock" on the seller dashboard.
pub const LOW_STOCK_THRESHOLD: i64 = 50;

/// A catalog product normalized from a raw backend record into the shape the
/// display layer consumes. Recomputed from the latest fetch on every render
/// pass; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayProduct {
    /// Backend numeric product ID.
    pub id: i64,
    pub name: String,
    /// Per-unit price in whole rubles, taken from the cheapest-entry
    /// wholesale tier. Always `>= 0`; `0` when the record carries no tiers.
    pub price: i64,
    /// Category inferred from the material string. Never free text.
    pub category: Category,
    /// Raw material label, or `"Unspecified"` when the backend omitted it.
    pub material: String,
    /// Placeholder asset path chosen by keyword heuristic. Never empty.
    pub image: String,
    /// Average review rating on a 0-5 scale; `4.5` when the backend has no
    /// rating yet.
    pub rating: f32,
    /// Units currently in stock.
    pub availability: i64,
    pub description: String,
}

impl DisplayProduct {
    /// Returns `true` if at least one unit is in stock.
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.availability > 0
    }

    /// Derives the dashboard stock badge from the availability count.
    #[must_use]
    pub fn stock_status(&self) -> StockStatus {
        if self.availability <= 0 {
            StockStatus::OutOfStock
        } else if self.availability < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// Stock badge shown next to a product on the seller dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "in stock"),
            StockStatus::LowStock => write!(f, "low stock"),
            StockStatus::OutOfStock => write!(f, "out of stock"),
        }
    }
}

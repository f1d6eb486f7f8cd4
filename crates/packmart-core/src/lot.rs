//! Group-buy ("lot") display arithmetic.
//!
//! A lot is a listing where buyers pledge shares of a fixed total quantity
//! before a deadline. Everything here is presentation math over a snapshot —
//! the pledge ledger, settlement, and refunds live entirely in the external
//! backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECS_PER_DAY: i64 = 86_400;

/// Snapshot of one group-buy listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotSummary {
    pub id: i64,
    pub product_id: i64,
    /// Quantity cap for the whole lot, in units.
    pub total_quantity: i64,
    /// Units pledged so far.
    pub pledged_quantity: i64,
    /// Wholesale per-unit price applied when the lot fills.
    pub price_per_unit: i64,
    /// Smallest number of units one buyer may pledge.
    pub min_share: i64,
    pub participants: u32,
    pub deadline: DateTime<Utc>,
}

impl LotSummary {
    /// Percentage of the lot already pledged, clamped to `0..=100`.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.total_quantity <= 0 {
            return 100;
        }
        let percent = self.pledged_quantity.saturating_mul(100) / self.total_quantity;
        u8::try_from(percent.clamp(0, 100)).unwrap_or(100)
    }

    /// Units still open for pledging.
    #[must_use]
    pub fn remaining_quantity(&self) -> i64 {
        (self.total_quantity - self.pledged_quantity).max(0)
    }

    /// Returns `true` once the pledged quantity reaches the cap.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.pledged_quantity >= self.total_quantity
    }

    /// Returns `true` once the deadline has passed.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline
    }

    /// Whole days left before the deadline, rounding partial days up, or 0
    /// when the deadline has passed.
    #[must_use]
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        let secs = (self.deadline - now).num_seconds();
        if secs <= 0 {
            0
        } else {
            secs.div_ceil(SECS_PER_DAY)
        }
    }

    /// Total cost of pledging `units` at the lot's wholesale price.
    #[must_use]
    pub fn share_cost(&self, units: i64) -> i64 {
        units.saturating_mul(self.price_per_unit)
    }
}

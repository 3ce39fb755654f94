//! Net worth domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate totals derived from the currently tracked balances.
///
/// Derived state: recomputed from scratch every cycle, never updated
/// incrementally.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSummary {
    /// Net worth in the user's primary currency. `None` when no tracked
    /// record contributed (empty set, or every record was excluded).
    pub primary_total: Option<Decimal>,
    /// The primary currency the total is denominated in. `None` means the
    /// total is unit-less (primary currency not configured).
    pub primary_currency: Option<String>,
    /// Signed native-currency totals, one per currency observed among the
    /// tracked records. Currencies with no tracked records never appear.
    pub per_currency_totals: HashMap<String, Decimal>,
}

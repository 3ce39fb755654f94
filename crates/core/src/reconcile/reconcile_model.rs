//! Tracked entity models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::records::{BalanceRecord, CompositeKey, SourceKind};

/// A balance entity currently being tracked.
///
/// Built fresh from a `BalanceRecord` every cycle - attributes are fully
/// replaced, never merged. The tracked map is owned exclusively by the
/// refresh service; downstream consumers see read-only snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedBalance {
    pub key: CompositeKey,
    pub display_name: String,
    /// Native-currency balance; present and non-zero by construction
    pub balance: Decimal,
    pub currency: Option<String>,
    pub type_category: String,
    pub subtype: Option<String>,
    pub institution_name: Option<String>,
    /// Balance in the user's primary currency (manual assets only)
    pub base_currency_value: Option<Decimal>,
    pub as_of: Option<DateTime<Utc>>,
}

impl TrackedBalance {
    /// Build a tracked entity from a normalized record with a present
    /// balance.
    pub(super) fn from_record(record: &BalanceRecord, balance: Decimal) -> Self {
        Self {
            key: record.key(),
            display_name: record.display_name.clone(),
            balance,
            currency: record.currency.clone(),
            type_category: record.type_category.clone(),
            subtype: record.subtype.clone(),
            institution_name: record.institution_name.clone(),
            base_currency_value: record.base_currency_value,
            as_of: record.as_of,
        }
    }

    pub fn source_kind(&self) -> SourceKind {
        self.key.source
    }
}

/// The result of one reconciliation pass.
///
/// `tracked` replaces the previous mapping wholesale; `added` and
/// `removed` tell the presentation adapter which entities to create or
/// dispose. No iteration order is guaranteed for either set.
#[derive(Debug, Clone, Default)]
pub struct ReconcileOutcome {
    pub tracked: HashMap<CompositeKey, TrackedBalance>,
    pub added: HashSet<CompositeKey>,
    pub removed: HashSet<CompositeKey>,
}

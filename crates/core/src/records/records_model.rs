//! Balance record domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a balance record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceKind {
    /// A balance entered directly by the user
    Manual,
    /// A balance synchronized from a bank or brokerage via an aggregator
    Linked,
}

impl SourceKind {
    /// Stable lowercase slug used in entity identifiers.
    pub fn slug(&self) -> &'static str {
        match self {
            SourceKind::Manual => "manual",
            SourceKind::Linked => "linked",
        }
    }

    /// Human-readable label used in display-name fallbacks.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Manual => "Manual",
            SourceKind::Linked => "Linked",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The identity of a balance-bearing entity across refresh cycles.
///
/// Upstream ids are only unique within their source, so the pair
/// `(source, id)` is the true key - a manual asset and a linked account
/// may share the same numeric id without colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompositeKey {
    pub source: SourceKind,
    pub id: i64,
}

impl CompositeKey {
    pub fn new(source: SourceKind, id: i64) -> Self {
        Self { source, id }
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.source.slug(), self.id)
    }
}

/// A raw balance record as handed over by the fetch collaborator.
///
/// Every field is optional: the upstream API omits fields freely and the
/// normalizer is responsible for deciding what is usable. Balances and
/// timestamps arrive as strings, matching the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RawBalance {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    /// Native-currency balance as a decimal string
    pub balance: Option<String>,
    pub currency: Option<String>,
    /// Free-text classification (e.g. "cash", "credit", "depository")
    pub type_name: Option<String>,
    pub subtype_name: Option<String>,
    pub institution_name: Option<String>,
    /// Balance pre-converted to the user's primary currency. Only manual
    /// assets carry this in the source system.
    pub to_base: Option<f64>,
    /// ISO 8601 timestamp the balance was last known accurate
    pub balance_as_of: Option<String>,
}

/// A normalized balance record, re-created fresh on every refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord {
    pub id: i64,
    pub source_kind: SourceKind,
    pub display_name: String,
    /// Native-currency balance; absent means unknown, not zero
    pub balance: Option<Decimal>,
    /// Uppercased ISO-like currency code
    pub currency: Option<String>,
    /// Lowercased classification; empty string if absent
    pub type_category: String,
    pub subtype: Option<String>,
    pub institution_name: Option<String>,
    /// Balance in the user's primary currency (manual assets only)
    pub base_currency_value: Option<Decimal>,
    pub as_of: Option<DateTime<Utc>>,
}

impl BalanceRecord {
    /// The composite identity used for entity tracking.
    pub fn key(&self) -> CompositeKey {
        CompositeKey::new(self.source_kind, self.id)
    }
}

//! Converts raw source records into normalized `BalanceRecord`s.
//!
//! Normalization is lenient: a malformed field degrades to "absent" with
//! a diagnostic rather than failing the batch. Only a missing identifier
//! drops a record entirely.

use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::records_model::{BalanceRecord, RawBalance, SourceKind};

/// Normalize a batch of raw records from one source.
///
/// Records without a usable identifier are dropped with a warning. The
/// same raw input always yields the same normalized output.
pub fn normalize(raw_records: &[RawBalance], source_kind: SourceKind) -> Vec<BalanceRecord> {
    raw_records
        .iter()
        .filter_map(|raw| normalize_one(raw, source_kind))
        .collect()
}

fn normalize_one(raw: &RawBalance, source_kind: SourceKind) -> Option<BalanceRecord> {
    let id = match raw.id {
        Some(id) => id,
        None => {
            warn!(
                "Dropping {} record without an id (name: {:?})",
                source_kind.slug(),
                raw.name
            );
            return None;
        }
    };

    let balance = raw
        .balance
        .as_deref()
        .and_then(|text| parse_balance(text, source_kind, id));

    // Linked records never carry a pre-converted value in the source system
    let base_currency_value = match source_kind {
        SourceKind::Manual => raw.to_base.and_then(Decimal::from_f64_retain),
        SourceKind::Linked => None,
    };

    let currency = raw
        .currency
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_uppercase);

    let type_category = raw
        .type_name
        .as_deref()
        .map(|t| t.trim().to_lowercase())
        .unwrap_or_default();

    let display_name = resolve_display_name(raw, source_kind, id);

    let as_of = raw
        .balance_as_of
        .as_deref()
        .and_then(|text| parse_as_of(text, source_kind, id));

    Some(BalanceRecord {
        id,
        source_kind,
        display_name,
        balance,
        currency,
        type_category,
        subtype: raw.subtype_name.clone().filter(|s| !s.is_empty()),
        institution_name: raw.institution_name.clone().filter(|s| !s.is_empty()),
        base_currency_value,
        as_of,
    })
}

/// Resolution order: explicit display name, raw name, synthesized
/// placeholder.
fn resolve_display_name(raw: &RawBalance, source_kind: SourceKind, id: i64) -> String {
    raw.display_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .or_else(|| {
            raw.name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
        })
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} {}", source_kind.label(), id))
}

fn parse_balance(text: &str, source_kind: SourceKind, id: i64) -> Option<Decimal> {
    match Decimal::from_str(text.trim()) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(
                "Could not parse balance '{}' for {} record {}: {}",
                text,
                source_kind.slug(),
                id,
                err
            );
            None
        }
    }
}

fn parse_as_of(text: &str, source_kind: SourceKind, id: i64) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(text) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(err) => {
            warn!(
                "Could not parse balance_as_of '{}' for {} record {}: {}",
                text,
                source_kind.slug(),
                id,
                err
            );
            None
        }
    }
}

//! Net worth aggregation over the tracked balance set.

use log::debug;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

use super::net_worth_model::NetWorthSummary;
use crate::constants::DECIMAL_PRECISION;
use crate::inversion::signed;
use crate::records::{CompositeKey, SourceKind};
use crate::reconcile::TrackedBalance;

/// Compute net worth totals from the tracked balances.
///
/// The primary total sums manual records by their pre-converted
/// base-currency value. Linked records carry no conversion, so they
/// contribute their native balance only when denominated in the primary
/// currency; cross-currency linked balances are excluded with a
/// diagnostic (no FX conversion is performed - a known limitation of the
/// source data, not silently papered over).
///
/// Per-currency totals sum native balances per distinct currency across
/// both source kinds. All sums apply the inversion policy by type
/// category and stay in decimal arithmetic throughout.
pub fn aggregate(
    tracked: &HashMap<CompositeKey, TrackedBalance>,
    primary_currency: Option<&str>,
    inverted_categories: &HashSet<String>,
) -> NetWorthSummary {
    let normalized_primary = primary_currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_uppercase);

    let mut primary_total = Decimal::ZERO;
    let mut primary_contributed = false;
    let mut per_currency_totals: HashMap<String, Decimal> = HashMap::new();

    for entity in tracked.values() {
        // Per-currency totals use the native, unconverted balance
        if let Some(currency) = &entity.currency {
            *per_currency_totals
                .entry(currency.clone())
                .or_insert(Decimal::ZERO) +=
                signed(entity.balance, &entity.type_category, inverted_categories);
        }

        match entity.source_kind() {
            SourceKind::Manual => {
                if let Some(base_value) = entity.base_currency_value {
                    primary_total +=
                        signed(base_value, &entity.type_category, inverted_categories);
                    primary_contributed = true;
                }
            }
            SourceKind::Linked => {
                let matches_primary = match (&entity.currency, &normalized_primary) {
                    (Some(currency), Some(primary)) => currency == primary,
                    _ => false,
                };
                if matches_primary {
                    primary_total +=
                        signed(entity.balance, &entity.type_category, inverted_categories);
                    primary_contributed = true;
                } else {
                    debug!(
                        "Excluding linked balance {} ({:?}) from primary total: no conversion to {:?}",
                        entity.key, entity.currency, normalized_primary
                    );
                }
            }
        }
    }

    for total in per_currency_totals.values_mut() {
        *total = total.round_dp(DECIMAL_PRECISION);
    }

    NetWorthSummary {
        primary_total: primary_contributed.then(|| primary_total.round_dp(DECIMAL_PRECISION)),
        primary_currency: normalized_primary,
        per_currency_totals,
    }
}

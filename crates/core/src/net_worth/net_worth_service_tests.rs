//! Unit tests for net worth aggregation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{HashMap, HashSet};

use super::aggregate;
use crate::inversion::default_inverted_categories;
use crate::records::{CompositeKey, SourceKind};
use crate::reconcile::TrackedBalance;

fn tracked_balance(
    source: SourceKind,
    id: i64,
    balance: Decimal,
    currency: Option<&str>,
    type_category: &str,
    base_currency_value: Option<Decimal>,
) -> TrackedBalance {
    TrackedBalance {
        key: CompositeKey::new(source, id),
        display_name: format!("Account {}", id),
        balance,
        currency: currency.map(str::to_string),
        type_category: type_category.to_string(),
        subtype: None,
        institution_name: None,
        base_currency_value,
        as_of: None,
    }
}

fn tracked_map(entities: Vec<TrackedBalance>) -> HashMap<CompositeKey, TrackedBalance> {
    entities.into_iter().map(|e| (e.key, e)).collect()
}

#[test]
fn test_empty_set_yields_no_primary_total() {
    let summary = aggregate(&HashMap::new(), Some("USD"), &default_inverted_categories());

    assert!(summary.primary_total.is_none());
    assert_eq!(summary.primary_currency.as_deref(), Some("USD"));
    assert!(summary.per_currency_totals.is_empty());
}

#[test]
fn test_manual_records_sum_base_currency_values() {
    let tracked = tracked_map(vec![
        tracked_balance(
            SourceKind::Manual,
            1,
            dec!(80),
            Some("EUR"),
            "cash",
            Some(dec!(100)),
        ),
        tracked_balance(
            SourceKind::Manual,
            2,
            dec!(200),
            Some("USD"),
            "investment",
            Some(dec!(200)),
        ),
    ]);

    let summary = aggregate(&tracked, Some("USD"), &default_inverted_categories());

    assert_eq!(summary.primary_total, Some(dec!(300)));
}

#[test]
fn test_inverted_manual_credit_contributes_negative() {
    let tracked = tracked_map(vec![tracked_balance(
        SourceKind::Manual,
        1,
        dec!(100),
        Some("USD"),
        "credit",
        Some(dec!(100)),
    )]);

    let config: HashSet<String> = ["credit".to_string()].into_iter().collect();
    let summary = aggregate(&tracked, Some("USD"), &config);

    assert_eq!(summary.primary_total, Some(dec!(-100)));
    assert_eq!(summary.per_currency_totals["USD"], dec!(-100));
}

#[test]
fn test_linked_records_primary_and_per_currency() {
    // Spec example: linked USD 50 + linked EUR 30, primary USD
    let tracked = tracked_map(vec![
        tracked_balance(SourceKind::Linked, 1, dec!(50), Some("USD"), "depository", None),
        tracked_balance(SourceKind::Linked, 2, dec!(30), Some("EUR"), "depository", None),
    ]);

    let summary = aggregate(&tracked, Some("USD"), &default_inverted_categories());

    assert_eq!(summary.primary_total, Some(dec!(50)));
    assert_eq!(summary.per_currency_totals.len(), 2);
    assert_eq!(summary.per_currency_totals["USD"], dec!(50));
    assert_eq!(summary.per_currency_totals["EUR"], dec!(30));
}

#[test]
fn test_primary_currency_match_is_case_insensitive() {
    let tracked = tracked_map(vec![tracked_balance(
        SourceKind::Linked,
        1,
        dec!(50),
        Some("USD"),
        "depository",
        None,
    )]);

    let summary = aggregate(&tracked, Some("usd"), &default_inverted_categories());

    assert_eq!(summary.primary_total, Some(dec!(50)));
    assert_eq!(summary.primary_currency.as_deref(), Some("USD"));
}

#[test]
fn test_cross_currency_linked_only_excluded_from_primary() {
    let tracked = tracked_map(vec![tracked_balance(
        SourceKind::Linked,
        1,
        dec!(30),
        Some("EUR"),
        "depository",
        None,
    )]);

    let summary = aggregate(&tracked, Some("USD"), &default_inverted_categories());

    // Nothing contributed to the primary sum, but the per-currency total
    // still carries the native balance.
    assert!(summary.primary_total.is_none());
    assert_eq!(summary.per_currency_totals["EUR"], dec!(30));
}

#[test]
fn test_per_currency_totals_ignore_other_currencies() {
    let tracked = tracked_map(vec![
        tracked_balance(SourceKind::Manual, 1, dec!(10), Some("USD"), "cash", None),
        tracked_balance(SourceKind::Linked, 2, dec!(20), Some("USD"), "depository", None),
        tracked_balance(SourceKind::Manual, 3, dec!(100), Some("CAD"), "loan", None),
    ]);

    let summary = aggregate(&tracked, None, &default_inverted_categories());

    assert_eq!(summary.per_currency_totals["USD"], dec!(30));
    assert_eq!(summary.per_currency_totals["CAD"], dec!(-100));
}

#[test]
fn test_missing_primary_currency_is_unit_less() {
    let tracked = tracked_map(vec![tracked_balance(
        SourceKind::Manual,
        1,
        dec!(100),
        Some("USD"),
        "cash",
        Some(dec!(100)),
    )]);

    let summary = aggregate(&tracked, None, &default_inverted_categories());

    // Manual base-currency values still sum; the unit is undefined.
    assert_eq!(summary.primary_total, Some(dec!(100)));
    assert!(summary.primary_currency.is_none());
}

#[test]
fn test_record_without_currency_skips_per_currency_totals() {
    let tracked = tracked_map(vec![tracked_balance(
        SourceKind::Manual,
        1,
        dec!(100),
        None,
        "cash",
        Some(dec!(100)),
    )]);

    let summary = aggregate(&tracked, Some("USD"), &default_inverted_categories());

    assert!(summary.per_currency_totals.is_empty());
    assert_eq!(summary.primary_total, Some(dec!(100)));
}

#[test]
fn test_decimal_sums_have_no_float_drift() {
    let tracked = tracked_map(
        (1..=10)
            .map(|id| {
                tracked_balance(SourceKind::Linked, id, dec!(0.1), Some("USD"), "cash", None)
            })
            .collect(),
    );

    let summary = aggregate(&tracked, Some("USD"), &default_inverted_categories());

    assert_eq!(summary.per_currency_totals["USD"], dec!(1.0));
    assert_eq!(summary.primary_total, Some(dec!(1.0)));
}

//! Unit tests for the reconciliation engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::reconcile;
use crate::records::{BalanceRecord, CompositeKey, SourceKind};

fn record(source: SourceKind, id: i64, balance: Option<Decimal>) -> BalanceRecord {
    BalanceRecord {
        id,
        source_kind: source,
        display_name: format!("Account {}", id),
        balance,
        currency: Some("USD".to_string()),
        type_category: "cash".to_string(),
        subtype: None,
        institution_name: None,
        base_currency_value: None,
        as_of: None,
    }
}

fn key(source: SourceKind, id: i64) -> CompositeKey {
    CompositeKey::new(source, id)
}

#[test]
fn test_first_cycle_adds_all_present_records() {
    let records = vec![
        record(SourceKind::Manual, 1, Some(dec!(100))),
        record(SourceKind::Linked, 2, Some(dec!(-55.20))),
    ];

    let outcome = reconcile(&HashMap::new(), &records);

    assert_eq!(outcome.tracked.len(), 2);
    assert_eq!(outcome.added.len(), 2);
    assert!(outcome.removed.is_empty());
    assert!(outcome.added.contains(&key(SourceKind::Manual, 1)));
    assert!(outcome.added.contains(&key(SourceKind::Linked, 2)));
}

#[test]
fn test_idempotent_under_stable_input() {
    let records = vec![
        record(SourceKind::Manual, 1, Some(dec!(100))),
        record(SourceKind::Linked, 2, Some(dec!(200))),
    ];

    let first = reconcile(&HashMap::new(), &records);
    let second = reconcile(&first.tracked, &records);

    assert!(second.added.is_empty());
    assert!(second.removed.is_empty());
    assert_eq!(second.tracked.len(), 2);
}

#[test]
fn test_vanished_record_is_removed() {
    let first = reconcile(
        &HashMap::new(),
        &[
            record(SourceKind::Manual, 1, Some(dec!(100))),
            record(SourceKind::Manual, 2, Some(dec!(50))),
        ],
    );

    let second = reconcile(&first.tracked, &[record(SourceKind::Manual, 1, Some(dec!(100)))]);

    assert_eq!(second.removed.len(), 1);
    assert!(second.removed.contains(&key(SourceKind::Manual, 2)));
    assert!(!second.tracked.contains_key(&key(SourceKind::Manual, 2)));
}

#[test]
fn test_zeroed_balance_treated_as_removed() {
    let first = reconcile(
        &HashMap::new(),
        &[record(SourceKind::Linked, 9, Some(dec!(10)))],
    );

    let second = reconcile(&first.tracked, &[record(SourceKind::Linked, 9, Some(dec!(0)))]);

    assert!(second.tracked.is_empty());
    assert!(second.removed.contains(&key(SourceKind::Linked, 9)));
}

#[test]
fn test_absent_balance_treated_as_removed() {
    let first = reconcile(
        &HashMap::new(),
        &[record(SourceKind::Manual, 4, Some(dec!(10)))],
    );

    let second = reconcile(&first.tracked, &[record(SourceKind::Manual, 4, None)]);

    assert!(second.tracked.is_empty());
    assert!(second.removed.contains(&key(SourceKind::Manual, 4)));
}

#[test]
fn test_sub_epsilon_balance_is_not_tracked() {
    let outcome = reconcile(
        &HashMap::new(),
        &[record(SourceKind::Manual, 1, Some(dec!(0.0000001)))],
    );

    assert!(outcome.tracked.is_empty());
    assert!(outcome.added.is_empty());
}

#[test]
fn test_negative_balance_above_epsilon_is_tracked() {
    let outcome = reconcile(
        &HashMap::new(),
        &[record(SourceKind::Linked, 1, Some(dec!(-0.01)))],
    );

    assert_eq!(outcome.tracked.len(), 1);
}

#[test]
fn test_readded_key_is_a_fresh_add() {
    let records = vec![record(SourceKind::Manual, 1, Some(dec!(100)))];

    let first = reconcile(&HashMap::new(), &records);
    let gone = reconcile(&first.tracked, &[]);
    assert!(gone.removed.contains(&key(SourceKind::Manual, 1)));

    let back = reconcile(&gone.tracked, &records);

    assert!(back.added.contains(&key(SourceKind::Manual, 1)));
    assert_eq!(back.tracked.len(), 1);
}

#[test]
fn test_same_id_different_sources_do_not_collide() {
    let records = vec![
        record(SourceKind::Manual, 1, Some(dec!(100))),
        record(SourceKind::Linked, 1, Some(dec!(200))),
    ];

    let outcome = reconcile(&HashMap::new(), &records);

    assert_eq!(outcome.tracked.len(), 2);
    assert_eq!(
        outcome.tracked[&key(SourceKind::Manual, 1)].balance,
        dec!(100)
    );
    assert_eq!(
        outcome.tracked[&key(SourceKind::Linked, 1)].balance,
        dec!(200)
    );
}

#[test]
fn test_surviving_entity_attributes_are_replaced() {
    let first = reconcile(
        &HashMap::new(),
        &[record(SourceKind::Manual, 1, Some(dec!(100)))],
    );

    let mut renamed = record(SourceKind::Manual, 1, Some(dec!(150)));
    renamed.display_name = "Renamed".to_string();
    renamed.institution_name = Some("New Bank".to_string());

    let second = reconcile(&first.tracked, &[renamed]);

    let entity = &second.tracked[&key(SourceKind::Manual, 1)];
    assert_eq!(entity.balance, dec!(150));
    assert_eq!(entity.display_name, "Renamed");
    assert_eq!(entity.institution_name.as_deref(), Some("New Bank"));
    assert!(second.added.is_empty());
    assert!(second.removed.is_empty());
}

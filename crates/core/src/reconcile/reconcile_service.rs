//! Reconciliation of tracked balance entities across refresh cycles.

use log::debug;
use std::collections::{HashMap, HashSet};

use super::reconcile_model::{ReconcileOutcome, TrackedBalance};
use crate::constants::BALANCE_EPSILON;
use crate::records::{BalanceRecord, CompositeKey};

/// Reconcile the previously tracked entities against a freshly
/// normalized batch of records.
///
/// A record is "present" when its balance is known and at least
/// `BALANCE_EPSILON` in magnitude. A balance that zeroed out is treated
/// identically to one that disappeared: its key lands in `removed`. A
/// key that reappears after removal is a fresh `added` event with no
/// continuity from its prior tracked entity.
///
/// Every surviving entity is rebuilt from its current record, so
/// attributes are fully replaced each cycle.
pub fn reconcile(
    previous: &HashMap<CompositeKey, TrackedBalance>,
    current_records: &[BalanceRecord],
) -> ReconcileOutcome {
    let mut tracked: HashMap<CompositeKey, TrackedBalance> =
        HashMap::with_capacity(current_records.len());

    for record in current_records {
        let Some(balance) = record.balance else {
            continue;
        };
        if balance.abs() < BALANCE_EPSILON {
            continue;
        }

        let key = record.key();
        if tracked
            .insert(key, TrackedBalance::from_record(record, balance))
            .is_some()
        {
            debug!("Duplicate composite key {} in batch; keeping the later record", key);
        }
    }

    let added: HashSet<CompositeKey> = tracked
        .keys()
        .filter(|key| !previous.contains_key(key))
        .copied()
        .collect();

    let removed: HashSet<CompositeKey> = previous
        .keys()
        .filter(|key| !tracked.contains_key(key))
        .copied()
        .collect();

    if !added.is_empty() || !removed.is_empty() {
        debug!(
            "Reconciled balances: {} tracked, {} added, {} removed",
            tracked.len(),
            added.len(),
            removed.len()
        );
    }

    ReconcileOutcome {
        tracked,
        added,
        removed,
    }
}

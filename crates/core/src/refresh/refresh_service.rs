//! The refresh cycle service.

use log::{debug, error, info};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::time::MissedTickBehavior;

use super::refresh_model::{BalanceSnapshot, RefreshReport};
use super::refresh_traits::{BalanceFetcher, BalancePublisher};
use crate::errors::Result;
use crate::net_worth::aggregate;
use crate::records::{normalize, CompositeKey, SourceKind};
use crate::reconcile::{reconcile, TrackedBalance};
use crate::settings::TrackerSettings;

/// Drives the fetch -> normalize -> reconcile -> aggregate -> publish
/// pipeline.
///
/// Each cycle runs to completion before the next may start, and the
/// tracked map is replaced wholesale only after a cycle succeeds -
/// readers never observe a partial update. On fetch failure the previous
/// tracked state and last published snapshot remain valid (stale data is
/// preferred over tearing entities down on a transient error).
pub struct RefreshService<P: BalancePublisher> {
    fetcher: Arc<dyn BalanceFetcher>,
    publisher: Arc<P>,
    settings: TrackerSettings,
    tracked: RwLock<HashMap<CompositeKey, TrackedBalance>>,
    latest_snapshot: RwLock<Option<BalanceSnapshot>>,
}

impl<P: BalancePublisher> RefreshService<P> {
    /// Creates a new RefreshService instance.
    pub fn new(
        fetcher: Arc<dyn BalanceFetcher>,
        publisher: Arc<P>,
        settings: TrackerSettings,
    ) -> Self {
        Self {
            fetcher,
            publisher,
            settings,
            tracked: RwLock::new(HashMap::new()),
            latest_snapshot: RwLock::new(None),
        }
    }

    /// The snapshot published by the most recent successful cycle.
    pub fn latest_snapshot(&self) -> Option<BalanceSnapshot> {
        self.latest_snapshot.read().unwrap().clone()
    }

    /// Run one full refresh cycle.
    pub async fn refresh_once(&self) -> Result<RefreshReport> {
        // A fetch failure propagates here before any state is touched
        let payload = self.fetcher.fetch_balances().await?;

        debug!(
            "Fetched {} manual assets, {} linked accounts",
            payload.manual_assets.len(),
            payload.linked_accounts.len()
        );

        let mut records = normalize(&payload.manual_assets, SourceKind::Manual);
        records.extend(normalize(&payload.linked_accounts, SourceKind::Linked));

        // The profile's primary currency, when reported, wins over the
        // configured one for this cycle
        let primary_currency = payload
            .profile
            .as_ref()
            .and_then(|p| p.primary_currency.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_uppercase)
            .or_else(|| self.settings.primary_currency.clone());

        let previous = self.tracked.read().unwrap().clone();
        let outcome = reconcile(&previous, &records);
        let summary = aggregate(
            &outcome.tracked,
            primary_currency.as_deref(),
            &self.settings.inverted_type_categories,
        );
        let snapshot = BalanceSnapshot::build(
            &outcome.tracked,
            &summary,
            &self.settings.inverted_type_categories,
        );

        let report = RefreshReport {
            tracked: outcome.tracked.len(),
            added: outcome.added.len(),
            removed: outcome.removed.len(),
        };

        // Commit: whole-map replacement, then publish
        *self.tracked.write().unwrap() = outcome.tracked;
        *self.latest_snapshot.write().unwrap() = Some(snapshot.clone());

        self.publisher
            .publish(&snapshot, &outcome.added, &outcome.removed);

        Ok(report)
    }

    /// Drive refresh cycles on the configured interval until cancelled.
    ///
    /// The first cycle runs immediately. Failed cycles are logged and
    /// skipped; the loop keeps going with the previous data intact.
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.settings.refresh_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            match self.refresh_once().await {
                Ok(report) => {
                    info!(
                        "Refresh complete: {} tracked, {} added, {} removed",
                        report.tracked, report.added, report.removed
                    );
                }
                Err(err) => {
                    error!("Refresh cycle failed: {}. Keeping previous balances.", err);
                }
            }
        }
    }
}

//! Traits at the refresh cycle's boundaries.

use async_trait::async_trait;
use std::collections::HashSet;

use super::refresh_model::{BalanceSnapshot, FetchPayload};
use crate::errors::Result;
use crate::records::CompositeKey;

/// Trait for fetching raw balance data from the upstream API.
///
/// Any blocking or network I/O happens entirely behind this boundary. A
/// failed fetch must surface as an error so the cycle aborts without
/// mutating tracked state.
#[async_trait]
pub trait BalanceFetcher: Send + Sync {
    /// Fetch the per-cycle result: manual assets, linked accounts, and
    /// the optional user profile.
    async fn fetch_balances(&self) -> Result<FetchPayload>;
}

/// Trait for the presentation adapter receiving refresh results.
///
/// The core only computes which entities appeared and vanished; the
/// publisher performs the actual creation and disposal of
/// presentation-layer objects.
pub trait BalancePublisher: Send + Sync {
    fn publish(
        &self,
        snapshot: &BalanceSnapshot,
        added: &HashSet<CompositeKey>,
        removed: &HashSet<CompositeKey>,
    );
}

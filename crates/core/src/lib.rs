//! Balancewatch Core - Domain models, reconciliation, and aggregation.
//!
//! This crate contains the balance-tracking pipeline: normalizing raw
//! account records, reconciling the tracked entity set across refresh
//! cycles, and aggregating net worth totals. It is transport-agnostic;
//! the `connect` crate supplies the Lunch Money API client behind the
//! `BalanceFetcher` trait.

pub mod constants;
pub mod errors;
pub mod inversion;
pub mod net_worth;
pub mod reconcile;
pub mod records;
pub mod refresh;
pub mod settings;

// Re-export common types from the records and refresh modules
pub use records::*;
pub use refresh::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

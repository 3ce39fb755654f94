//! Refresh cycle driver.
//!
//! Runs the fetch -> normalize -> reconcile -> aggregate -> publish
//! pipeline on a fixed interval. The service owns the tracked entity map
//! exclusively; the presentation layer reacts to published snapshots and
//! added/removed sets rather than reaching into shared state.

mod refresh_model;
mod refresh_service;
mod refresh_traits;

pub use refresh_model::*;
pub use refresh_service::RefreshService;
pub use refresh_traits::{BalanceFetcher, BalancePublisher};

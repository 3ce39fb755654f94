//! Reconciliation module.
//!
//! Decides, on each refresh, which balance entities should exist:
//! computes the add and remove sets between the previously tracked
//! entities and a freshly normalized batch of records.

mod reconcile_model;
mod reconcile_service;

pub use reconcile_model::{ReconcileOutcome, TrackedBalance};
pub use reconcile_service::reconcile;

#[cfg(test)]
mod reconcile_service_tests;

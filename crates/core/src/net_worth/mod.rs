//! Net worth aggregation module.
//!
//! Recomputes, wholesale on every refresh, one primary-currency total and
//! one native-currency total per distinct currency observed among the
//! tracked balances.

mod net_worth_model;
mod net_worth_service;

pub use net_worth_model::NetWorthSummary;
pub use net_worth_service::aggregate;

#[cfg(test)]
mod net_worth_service_tests;

//! Balancewatch Connect - Lunch Money API client.
//!
//! Fetches manual assets, Plaid-linked accounts, and the user profile
//! from the Lunch Money API and maps them into the core's raw record
//! shapes. The client implements `balancewatch_core::BalanceFetcher`, so
//! the refresh service never sees HTTP details.

mod client;
mod mapping;
mod models;

pub use client::{LunchMoneyClient, DEFAULT_API_URL};
pub use models::{ApiAsset, ApiPlaidAccount, ApiUser};

//! Models representing Lunch Money API response structures.
//!
//! Fields mirror the wire format: balances arrive as decimal strings,
//! `to_base` as a float already converted to the user's primary currency.

use serde::Deserialize;

/// A manually managed asset from `GET /v1/assets`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiAsset {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    /// Native-currency balance as a decimal string
    pub balance: Option<String>,
    pub currency: Option<String>,
    /// Classification (e.g. "cash", "credit", "loan", "real estate")
    pub type_name: Option<String>,
    pub subtype_name: Option<String>,
    pub institution_name: Option<String>,
    /// Balance converted to the user's primary currency
    pub to_base: Option<f64>,
    pub balance_as_of: Option<String>,
    #[serde(default)]
    pub exclude_transactions: bool,
    pub closed_on: Option<String>,
}

/// A Plaid-synchronized account from `GET /v1/plaid_accounts`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiPlaidAccount {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub balance: Option<String>,
    pub currency: Option<String>,
    /// Plaid account type (e.g. "depository", "credit", "loan")
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub subtype: Option<String>,
    pub institution_name: Option<String>,
    pub mask: Option<String>,
    /// Connection status (e.g. "active", "inactive", "error")
    pub status: Option<String>,
    pub balance_last_update: Option<String>,
    pub date_linked: Option<String>,
}

/// The current user from `GET /v1/me`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiUser {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_id: Option<i64>,
    pub budget_name: Option<String>,
    pub primary_currency: Option<String>,
    pub api_key_label: Option<String>,
}

/// Wrapper for the assets list response.
#[derive(Debug, Deserialize)]
pub(crate) struct AssetsResponse {
    #[serde(default)]
    pub assets: Vec<ApiAsset>,
}

/// Wrapper for the Plaid accounts list response.
#[derive(Debug, Deserialize)]
pub(crate) struct PlaidAccountsResponse {
    #[serde(default)]
    pub plaid_accounts: Vec<ApiPlaidAccount>,
}

/// Error body the API returns on failures.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

//! HTTP client for the Lunch Money API.
//!
//! A thin reqwest wrapper: bearer-token auth, JSON decoding, and mapping
//! of HTTP failures to the core's `Fetch` error so a failed call aborts
//! the refresh cycle without touching tracked state.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;

use balancewatch_core::errors::{Error, Result};
use balancewatch_core::refresh::{BalanceFetcher, FetchPayload};

use super::mapping::{asset_to_raw, plaid_account_to_raw, user_to_profile};
use super::models::{
    ApiAsset, ApiErrorResponse, ApiPlaidAccount, ApiUser, AssetsResponse, PlaidAccountsResponse,
};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for the Lunch Money API.
pub const DEFAULT_API_URL: &str = "https://dev.lunchmoney.app";

/// HTTP client for the Lunch Money API.
///
/// # Example
///
/// ```ignore
/// let client = LunchMoneyClient::new(DEFAULT_API_URL, "your-token")?;
/// let assets = client.get_assets().await?;
/// ```
#[derive(Debug, Clone)]
pub struct LunchMoneyClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderValue,
}

impl LunchMoneyClient {
    /// Create a new Lunch Money API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the API (e.g., "https://dev.lunchmoney.app")
    /// * `access_token` - A Lunch Money developer access token
    ///
    /// # Errors
    ///
    /// Returns an error if the access token format is invalid or the HTTP
    /// client cannot be initialized.
    pub fn new(base_url: &str, access_token: &str) -> Result<Self> {
        let auth_header = HeaderValue::from_str(&format!("Bearer {}", access_token))
            .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[LunchMoney] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Parse an HTTP response, extracting the API error body when present.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                let msg = err
                    .message
                    .or(err.error)
                    .unwrap_or_else(|| format!("HTTP {}", status));
                return Err(Error::Fetch(format!("API error: {}", msg)));
            }
            return Err(Error::Fetch(format!(
                "API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Fetch(format!("Failed to parse response: {}", e)))
    }

    /// Fetch all manually managed assets.
    pub async fn get_assets(&self) -> Result<Vec<ApiAsset>> {
        let response: AssetsResponse = self.get("/v1/assets").await?;
        Ok(response.assets)
    }

    /// Fetch all Plaid-linked accounts.
    pub async fn get_plaid_accounts(&self) -> Result<Vec<ApiPlaidAccount>> {
        let response: PlaidAccountsResponse = self.get("/v1/plaid_accounts").await?;
        Ok(response.plaid_accounts)
    }

    /// Fetch the current user.
    pub async fn get_user(&self) -> Result<ApiUser> {
        self.get("/v1/me").await
    }

    /// Validate the access token by listing assets once.
    pub async fn validate_token(&self) -> Result<()> {
        self.get_assets().await?;
        Ok(())
    }
}

#[async_trait]
impl BalanceFetcher for LunchMoneyClient {
    async fn fetch_balances(&self) -> Result<FetchPayload> {
        let assets = self.get_assets().await?;
        let plaid_accounts = self.get_plaid_accounts().await?;

        // The profile only refines the primary currency; a failure here
        // should not abort the whole cycle
        let profile = match self.get_user().await {
            Ok(user) => Some(user_to_profile(user)),
            Err(err) => {
                warn!("Could not fetch user profile: {}", err);
                None
            }
        };

        debug!(
            "Fetched {} assets and {} plaid accounts",
            assets.len(),
            plaid_accounts.len()
        );

        Ok(FetchPayload {
            manual_assets: assets.iter().map(asset_to_raw).collect(),
            linked_accounts: plaid_accounts.iter().map(plaid_account_to_raw).collect(),
            profile,
        })
    }
}

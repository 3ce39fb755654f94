//! Tracker configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

use crate::constants::DEFAULT_REFRESH_INTERVAL_MINUTES;
use crate::inversion::default_inverted_categories;

/// Configuration for the balance tracker, immutable per refresh cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSettings {
    /// The currency net worth is primarily reported in. `None` degrades
    /// the primary aggregate to unit-less rather than failing.
    pub primary_currency: Option<String>,
    /// Type categories whose balance sign is flipped when summed
    /// (lowercase, exact match).
    pub inverted_type_categories: HashSet<String>,
    /// How often the refresh driver polls the upstream API.
    pub refresh_interval: Duration,
}

impl TrackerSettings {
    /// Build settings with normalized fields: the primary currency is
    /// uppercased, the inverted set lowercased, empty strings dropped.
    pub fn new(
        primary_currency: Option<String>,
        inverted_type_categories: impl IntoIterator<Item = String>,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            primary_currency: primary_currency
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_uppercase),
            inverted_type_categories: inverted_type_categories
                .into_iter()
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .collect(),
            refresh_interval,
        }
    }
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            primary_currency: None,
            inverted_type_categories: default_inverted_categories(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_MINUTES * 60),
        }
    }
}

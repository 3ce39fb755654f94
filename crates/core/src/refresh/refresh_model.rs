//! Refresh cycle models: fetch payloads and presentation snapshots.

use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::constants::{NET_WORTH_CURRENCY_PREFIX, NET_WORTH_ENTITY_ID};
use crate::inversion::is_inverted;
use crate::net_worth::NetWorthSummary;
use crate::records::{CompositeKey, RawBalance, SourceKind};
use crate::reconcile::TrackedBalance;

/// The user profile exposed by the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_name: Option<String>,
    pub primary_currency: Option<String>,
}

/// One cycle's worth of raw data from the fetch collaborator.
#[derive(Debug, Clone, Default)]
pub struct FetchPayload {
    pub manual_assets: Vec<RawBalance>,
    pub linked_accounts: Vec<RawBalance>,
    pub profile: Option<UserProfile>,
}

/// Descriptive attributes exposed alongside a balance value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAttributes {
    pub source_kind: SourceKind,
    pub type_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
    pub inverted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_as_of: Option<DateTime<Utc>>,
}

/// Presentation view of one tracked balance entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityView {
    pub key: CompositeKey,
    /// Stable identifier usable as a persistent entity id
    pub unique_id: String,
    pub name: String,
    /// Native-currency balance as a display value
    pub value: f64,
    /// Currency unit, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub attributes: EntityAttributes,
}

/// Presentation view of one aggregate total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateView {
    pub unique_id: String,
    pub name: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Everything the presentation layer needs after one refresh cycle.
///
/// Decimal arithmetic stops here: values are converted to f64 only for
/// outward reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshot {
    pub entities: Vec<EntityView>,
    /// Primary net worth, absent when nothing contributed to it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<AggregateView>,
    /// One aggregate per currency observed among tracked balances
    pub per_currency: Vec<AggregateView>,
    pub generated_at: DateTime<Utc>,
}

impl BalanceSnapshot {
    /// Build the outward-facing snapshot from the tracked map and the
    /// freshly computed aggregates.
    pub fn build(
        tracked: &HashMap<CompositeKey, TrackedBalance>,
        summary: &NetWorthSummary,
        inverted_categories: &HashSet<String>,
    ) -> Self {
        let mut entities: Vec<EntityView> = tracked
            .values()
            .map(|entity| EntityView {
                key: entity.key,
                unique_id: entity.key.to_string(),
                name: entity.display_name.clone(),
                value: entity.balance.to_f64().unwrap_or(0.0),
                unit: entity.currency.clone(),
                attributes: EntityAttributes {
                    source_kind: entity.source_kind(),
                    type_category: entity.type_category.clone(),
                    subtype: entity.subtype.clone(),
                    institution_name: entity.institution_name.clone(),
                    inverted: is_inverted(&entity.type_category, inverted_categories),
                    balance_as_of: entity.as_of,
                },
            })
            .collect();
        entities.sort_by(|a, b| a.unique_id.cmp(&b.unique_id));

        let primary = summary.primary_total.map(|total| AggregateView {
            unique_id: NET_WORTH_ENTITY_ID.to_string(),
            name: "Net Worth".to_string(),
            value: total.to_f64().unwrap_or(0.0),
            unit: summary.primary_currency.clone(),
        });

        let mut per_currency: Vec<AggregateView> = summary
            .per_currency_totals
            .iter()
            .map(|(currency, total)| AggregateView {
                unique_id: format!("{}{}", NET_WORTH_CURRENCY_PREFIX, currency.to_lowercase()),
                name: format!("Net Worth ({})", currency),
                value: total.to_f64().unwrap_or(0.0),
                unit: Some(currency.clone()),
            })
            .collect();
        per_currency.sort_by(|a, b| a.unique_id.cmp(&b.unique_id));

        Self {
            entities,
            primary,
            per_currency,
            generated_at: Utc::now(),
        }
    }
}

/// Counters summarizing one refresh cycle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RefreshReport {
    pub tracked: usize,
    pub added: usize,
    pub removed: usize,
}

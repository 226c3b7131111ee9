//! Table rows for a view.
//!
//! One pass re-lists the rewards of a view and classifies each against `today`.
//! Renderers draw [`RewardRow`]s as they come, keeping the store's device order.

use crate::{
    core::{
        actions::View,
        reward,
        urgency::{UrgencyTier, classify, remaining_days},
    },
    entities::reward::Model,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Marker shown in the used column.
pub const USED_MARKER: &str = "★";

/// A reward ready to be drawn as a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardRow {
    /// Reward id, used when the row is tapped
    pub id: i64,
    /// Device column
    pub device: String,
    /// Reward column
    pub name: String,
    /// Days column; negative once expired
    pub remaining_days: i64,
    /// [`USED_MARKER`] for used rewards, empty otherwise
    pub used_marker: &'static str,
    /// Row styling
    pub tier: UrgencyTier,
}

impl RewardRow {
    /// Builds the row for `reward` as of `today`.
    #[must_use]
    pub fn build(reward: &Model, today: NaiveDate) -> Self {
        let days = remaining_days(today, reward.expires_on);
        Self {
            id: reward.id,
            device: reward.device.clone(),
            name: reward.name.clone(),
            remaining_days: days,
            used_marker: if reward.used { USED_MARKER } else { "" },
            tier: classify(days, reward.used),
        }
    }
}

/// Lists `view` and classifies every reward against `today`.
pub async fn load_rows(
    db: &DatabaseConnection,
    view: View,
    today: NaiveDate,
) -> Result<Vec<RewardRow>> {
    let rewards = reward::list_rewards(db, view).await?;
    Ok(rewards
        .iter()
        .map(|reward| RewardRow::build(reward, today))
        .collect())
}

//! Suggestions for the add form.
//!
//! Offers reward names and devices while the user types, mixing the configured presets
//! with values already used in stored rewards.

use crate::{
    config::settings::Settings,
    entities::{Reward, reward},
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect};
use std::collections::HashSet;

/// Maximum number of suggestions returned for one prompt.
pub const MAX_SUGGESTIONS: usize = 25;

async fn stored_values(db: &DatabaseConnection, column: reward::Column) -> Result<Vec<String>> {
    Reward::find()
        .select_only()
        .column(column)
        .distinct()
        .into_tuple::<String>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Merges `presets` and `stored`, keeping entries containing `partial`.
///
/// Matching and de-duplication ignore case; the first spelling seen wins, presets
/// first. The result is sorted case-insensitively and capped at [`MAX_SUGGESTIONS`].
#[must_use]
pub fn merge_suggestions(presets: &[String], stored: &[String], partial: &str) -> Vec<String> {
    let partial_lower = partial.trim().to_lowercase();
    let mut seen = HashSet::new();

    let mut matching: Vec<String> = presets
        .iter()
        .chain(stored)
        .filter(|value| value.to_lowercase().contains(&partial_lower))
        .filter(|value| seen.insert(value.to_lowercase()))
        .cloned()
        .collect();

    matching.sort_by_cached_key(|value| value.to_lowercase());
    matching.truncate(MAX_SUGGESTIONS);
    matching
}

/// Suggests reward names matching `partial`.
pub async fn suggest_names(
    db: &DatabaseConnection,
    settings: &Settings,
    partial: &str,
) -> Result<Vec<String>> {
    let stored = stored_values(db, reward::Column::Name).await?;
    Ok(merge_suggestions(
        &settings.suggestions.rewards,
        &stored,
        partial,
    ))
}

/// Suggests devices matching `partial`.
pub async fn suggest_devices(
    db: &DatabaseConnection,
    settings: &Settings,
    partial: &str,
) -> Result<Vec<String>> {
    let stored = stored_values(db, reward::Column::Device).await?;
    Ok(merge_suggestions(
        &settings.suggestions.devices,
        &stored,
        partial,
    ))
}

//! Reward store - Handles all reward persistence and lifecycle transitions.
//!
//! Provides functions for creating, listing, flagging and permanently removing rewards.
//! Every mutating function is a single write that is durable once it returns; a failed
//! call leaves the stored rewards untouched.

use crate::{
    core::actions::View,
    entities::{Reward, reward},
    errors::{Error, Result},
};
use chrono::{Days, NaiveDate};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, info, instrument};

/// Number of days between winning a reward and its expiry.
///
/// The urgency tiers in [`crate::core::urgency`] use absolute day counts that assume
/// this value; change both together.
pub const FIXED_WINDOW_DAYS: u64 = 5;

/// Date format used by the add form and in listings.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a date typed in the add form (`DD/MM/YYYY`).
///
/// Surrounding whitespace is ignored. Impossible dates such as `31/02/2024` are
/// rejected rather than rolled over.
pub fn parse_display_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DISPLAY_DATE_FORMAT).map_err(|_| Error::DateParse {
        input: input.to_string(),
    })
}

/// Formats a date the way the add form expects it back.
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Computes the expiry day for a reward won on `won_on`.
///
/// Only fails at the far end of the calendar, where no day exists after the window.
pub fn expiry_for(won_on: NaiveDate) -> Result<NaiveDate> {
    won_on
        .checked_add_days(Days::new(FIXED_WINDOW_DAYS))
        .ok_or(Error::ExpiryOutOfRange {
            won_on,
            window_days: FIXED_WINDOW_DAYS,
        })
}

fn require(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation { field });
    }
    Ok(trimmed.to_string())
}

/// Creates a new reward won on `won_on`, computing its expiry from the fixed window.
///
/// Name and device are trimmed and must not be empty. The reward starts unused and
/// outside the trash.
#[instrument(skip(db))]
pub async fn create_reward(
    db: &DatabaseConnection,
    name: &str,
    device: &str,
    won_on: NaiveDate,
) -> Result<reward::Model> {
    let name = require("name", name)?;
    let device = require("device", device)?;
    let expires_on = expiry_for(won_on)?;

    let reward = reward::ActiveModel {
        name: Set(name),
        device: Set(device),
        won_on: Set(won_on),
        expires_on: Set(expires_on),
        used: Set(false),
        deleted: Set(false),
        ..Default::default()
    };

    let created = reward.insert(db).await?;
    info!(
        "Created reward {} '{}' for '{}', expires {}",
        created.id, created.name, created.device, created.expires_on
    );
    Ok(created)
}

/// Creates a reward from the raw add-form fields, with the date as `DD/MM/YYYY`.
///
/// Missing fields are reported before a malformed date, matching the order the
/// form checks them in. Nothing is written when either check fails.
pub async fn create_reward_from_display(
    db: &DatabaseConnection,
    name: &str,
    device: &str,
    won_on: &str,
) -> Result<reward::Model> {
    require("name", name)?;
    require("device", device)?;
    let won_on = parse_display_date(won_on)?;
    create_reward(db, name, device, won_on).await
}

/// Retrieves every reward visible in `view`, ordered by device (case-insensitive).
///
/// The device order is the only ordering guaranteed; rewards sharing a device come
/// back in no particular order.
#[instrument(skip(db))]
pub async fn list_rewards(db: &DatabaseConnection, view: View) -> Result<Vec<reward::Model>> {
    let mut rewards = Reward::find()
        .filter(reward::Column::Deleted.eq(view.shows_deleted()))
        .order_by_asc(reward::Column::Id)
        .all(db)
        .await?;

    // SQLite's LOWER() only folds ASCII; device labels are often accented
    rewards.sort_by_cached_key(|r| r.device.to_lowercase());
    debug!("Listed {} rewards in {:?} view", rewards.len(), view);
    Ok(rewards)
}

/// Finds a reward by id regardless of which view it belongs to.
pub async fn get_reward_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<reward::Model>> {
    Reward::find_by_id(id).one(db).await.map_err(Into::into)
}

async fn require_reward(db: &DatabaseConnection, id: i64) -> Result<reward::Model> {
    get_reward_by_id(db, id)
        .await?
        .ok_or(Error::RewardNotFound { id })
}

/// Sets the used flag. Setting the value a reward already has succeeds without change.
#[instrument(skip(db))]
pub async fn set_used(db: &DatabaseConnection, id: i64, used: bool) -> Result<reward::Model> {
    let existing = require_reward(db, id).await?;
    let mut active: reward::ActiveModel = existing.into();
    active.used = Set(used);
    let updated = active.update(db).await?;
    info!("Reward {} marked as {}", id, if used { "used" } else { "new" });
    Ok(updated)
}

/// Flips the used flag. Works in either view; the flags are independent.
pub async fn toggle_used(db: &DatabaseConnection, id: i64) -> Result<reward::Model> {
    let existing = require_reward(db, id).await?;
    set_used(db, id, !existing.used).await
}

async fn set_deleted(db: &DatabaseConnection, id: i64, deleted: bool) -> Result<reward::Model> {
    let existing = require_reward(db, id).await?;
    let mut active: reward::ActiveModel = existing.into();
    active.deleted = Set(deleted);
    active.update(db).await.map_err(Into::into)
}

/// Moves a reward to the trash. Trashing an already-trashed reward is a no-op.
#[instrument(skip(db))]
pub async fn soft_delete(db: &DatabaseConnection, id: i64) -> Result<reward::Model> {
    let updated = set_deleted(db, id, true).await?;
    info!("Reward {} moved to trash", id);
    Ok(updated)
}

/// Brings a reward back from the trash. Valid on rewards that were never trashed.
#[instrument(skip(db))]
pub async fn restore(db: &DatabaseConnection, id: i64) -> Result<reward::Model> {
    let updated = set_deleted(db, id, false).await?;
    info!("Reward {} restored", id);
    Ok(updated)
}

/// Permanently removes a reward, whatever its trash flag.
///
/// Only the trash view offers this (see [`crate::core::actions::perform_action`]);
/// the store itself does not check the flag.
#[instrument(skip(db))]
pub async fn hard_delete(db: &DatabaseConnection, id: i64) -> Result<()> {
    let result = Reward::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::RewardNotFound { id });
    }
    info!("Reward {} permanently deleted", id);
    Ok(())
}

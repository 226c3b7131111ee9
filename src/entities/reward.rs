//! Reward entity - A time-limited prize logged against a household device.
//!
//! `expires_on` is always `won_on` plus the fixed window; it is computed once at
//! creation and never edited. `used` and `deleted` are independent flags.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reward database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rewards")]
pub struct Model {
    /// Unique identifier, assigned by the store at creation
    #[sea_orm(primary_key)]
    pub id: i64,
    /// What was won (e.g., "Buono Amazon")
    pub name: String,
    /// Device the reward is tied to (e.g., "Tablet Cucina")
    pub device: String,
    /// Day the reward was won
    pub won_on: Date,
    /// Last day the reward can be redeemed
    pub expires_on: Date,
    /// Whether the reward has been redeemed
    pub used: bool,
    /// Soft delete flag - if true, the reward sits in the trash
    pub deleted: bool,
}

/// `Reward` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

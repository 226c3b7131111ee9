//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod reward;

pub use reward::{Column as RewardColumn, Entity as Reward, Model as RewardModel};

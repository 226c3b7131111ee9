//! Shared test utilities.
//!
//! Helpers for setting up an in-memory database and creating rewards with sensible
//! defaults.

use crate::{
    config::database::create_connection,
    core::reward,
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once per test binary.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all migrations applied.
/// This is the standard setup for all store tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    create_connection("sqlite::memory:").await
}

/// Day every default test reward is won on.
pub fn default_won_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap_or_default()
}

/// Creates a test reward won on [`default_won_on`].
pub async fn create_test_reward(
    db: &DatabaseConnection,
    name: &str,
    device: &str,
) -> Result<entities::reward::Model> {
    reward::create_reward(db, name, device, default_won_on()).await
}

/// Creates a test reward won on a specific day.
pub async fn create_reward_on(
    db: &DatabaseConnection,
    name: &str,
    device: &str,
    won_on: NaiveDate,
) -> Result<entities::reward::Model> {
    reward::create_reward(db, name, device, won_on).await
}

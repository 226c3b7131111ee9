//! Database configuration module.
//!
//! Resolves the `SQLite` location, opens the connection and brings the schema up to
//! date with the migrator before anything else touches the rewards table.

use crate::errors::Result;
use crate::migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Database used when `DATABASE_URL` is unset. `mode=rwc` creates the file on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/premi.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable or returns the
/// default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Filesystem path of a `sqlite:` URL, or `None` for in-memory databases.
fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(path)
    }
}

/// Opens the database at `database_url` and applies any pending migrations.
///
/// The parent directory of a file-backed database is created if needed.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    if let Some(parent) = sqlite_file_path(database_url).and_then(|p| Path::new(p).parent()) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut options = ConnectOptions::new(database_url.to_string());
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    debug!("Connected to {}", database_url);

    Migrator::up(&db, None).await?;
    info!("Database ready, migrations applied");
    Ok(db)
}

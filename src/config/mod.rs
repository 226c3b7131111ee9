/// Database location, connection and migrations
pub mod database;

/// Optional settings loaded from config.toml
pub mod settings;

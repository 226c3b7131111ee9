//! Schema migrations for the rewards database.
//!
//! Applied migrations are recorded in `seaql_migrations`, so each step runs at most
//! once per database no matter how often the store is opened.

use sea_orm_migration::prelude::*;

mod m20240101_create_rewards_table;
mod m20240115_add_deleted_flag;

/// Ordered list of every schema migration.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_create_rewards_table::Migration),
            Box::new(m20240115_add_deleted_flag::Migration),
        ]
    }
}

#[derive(DeriveIden)]
pub(crate) enum Rewards {
    Table,
    Id,
    Name,
    Device,
    WonOn,
    ExpiresOn,
    Used,
    Deleted,
}

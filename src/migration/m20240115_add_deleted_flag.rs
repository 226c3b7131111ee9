use super::Rewards;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.has_column("rewards", "deleted").await? {
            return Ok(());
        }

        manager
            .alter_table(
                Table::alter()
                    .table(Rewards::Table)
                    .add_column(
                        ColumnDef::new(Rewards::Deleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Rewards::Table)
                    .drop_column(Rewards::Deleted)
                    .to_owned(),
            )
            .await
    }
}

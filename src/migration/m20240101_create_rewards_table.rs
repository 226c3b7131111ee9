use super::Rewards;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `if_not_exists` keeps databases created before migrations were tracked
        manager
            .create_table(
                Table::create()
                    .table(Rewards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rewards::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rewards::Name).string().not_null())
                    .col(ColumnDef::new(Rewards::Device).string().not_null())
                    .col(ColumnDef::new(Rewards::WonOn).date().not_null())
                    .col(ColumnDef::new(Rewards::ExpiresOn).date().not_null())
                    .col(
                        ColumnDef::new(Rewards::Used)
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
            .drop_table(Table::drop().table(Rewards::Table).to_owned())
            .await
    }
}

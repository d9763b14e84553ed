//! Create price_configs table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PriceConfigs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PriceConfigs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PriceConfigs::PriceHt)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(PriceConfigs::PriceNt)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(PriceConfigs::BaseFee)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(PriceConfigs::BaseFeeSplit).double())
                    .col(
                        ColumnDef::new(PriceConfigs::ValidFrom)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PriceConfigs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Resolution scans configs by valid_from descending
        manager
            .create_index(
                Index::create()
                    .name("idx_price_configs_valid_from")
                    .table(PriceConfigs::Table)
                    .col(PriceConfigs::ValidFrom)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PriceConfigs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PriceConfigs {
    Table,
    Id,
    PriceHt,
    PriceNt,
    BaseFee,
    BaseFeeSplit,
    ValidFrom,
    CreatedAt,
}

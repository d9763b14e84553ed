//! Create readings table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Readings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Readings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Readings::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Readings::ValueHt)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Readings::ValueNt)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Readings::Comment).string())
                    .col(ColumnDef::new(Readings::BilledAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Readings::BillPeriodId).integer())
                    .to_owned(),
            )
            .await?;

        // Readings are listed and range-filtered by date
        manager
            .create_index(
                Index::create()
                    .name("idx_readings_date")
                    .table(Readings::Table)
                    .col(Readings::Date)
                    .to_owned(),
            )
            .await?;

        // The unbilled scan filters on billed_at
        manager
            .create_index(
                Index::create()
                    .name("idx_readings_billed_at")
                    .table(Readings::Table)
                    .col(Readings::BilledAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Readings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Readings {
    Table,
    Id,
    Date,
    ValueHt,
    ValueNt,
    Comment,
    BilledAt,
    BillPeriodId,
}

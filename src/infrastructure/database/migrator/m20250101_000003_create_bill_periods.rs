//! Create bill_periods table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillPeriods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BillPeriods::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BillPeriods::FromDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillPeriods::ToDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillPeriods::FromReadingId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillPeriods::ToReadingId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillPeriods::TotalCost)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(BillPeriods::EnergyCost)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(BillPeriods::BaseFeeCost)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(BillPeriods::BillingMonths)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(BillPeriods::DiffHt)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(BillPeriods::DiffNt)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(BillPeriods::SentAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BillPeriods::SentVia)
                            .string()
                            .not_null()
                            .default("telegram"),
                    )
                    .to_owned(),
            )
            .await?;

        // The overlap query filters on the date span
        manager
            .create_index(
                Index::create()
                    .name("idx_bill_periods_span")
                    .table(BillPeriods::Table)
                    .col(BillPeriods::FromDate)
                    .col(BillPeriods::ToDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BillPeriods::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BillPeriods {
    Table,
    Id,
    FromDate,
    ToDate,
    FromReadingId,
    ToReadingId,
    TotalCost,
    EnergyCost,
    BaseFeeCost,
    BillingMonths,
    DiffHt,
    DiffNt,
    SentAt,
    SentVia,
}

//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_readings;
mod m20250101_000002_create_price_configs;
mod m20250101_000003_create_bill_periods;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_readings::Migration),
            Box::new(m20250101_000002_create_price_configs::Migration),
            Box::new(m20250101_000003_create_bill_periods::Migration),
        ]
    }
}

//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::billing::BillPeriodRepository;
use crate::domain::price::PriceRepository;
use crate::domain::reading::ReadingRepository;
use crate::domain::repositories::RepositoryProvider;

use super::bill_period_repository::SeaOrmBillPeriodRepository;
use super::price_repository::SeaOrmPriceRepository;
use super::reading_repository::SeaOrmReadingRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let readings = repos.readings().find_all().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    readings: SeaOrmReadingRepository,
    prices: SeaOrmPriceRepository,
    bill_periods: SeaOrmBillPeriodRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            readings: SeaOrmReadingRepository::new(db.clone()),
            prices: SeaOrmPriceRepository::new(db.clone()),
            bill_periods: SeaOrmBillPeriodRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn readings(&self) -> &dyn ReadingRepository {
        &self.readings
    }

    fn prices(&self) -> &dyn PriceRepository {
        &self.prices
    }

    fn bill_periods(&self) -> &dyn BillPeriodRepository {
        &self.bill_periods
    }
}

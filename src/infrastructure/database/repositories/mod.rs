//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

mod bill_period_repository;
mod price_repository;
mod reading_repository;
mod repository_provider;

pub use bill_period_repository::SeaOrmBillPeriodRepository;
pub use price_repository::SeaOrmPriceRepository;
pub use reading_repository::SeaOrmReadingRepository;
pub use repository_provider::SeaOrmRepositoryProvider;

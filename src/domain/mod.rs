pub mod billing;
pub mod price;
pub mod reading;
pub mod repositories;

// Re-export commonly used types
pub use billing::{
    billing_months, calculate_period_cost, suggest_periods, AppliedPrices, BillPeriod,
    BillPeriodRepository, PeriodCost, PeriodSuggestion, PeriodSuggestions,
};
pub use price::{resolve_at, PriceConfig, PriceRepository};
pub use reading::{Reading, ReadingRepository};
pub use repositories::{DomainResult, RepositoryProvider};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;

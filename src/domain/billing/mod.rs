//! Billing aggregate
//!
//! Period cost calculation, the committed bill period entity, and the
//! period suggestion logic.

pub mod cost;
pub mod period;
pub mod repository;
pub mod suggest;

pub use cost::{billing_months, calculate_period_cost, AppliedPrices, PeriodCost};
pub use period::BillPeriod;
pub use repository::BillPeriodRepository;
pub use suggest::{suggest_periods, PeriodSuggestion, PeriodSuggestions};

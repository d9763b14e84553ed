//! Application services

mod billing;
mod dashboard;
mod price;
mod reading;

pub use billing::{format_report, BillingService, PeriodPreview};
pub use dashboard::{ChartPoint, DashboardData, DashboardService};
pub use price::PriceService;
pub use reading::ReadingService;

pub mod services;

// Re-export key types for convenience
pub use services::{
    format_report, BillingService, ChartPoint, DashboardData, DashboardService, PeriodPreview,
    PriceService, ReadingService,
};

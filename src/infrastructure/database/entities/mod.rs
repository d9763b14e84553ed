//! Database entities module

pub mod bill_period;
pub mod price_config;
pub mod reading;

pub use bill_period::Entity as BillPeriod;
pub use price_config::Entity as PriceConfig;
pub use reading::Entity as Reading;

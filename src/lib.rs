//! # Meterbill
//!
//! Household utility-billing service: records two-tariff electricity meter
//! readings, resolves time-valid price configurations, computes period
//! costs, and pushes billing reports to a Telegram chat while tracking
//! which readings have been billed.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, calculation rules and repository traits
//! - **application**: Services orchestrating the billing flows
//! - **infrastructure**: External concerns (SeaORM database, in-memory storage)
//! - **interfaces**: REST API with Swagger documentation
//! - **auth**: JWT authentication for the household admin
//! - **notifications**: Outbound report delivery (Telegram)

pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod notifications;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::{create_api_router, AppState};

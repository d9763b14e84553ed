//! Price configuration aggregate
//!
//! Contains the PriceConfig entity and the date-based resolution rule.

pub mod model;
pub mod repository;

pub use model::{resolve_at, PriceConfig};
pub use repository::PriceRepository;

//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::billing::BillPeriodRepository;
use super::price::PriceRepository;
use super::reading::ReadingRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let readings = repos.readings().find_all().await?;
///     let price = repos.prices().find_latest().await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn readings(&self) -> &dyn ReadingRepository;
    fn prices(&self) -> &dyn PriceRepository;
    fn bill_periods(&self) -> &dyn BillPeriodRepository;
}

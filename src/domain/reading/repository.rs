//! Reading repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::Reading;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReadingRepository: Send + Sync {
    /// Insert a new reading and return it with its assigned id.
    async fn create(&self, reading: Reading) -> DomainResult<Reading>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reading>>;
    /// All readings, ordered by date ascending.
    async fn find_all(&self) -> DomainResult<Vec<Reading>>;
    /// Readings with `billed_at` unset, ordered by date ascending.
    async fn find_unbilled(&self) -> DomainResult<Vec<Reading>>;
    /// The billed reading with the greatest `billed_at`, if any.
    async fn find_last_billed(&self) -> DomainResult<Option<Reading>>;
    /// Delete a reading. The service layer only calls this for unbilled rows.
    async fn delete(&self, id: i32) -> DomainResult<()>;
    /// Set `billed_at` and `bill_period_id` on the given readings.
    /// Returns the number of rows updated.
    async fn mark_billed(
        &self,
        ids: &[i32],
        billed_at: DateTime<Utc>,
        bill_period_id: i32,
    ) -> DomainResult<u64>;
}

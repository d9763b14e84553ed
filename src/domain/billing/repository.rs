//! Bill period repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::period::BillPeriod;
use crate::domain::DomainResult;

#[async_trait]
pub trait BillPeriodRepository: Send + Sync {
    /// Insert a new bill period and return it with its assigned id.
    async fn create(&self, period: BillPeriod) -> DomainResult<BillPeriod>;
    /// All bill periods, ordered by `sent_at` descending.
    async fn find_all(&self) -> DomainResult<Vec<BillPeriod>>;
    /// First committed period whose `[from_date, to_date]` overlaps the
    /// given range (boundaries inclusive), if any.
    async fn find_overlapping(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Option<BillPeriod>>;
}

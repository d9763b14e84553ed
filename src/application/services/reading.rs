//! Reading service for managing meter snapshots

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{DomainResult, Reading, RepositoryProvider};
use crate::shared::errors::DomainError;

/// Service for reading CRUD operations
pub struct ReadingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ReadingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Record a new meter reading. `date` defaults to now.
    pub async fn add_reading(
        &self,
        date: Option<DateTime<Utc>>,
        value_ht: f64,
        value_nt: f64,
        comment: Option<String>,
    ) -> DomainResult<Reading> {
        if !value_ht.is_finite() || !value_nt.is_finite() {
            return Err(DomainError::Validation(
                "meter values must be numeric".to_string(),
            ));
        }
        if value_ht < 0.0 || value_nt < 0.0 {
            return Err(DomainError::Validation(
                "meter values must be non-negative".to_string(),
            ));
        }

        let reading = Reading::new(date.unwrap_or_else(Utc::now), value_ht, value_nt, comment);
        let created = self.repos.readings().create(reading).await?;

        info!(
            reading_id = created.id,
            value_ht = created.value_ht,
            value_nt = created.value_nt,
            "Reading recorded"
        );
        Ok(created)
    }

    /// All readings, date ascending.
    pub async fn list_readings(&self) -> DomainResult<Vec<Reading>> {
        self.repos.readings().find_all().await
    }

    /// Delete a reading. Billed readings are immutable history and cannot
    /// be deleted.
    pub async fn delete_reading(&self, id: i32) -> DomainResult<()> {
        let reading = self
            .repos
            .readings()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Reading",
                field: "id",
                value: id.to_string(),
            })?;

        if reading.is_billed() {
            return Err(DomainError::Validation(
                "billed readings cannot be deleted".to_string(),
            ));
        }

        self.repos.readings().delete(id).await?;
        info!(reading_id = id, "Reading deleted");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStore;
    use chrono::TimeZone;

    fn service() -> (ReadingService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (ReadingService::new(store.clone()), store)
    }

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn add_and_list_readings() {
        let (svc, _) = service();
        svc.add_reading(Some(date(2024, 2, 1)), 1100.0, 2050.0, None)
            .await
            .unwrap();
        svc.add_reading(Some(date(2024, 1, 1)), 1000.0, 2000.0, Some("start".into()))
            .await
            .unwrap();

        let all = svc.list_readings().await.unwrap();
        assert_eq!(all.len(), 2);
        // ordered by date ascending regardless of insertion order
        assert!(all[0].date < all[1].date);
    }

    #[tokio::test]
    async fn negative_values_are_rejected() {
        let (svc, _) = service();
        let err = svc
            .add_reading(None, -1.0, 0.0, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn non_finite_values_are_rejected() {
        let (svc, _) = service();
        let err = svc
            .add_reading(None, f64::NAN, 0.0, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn unbilled_reading_can_be_deleted() {
        let (svc, _) = service();
        let r = svc
            .add_reading(Some(date(2024, 1, 1)), 1000.0, 2000.0, None)
            .await
            .unwrap();
        svc.delete_reading(r.id).await.unwrap();
        assert!(svc.list_readings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn billed_reading_cannot_be_deleted() {
        let (svc, store) = service();
        let r = svc
            .add_reading(Some(date(2024, 1, 1)), 1000.0, 2000.0, None)
            .await
            .unwrap();
        store
            .readings()
            .mark_billed(&[r.id], date(2024, 2, 1), 1)
            .await
            .unwrap();

        let err = svc.delete_reading(r.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(svc.list_readings().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deleting_missing_reading_is_not_found() {
        let (svc, _) = service();
        let err = svc.delete_reading(99).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}

//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::domain::billing::{BillPeriod, BillPeriodRepository};
use crate::domain::price::{PriceConfig, PriceRepository};
use crate::domain::reading::{Reading, ReadingRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::{DomainError, DomainResult};

/// In-memory store for development and testing.
///
/// Implements every repository trait on one struct; the provider hands out
/// `self` per aggregate.
pub struct InMemoryStore {
    readings: DashMap<i32, Reading>,
    prices: DashMap<i32, PriceConfig>,
    bill_periods: DashMap<i32, BillPeriod>,
    reading_counter: AtomicI32,
    price_counter: AtomicI32,
    bill_period_counter: AtomicI32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            readings: DashMap::new(),
            prices: DashMap::new(),
            bill_periods: DashMap::new(),
            reading_counter: AtomicI32::new(1),
            price_counter: AtomicI32::new(1),
            bill_period_counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryStore {
    fn readings(&self) -> &dyn ReadingRepository {
        self
    }

    fn prices(&self) -> &dyn PriceRepository {
        self
    }

    fn bill_periods(&self) -> &dyn BillPeriodRepository {
        self
    }
}

#[async_trait]
impl ReadingRepository for InMemoryStore {
    async fn create(&self, mut reading: Reading) -> DomainResult<Reading> {
        reading.id = self.reading_counter.fetch_add(1, Ordering::SeqCst);
        self.readings.insert(reading.id, reading.clone());
        Ok(reading)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reading>> {
        Ok(self.readings.get(&id).map(|r| r.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Reading>> {
        let mut all: Vec<Reading> = self.readings.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|r| r.date);
        Ok(all)
    }

    async fn find_unbilled(&self) -> DomainResult<Vec<Reading>> {
        let mut open: Vec<Reading> = self
            .readings
            .iter()
            .filter(|e| !e.value().is_billed())
            .map(|e| e.value().clone())
            .collect();
        open.sort_by_key(|r| r.date);
        Ok(open)
    }

    async fn find_last_billed(&self) -> DomainResult<Option<Reading>> {
        Ok(self
            .readings
            .iter()
            .filter(|e| e.value().is_billed())
            .max_by_key(|e| e.value().billed_at)
            .map(|e| e.value().clone()))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.readings.remove(&id).ok_or(DomainError::NotFound {
            entity: "Reading",
            field: "id",
            value: id.to_string(),
        })?;
        Ok(())
    }

    async fn mark_billed(
        &self,
        ids: &[i32],
        billed_at: DateTime<Utc>,
        bill_period_id: i32,
    ) -> DomainResult<u64> {
        let mut updated = 0;
        for id in ids {
            if let Some(mut reading) = self.readings.get_mut(id) {
                reading.billed_at = Some(billed_at);
                reading.bill_period_id = Some(bill_period_id);
                updated += 1;
            }
        }
        Ok(updated)
    }
}

#[async_trait]
impl PriceRepository for InMemoryStore {
    async fn create(&self, mut config: PriceConfig) -> DomainResult<PriceConfig> {
        config.id = self.price_counter.fetch_add(1, Ordering::SeqCst);
        self.prices.insert(config.id, config.clone());
        Ok(config)
    }

    async fn find_all(&self) -> DomainResult<Vec<PriceConfig>> {
        let mut all: Vec<PriceConfig> = self.prices.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.valid_from.cmp(&a.valid_from));
        Ok(all)
    }

    async fn find_latest(&self) -> DomainResult<Option<PriceConfig>> {
        Ok(self
            .prices
            .iter()
            .max_by_key(|e| e.value().valid_from)
            .map(|e| e.value().clone()))
    }
}

#[async_trait]
impl BillPeriodRepository for InMemoryStore {
    async fn create(&self, mut period: BillPeriod) -> DomainResult<BillPeriod> {
        period.id = self.bill_period_counter.fetch_add(1, Ordering::SeqCst);
        self.bill_periods.insert(period.id, period.clone());
        Ok(period)
    }

    async fn find_all(&self) -> DomainResult<Vec<BillPeriod>> {
        let mut all: Vec<BillPeriod> = self.bill_periods.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
        Ok(all)
    }

    async fn find_overlapping(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Option<BillPeriod>> {
        Ok(self
            .bill_periods
            .iter()
            .find(|e| e.value().overlaps(from, to))
            .map(|e| e.value().clone()))
    }
}

// ── Tests ──────────────────────────────────────────────────────

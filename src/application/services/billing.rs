//! Billing service
//!
//! Orchestrates the billing-period lifecycle: validation, price resolution,
//! cost computation, report delivery and the final commit. The flow is
//! strictly send-before-commit: a failed delivery must never leave a
//! billing record behind, while a failed commit after a successful
//! delivery is surfaced as a distinct partial failure.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::{
    calculate_period_cost, resolve_at, suggest_periods, BillPeriod, DomainResult, PeriodCost,
    PeriodSuggestions, PriceConfig, Reading, RepositoryProvider,
};
use crate::notifications::ReportSender;
use crate::shared::errors::DomainError;

/// A validated and priced period, not yet committed.
#[derive(Debug, Clone)]
pub struct PeriodPreview {
    pub from: Reading,
    pub to: Reading,
    pub cost: PeriodCost,
}

/// Service for billing operations
pub struct BillingService {
    repos: Arc<dyn RepositoryProvider>,
    sender: Arc<dyn ReportSender>,
}

impl BillingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, sender: Arc<dyn ReportSender>) -> Self {
        Self { repos, sender }
    }

    /// Check a proposed (from, to) pair for billing eligibility.
    ///
    /// Pure read/check, no side effects. Checks run in order and
    /// short-circuit: existence, already-billed state, strict date
    /// ordering, overlap with committed periods.
    pub async fn validate_period(&self, from_id: i32, to_id: i32) -> DomainResult<(Reading, Reading)> {
        let from = self.repos.readings().find_by_id(from_id).await?;
        let to = self.repos.readings().find_by_id(to_id).await?;

        let (Some(from), Some(to)) = (from, to) else {
            return Err(DomainError::NotFound {
                entity: "Reading",
                field: "id",
                value: format!("{}, {}", from_id, to_id),
            });
        };

        if to.is_billed() {
            return Err(DomainError::AlreadyBilled { date: to.date });
        }

        if from.date >= to.date {
            return Err(DomainError::InvalidOrdering);
        }

        if let Some(existing) = self
            .repos
            .bill_periods()
            .find_overlapping(from.date, to.date)
            .await?
        {
            return Err(DomainError::OverlappingPeriod {
                from: existing.from_date,
                to: existing.to_date,
                sent_at: existing.sent_at,
            });
        }

        Ok((from, to))
    }

    /// Validate and price a candidate period without committing anything.
    pub async fn preview_period(&self, from_id: i32, to_id: i32) -> DomainResult<PeriodPreview> {
        let (from, to) = self.validate_period(from_id, to_id).await?;
        let price = self.resolve_price_at(&to).await?;
        let cost = calculate_period_cost(Some(&from), Some(&to), Some(&price));
        Ok(PeriodPreview { from, to, cost })
    }

    /// Candidate (from, to) pairs for the next bill.
    pub async fn suggestions(&self) -> DomainResult<PeriodSuggestions> {
        let all = self.repos.readings().find_all().await?;
        Ok(suggest_periods(&all, Utc::now()))
    }

    /// Committed bill periods, newest first.
    pub async fn history(&self) -> DomainResult<Vec<BillPeriod>> {
        self.repos.bill_periods().find_all().await
    }

    /// Deliver a billing report for the period and commit it.
    ///
    /// Sequence: validate, resolve price at the end reading's date, compute,
    /// send the formatted summary, re-check overlap, commit. The overlap
    /// re-check narrows the race window against a concurrent commit that
    /// landed while the send was in flight.
    pub async fn send_report(&self, from_id: i32, to_id: i32) -> DomainResult<BillPeriod> {
        let (from, to) = self.validate_period(from_id, to_id).await?;
        let price = self.resolve_price_at(&to).await?;
        let cost = calculate_period_cost(Some(&from), Some(&to), Some(&price));

        let text = format_report(&from, &to, &cost);
        self.sender
            .send(&text)
            .await
            .map_err(|e| DomainError::NotificationFailed(e.to_string()))?;

        if let Some(existing) = self
            .repos
            .bill_periods()
            .find_overlapping(from.date, to.date)
            .await?
        {
            warn!(
                from = %from.date,
                to = %to.date,
                "Period was billed concurrently after the report was sent"
            );
            return Err(DomainError::OverlappingPeriod {
                from: existing.from_date,
                to: existing.to_date,
                sent_at: existing.sent_at,
            });
        }

        let committed = self.commit_period(&from, &to, &cost).await?;

        info!(
            bill_period_id = committed.id,
            total_cost = committed.total_cost,
            billing_months = committed.billing_months,
            sent_via = committed.sent_via.as_str(),
            "Billing period committed"
        );
        Ok(committed)
    }

    /// Insert the bill period and mark the covered readings billed.
    ///
    /// Marking covers unbilled readings with `from.date < date <= to.date`:
    /// the anchor reading itself is never re-marked. A marking failure
    /// after the insert is a partial commit and carries the created
    /// record's id.
    async fn commit_period(
        &self,
        from: &Reading,
        to: &Reading,
        cost: &PeriodCost,
    ) -> DomainResult<BillPeriod> {
        let period = BillPeriod {
            id: 0,
            from_date: from.date,
            to_date: to.date,
            from_reading_id: from.id,
            to_reading_id: to.id,
            total_cost: cost.total,
            energy_cost: cost.energy_cost,
            base_fee_cost: cost.base_fee_cost,
            billing_months: cost.billing_months,
            diff_ht: cost.diff_ht,
            diff_nt: cost.diff_nt,
            sent_at: Utc::now(),
            sent_via: self.sender.channel().to_string(),
        };
        let created = self.repos.bill_periods().create(period).await?;

        let covered = async {
            let unbilled = self.repos.readings().find_unbilled().await?;
            let ids: Vec<i32> = unbilled
                .iter()
                .filter(|r| r.date > from.date && r.date <= to.date)
                .map(|r| r.id)
                .collect();
            self.repos
                .readings()
                .mark_billed(&ids, created.sent_at, created.id)
                .await
        };

        match covered.await {
            Ok(count) => {
                info!(bill_period_id = created.id, readings = count, "Readings marked billed");
                Ok(created)
            }
            Err(e) => Err(DomainError::PartialCommit {
                bill_period_id: created.id,
                detail: e.to_string(),
            }),
        }
    }

    async fn resolve_price_at(&self, to: &Reading) -> DomainResult<PriceConfig> {
        let configs = self.repos.prices().find_all().await?;
        resolve_at(to.date, &configs).cloned()
    }
}

/// Render the chat summary for a billed period.
pub fn format_report(from: &Reading, to: &Reading, cost: &PeriodCost) -> String {
    let months = cost.billing_months;
    let mut text = format!(
        "\u{26a1} *Electricity bill*\n{} \u{2192} {} ({} month{})\n\n",
        from.date.format("%Y-%m-%d"),
        to.date.format("%Y-%m-%d"),
        months,
        if months == 1 { "" } else { "s" },
    );
    text.push_str(&format!(
        "*Consumption*\nHT: {:.1} kWh\nNT: {:.1} kWh\nTotal: {:.1} kWh\n\n",
        cost.diff_ht,
        cost.diff_nt,
        cost.diff_ht + cost.diff_nt,
    ));
    text.push_str(&format!(
        "*Costs*\nEnergy: {:.2} \u{20ac}\nBase fee: {:.2} \u{20ac}\n*Total: {:.2} \u{20ac}*",
        cost.energy_cost, cost.base_fee_cost, cost.total,
    ));
    text
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};

    use crate::domain::{BillPeriodRepository, PriceRepository, ReadingRepository};
    use crate::infrastructure::storage::InMemoryStore;
    use crate::notifications::SendError;

    struct MockSender {
        fail: bool,
        sent: Mutex<Vec<String>>,
    }

    impl MockSender {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                fail: false,
                sent: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                fail: true,
                sent: Mutex::new(Vec::new()),
            })
        }

        fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ReportSender for MockSender {
        fn channel(&self) -> &str {
            "telegram"
        }

        async fn send(&self, text: &str) -> Result<(), SendError> {
            if self.fail {
                return Err(SendError::Transport("connection refused".to_string()));
            }
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    async fn seed_reading(
        store: &InMemoryStore,
        d: DateTime<Utc>,
        ht: f64,
        nt: f64,
    ) -> Reading {
        store
            .readings()
            .create(Reading::new(d, ht, nt, None))
            .await
            .unwrap()
    }

    async fn seed_price(store: &InMemoryStore, valid_from: DateTime<Utc>) {
        store
            .prices()
            .create(PriceConfig {
                id: 0,
                price_ht: 0.30,
                price_nt: 0.20,
                base_fee: 12.0,
                base_fee_split: Some(50.0),
                valid_from,
                created_at: valid_from,
            })
            .await
            .unwrap();
    }

    fn service(store: Arc<InMemoryStore>, sender: Arc<MockSender>) -> BillingService {
        BillingService::new(store, sender)
    }

    #[tokio::test]
    async fn send_report_commits_the_full_period() {
        let store = Arc::new(InMemoryStore::new());
        seed_price(&store, date(2023, 1, 1)).await;
        let from = seed_reading(&store, date(2024, 1, 1), 1000.0, 2000.0).await;
        let mid = seed_reading(&store, date(2024, 2, 10), 1080.0, 2060.0).await;
        let to = seed_reading(&store, date(2024, 3, 15), 1150.0, 2100.0).await;

        let sender = MockSender::ok();
        let svc = service(store.clone(), sender.clone());

        let committed = svc.send_report(from.id, to.id).await.unwrap();
        assert_eq!(committed.total_cost, 77.00);
        assert_eq!(committed.energy_cost, 65.00);
        assert_eq!(committed.base_fee_cost, 12.00);
        assert_eq!(committed.billing_months, 2);
        assert_eq!(committed.diff_ht, 150.0);
        assert_eq!(committed.diff_nt, 100.0);
        assert_eq!(committed.sent_via, "telegram");
        assert_eq!(sender.sent_count(), 1);

        // boundary exclusive of `from`, inclusive of `to`
        let all = store.readings().find_all().await.unwrap();
        let get = |id: i32| all.iter().find(|r| r.id == id).unwrap().clone();
        assert!(!get(from.id).is_billed());
        assert!(get(mid.id).is_billed());
        assert!(get(to.id).is_billed());
        assert_eq!(get(to.id).bill_period_id, Some(committed.id));
        assert_eq!(get(mid.id).bill_period_id, Some(committed.id));
    }

    #[tokio::test]
    async fn already_billed_target_is_rejected_without_mutation() {
        let store = Arc::new(InMemoryStore::new());
        seed_price(&store, date(2023, 1, 1)).await;
        let from = seed_reading(&store, date(2024, 1, 1), 1000.0, 2000.0).await;
        let to = seed_reading(&store, date(2024, 3, 15), 1150.0, 2100.0).await;
        store
            .readings()
            .mark_billed(&[to.id], date(2024, 4, 1), 9)
            .await
            .unwrap();

        let sender = MockSender::ok();
        let svc = service(store.clone(), sender.clone());

        let err = svc.send_report(from.id, to.id).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyBilled { .. }));
        assert_eq!(sender.sent_count(), 0);
        assert!(store.bill_periods().find_all().await.unwrap().is_empty());
        let all = store.readings().find_all().await.unwrap();
        assert!(!all.iter().find(|r| r.id == from.id).unwrap().is_billed());
    }

    #[tokio::test]
    async fn reversed_ordering_is_rejected() {
        let store = Arc::new(InMemoryStore::new());
        seed_price(&store, date(2023, 1, 1)).await;
        let from = seed_reading(&store, date(2024, 3, 15), 1150.0, 2100.0).await;
        let to = seed_reading(&store, date(2024, 1, 1), 1000.0, 2000.0).await;

        let svc = service(store, MockSender::ok());
        let err = svc.validate_period(from.id, to.id).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidOrdering));
    }

    #[tokio::test]
    async fn unknown_reading_ids_are_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let svc = service(store, MockSender::ok());
        let err = svc.validate_period(1, 2).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn overlapping_period_is_rejected_with_conflict_details() {
        let store = Arc::new(InMemoryStore::new());
        seed_price(&store, date(2023, 1, 1)).await;
        let from = seed_reading(&store, date(2024, 2, 1), 1050.0, 2030.0).await;
        let to = seed_reading(&store, date(2024, 4, 1), 1150.0, 2100.0).await;
        store
            .bill_periods()
            .create(BillPeriod {
                id: 0,
                from_date: date(2024, 1, 1),
                to_date: date(2024, 3, 1),
                from_reading_id: 90,
                to_reading_id: 91,
                total_cost: 10.0,
                energy_cost: 10.0,
                base_fee_cost: 0.0,
                billing_months: 2,
                diff_ht: 1.0,
                diff_nt: 1.0,
                sent_at: date(2024, 3, 2),
                sent_via: "telegram".to_string(),
            })
            .await
            .unwrap();

        let svc = service(store, MockSender::ok());
        let err = svc.validate_period(from.id, to.id).await.unwrap_err();
        match err {
            DomainError::OverlappingPeriod { from, to, sent_at } => {
                assert_eq!(from, date(2024, 1, 1));
                assert_eq!(to, date(2024, 3, 1));
                assert_eq!(sent_at, date(2024, 3, 2));
            }
            other => panic!("expected OverlappingPeriod, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn period_between_two_committed_periods_validates() {
        let store = Arc::new(InMemoryStore::new());
        seed_price(&store, date(2023, 1, 1)).await;
        let from = seed_reading(&store, date(2024, 3, 10), 1050.0, 2030.0).await;
        let to = seed_reading(&store, date(2024, 5, 20), 1150.0, 2100.0).await;

        for (f, t) in [
            (date(2024, 1, 1), date(2024, 3, 1)),
            (date(2024, 6, 1), date(2024, 8, 1)),
        ] {
            store
                .bill_periods()
                .create(BillPeriod {
                    id: 0,
                    from_date: f,
                    to_date: t,
                    from_reading_id: 90,
                    to_reading_id: 91,
                    total_cost: 0.0,
                    energy_cost: 0.0,
                    base_fee_cost: 0.0,
                    billing_months: 2,
                    diff_ht: 0.0,
                    diff_nt: 0.0,
                    sent_at: t,
                    sent_via: "telegram".to_string(),
                })
                .await
                .unwrap();
        }

        let svc = service(store, MockSender::ok());
        let (f, t) = svc.validate_period(from.id, to.id).await.unwrap();
        assert_eq!((f.id, t.id), (from.id, to.id));
    }

    #[tokio::test]
    async fn failed_send_leaves_no_billing_record() {
        let store = Arc::new(InMemoryStore::new());
        seed_price(&store, date(2023, 1, 1)).await;
        let from = seed_reading(&store, date(2024, 1, 1), 1000.0, 2000.0).await;
        let to = seed_reading(&store, date(2024, 3, 15), 1150.0, 2100.0).await;

        let svc = service(store.clone(), MockSender::failing());
        let err = svc.send_report(from.id, to.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotificationFailed(_)));
        assert!(err.is_retry_safe());

        assert!(store.bill_periods().find_all().await.unwrap().is_empty());
        let all = store.readings().find_all().await.unwrap();
        assert!(all.iter().all(|r| !r.is_billed()));
    }

    #[tokio::test]
    async fn missing_price_config_blocks_the_report_before_sending() {
        let store = Arc::new(InMemoryStore::new());
        let from = seed_reading(&store, date(2024, 1, 1), 1000.0, 2000.0).await;
        let to = seed_reading(&store, date(2024, 3, 15), 1150.0, 2100.0).await;

        let sender = MockSender::ok();
        let svc = service(store, sender.clone());
        let err = svc.send_report(from.id, to.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NoPriceConfigured));
        assert_eq!(sender.sent_count(), 0);
    }

    #[tokio::test]
    async fn preview_does_not_commit() {
        let store = Arc::new(InMemoryStore::new());
        seed_price(&store, date(2023, 1, 1)).await;
        let from = seed_reading(&store, date(2024, 1, 1), 1000.0, 2000.0).await;
        let to = seed_reading(&store, date(2024, 3, 15), 1150.0, 2100.0).await;

        let svc = service(store.clone(), MockSender::ok());
        let preview = svc.preview_period(from.id, to.id).await.unwrap();
        assert_eq!(preview.cost.total, 77.00);
        assert!(store.bill_periods().find_all().await.unwrap().is_empty());
        let all = store.readings().find_all().await.unwrap();
        assert!(all.iter().all(|r| !r.is_billed()));
    }

    // Provider whose reading repository fails the marking update, to drive
    // the partial-commit path.
    struct FailingMarkRepo {
        inner: Arc<InMemoryStore>,
    }

    #[async_trait]
    impl ReadingRepository for FailingMarkRepo {
        async fn create(&self, reading: Reading) -> DomainResult<Reading> {
            self.inner.readings().create(reading).await
        }

        async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reading>> {
            self.inner.readings().find_by_id(id).await
        }

        async fn find_all(&self) -> DomainResult<Vec<Reading>> {
            self.inner.readings().find_all().await
        }

        async fn find_unbilled(&self) -> DomainResult<Vec<Reading>> {
            self.inner.readings().find_unbilled().await
        }

        async fn find_last_billed(&self) -> DomainResult<Option<Reading>> {
            self.inner.readings().find_last_billed().await
        }

        async fn delete(&self, id: i32) -> DomainResult<()> {
            self.inner.readings().delete(id).await
        }

        async fn mark_billed(
            &self,
            _ids: &[i32],
            _billed_at: DateTime<Utc>,
            _bill_period_id: i32,
        ) -> DomainResult<u64> {
            Err(DomainError::Storage("simulated update failure".to_string()))
        }
    }

    struct FailingMarkProvider {
        store: Arc<InMemoryStore>,
        readings: FailingMarkRepo,
    }

    impl FailingMarkProvider {
        fn new(store: Arc<InMemoryStore>) -> Self {
            Self {
                readings: FailingMarkRepo {
                    inner: store.clone(),
                },
                store,
            }
        }
    }

    impl RepositoryProvider for FailingMarkProvider {
        fn readings(&self) -> &dyn ReadingRepository {
            &self.readings
        }

        fn prices(&self) -> &dyn PriceRepository {
            self.store.prices()
        }

        fn bill_periods(&self) -> &dyn BillPeriodRepository {
            self.store.bill_periods()
        }
    }

    #[tokio::test]
    async fn marking_failure_after_insert_is_a_partial_commit() {
        let store = Arc::new(InMemoryStore::new());
        seed_price(&store, date(2023, 1, 1)).await;
        let from = seed_reading(&store, date(2024, 1, 1), 1000.0, 2000.0).await;
        let to = seed_reading(&store, date(2024, 3, 15), 1150.0, 2100.0).await;

        let provider = Arc::new(FailingMarkProvider::new(store.clone()));
        let svc = BillingService::new(provider, MockSender::ok());

        let err = svc.send_report(from.id, to.id).await.unwrap_err();
        match err {
            DomainError::PartialCommit { bill_period_id, detail } => {
                assert!(!detail.is_empty());
                // the record exists; bookkeeping is what failed
                let periods = store.bill_periods().find_all().await.unwrap();
                assert_eq!(periods.len(), 1);
                assert_eq!(periods[0].id, bill_period_id);
                assert!(!DomainError::PartialCommit { bill_period_id, detail }.is_retry_safe());
            }
            other => panic!("expected PartialCommit, got {:?}", other),
        }
    }

    #[test]
    fn report_text_contains_the_figures() {
        let from = Reading::new(date(2024, 1, 1), 1000.0, 2000.0, None);
        let to = Reading::new(date(2024, 3, 15), 1150.0, 2100.0, None);
        let price = PriceConfig {
            id: 1,
            price_ht: 0.30,
            price_nt: 0.20,
            base_fee: 12.0,
            base_fee_split: Some(50.0),
            valid_from: date(2023, 1, 1),
            created_at: date(2023, 1, 1),
        };
        let cost = calculate_period_cost(Some(&from), Some(&to), Some(&price));

        let text = format_report(&from, &to, &cost);
        assert!(text.contains("2024-01-01"));
        assert!(text.contains("2024-03-15"));
        assert!(text.contains("2 months"));
        assert!(text.contains("150.0 kWh"));
        assert!(text.contains("100.0 kWh"));
        assert!(text.contains("77.00"));
    }
}

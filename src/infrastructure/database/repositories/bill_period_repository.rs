//! SeaORM implementation of BillPeriodRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::billing::{BillPeriod, BillPeriodRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::bill_period;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn entity_to_domain(m: bill_period::Model) -> BillPeriod {
    BillPeriod {
        id: m.id,
        from_date: m.from_date,
        to_date: m.to_date,
        from_reading_id: m.from_reading_id,
        to_reading_id: m.to_reading_id,
        total_cost: m.total_cost,
        energy_cost: m.energy_cost,
        base_fee_cost: m.base_fee_cost,
        billing_months: m.billing_months,
        diff_ht: m.diff_ht,
        diff_nt: m.diff_nt,
        sent_at: m.sent_at,
        sent_via: m.sent_via,
    }
}

pub struct SeaOrmBillPeriodRepository {
    db: DatabaseConnection,
}

impl SeaOrmBillPeriodRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BillPeriodRepository for SeaOrmBillPeriodRepository {
    async fn create(&self, p: BillPeriod) -> DomainResult<BillPeriod> {
        let model = bill_period::ActiveModel {
            id: NotSet,
            from_date: Set(p.from_date),
            to_date: Set(p.to_date),
            from_reading_id: Set(p.from_reading_id),
            to_reading_id: Set(p.to_reading_id),
            total_cost: Set(p.total_cost),
            energy_cost: Set(p.energy_cost),
            base_fee_cost: Set(p.base_fee_cost),
            billing_months: Set(p.billing_months),
            diff_ht: Set(p.diff_ht),
            diff_nt: Set(p.diff_nt),
            sent_at: Set(p.sent_at),
            sent_via: Set(p.sent_via),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Bill period saved: {} - {} ({})",
            result.from_date, result.to_date, result.id
        );
        Ok(entity_to_domain(result))
    }

    async fn find_all(&self) -> DomainResult<Vec<BillPeriod>> {
        let models = bill_period::Entity::find()
            .order_by_desc(bill_period::Column::SentAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_overlapping(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Option<BillPeriod>> {
        // Inclusive on both boundaries: touching counts as overlap
        let model = bill_period::Entity::find()
            .filter(bill_period::Column::FromDate.lte(to))
            .filter(bill_period::Column::ToDate.gte(from))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }
}

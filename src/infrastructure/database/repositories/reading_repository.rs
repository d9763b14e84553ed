//! SeaORM implementation of ReadingRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::reading::{Reading, ReadingRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::reading;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn entity_to_domain(m: reading::Model) -> Reading {
    Reading {
        id: m.id,
        date: m.date,
        value_ht: m.value_ht,
        value_nt: m.value_nt,
        comment: m.comment,
        billed_at: m.billed_at,
        bill_period_id: m.bill_period_id,
    }
}

pub struct SeaOrmReadingRepository {
    db: DatabaseConnection,
}

impl SeaOrmReadingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadingRepository for SeaOrmReadingRepository {
    async fn create(&self, r: Reading) -> DomainResult<Reading> {
        let model = reading::ActiveModel {
            id: NotSet,
            date: Set(r.date),
            value_ht: Set(r.value_ht),
            value_nt: Set(r.value_nt),
            comment: Set(r.comment),
            billed_at: Set(r.billed_at),
            bill_period_id: Set(r.bill_period_id),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Reading saved: {} ({})", result.date, result.id);
        Ok(entity_to_domain(result))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reading>> {
        let model = reading::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Reading>> {
        let models = reading::Entity::find()
            .order_by_asc(reading::Column::Date)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_unbilled(&self) -> DomainResult<Vec<Reading>> {
        let models = reading::Entity::find()
            .filter(reading::Column::BilledAt.is_null())
            .order_by_asc(reading::Column::Date)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_last_billed(&self) -> DomainResult<Option<Reading>> {
        let model = reading::Entity::find()
            .filter(reading::Column::BilledAt.is_not_null())
            .order_by_desc(reading::Column::BilledAt)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = reading::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Reading",
                field: "id",
                value: id.to_string(),
            });
        }
        info!("Reading deleted: {}", id);
        Ok(())
    }

    async fn mark_billed(
        &self,
        ids: &[i32],
        billed_at: DateTime<Utc>,
        bill_period_id: i32,
    ) -> DomainResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = reading::Entity::update_many()
            .col_expr(reading::Column::BilledAt, Expr::value(billed_at))
            .col_expr(reading::Column::BillPeriodId, Expr::value(bill_period_id))
            .filter(reading::Column::Id.is_in(ids.to_vec()))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        info!(
            "Readings marked billed: {} rows (bill period {})",
            result.rows_affected, bill_period_id
        );
        Ok(result.rows_affected)
    }
}

//! SeaORM implementation of PriceRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use crate::domain::price::{PriceConfig, PriceRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::price_config;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn entity_to_domain(m: price_config::Model) -> PriceConfig {
    PriceConfig {
        id: m.id,
        price_ht: m.price_ht,
        price_nt: m.price_nt,
        base_fee: m.base_fee,
        base_fee_split: m.base_fee_split,
        valid_from: m.valid_from,
        created_at: m.created_at,
    }
}

pub struct SeaOrmPriceRepository {
    db: DatabaseConnection,
}

impl SeaOrmPriceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PriceRepository for SeaOrmPriceRepository {
    async fn create(&self, c: PriceConfig) -> DomainResult<PriceConfig> {
        let model = price_config::ActiveModel {
            id: NotSet,
            price_ht: Set(c.price_ht),
            price_nt: Set(c.price_nt),
            base_fee: Set(c.base_fee),
            base_fee_split: Set(c.base_fee_split),
            valid_from: Set(c.valid_from),
            created_at: Set(c.created_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Price config saved: HT {} / NT {} valid from {} ({})",
            result.price_ht, result.price_nt, result.valid_from, result.id
        );
        Ok(entity_to_domain(result))
    }

    async fn find_all(&self) -> DomainResult<Vec<PriceConfig>> {
        let models = price_config::Entity::find()
            .order_by_desc(price_config::Column::ValidFrom)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_latest(&self) -> DomainResult<Option<PriceConfig>> {
        let model = price_config::Entity::find()
            .order_by_desc(price_config::Column::ValidFrom)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }
}

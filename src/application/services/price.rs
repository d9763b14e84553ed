//! Price configuration service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{DomainResult, PriceConfig, RepositoryProvider};
use crate::shared::errors::DomainError;

/// Service for price configuration operations.
///
/// Configs are append-only: a price change is a new row with a later
/// `valid_from`, never an update.
pub struct PriceService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PriceService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Add a new price config. `valid_from` defaults to now.
    pub async fn add_price(
        &self,
        price_ht: f64,
        price_nt: f64,
        base_fee: f64,
        base_fee_split: Option<f64>,
        valid_from: Option<DateTime<Utc>>,
    ) -> DomainResult<PriceConfig> {
        if price_ht < 0.0 || price_nt < 0.0 || base_fee < 0.0 {
            return Err(DomainError::Validation(
                "prices and base fee must be non-negative".to_string(),
            ));
        }
        if let Some(split) = base_fee_split {
            if !(0.0..=100.0).contains(&split) {
                return Err(DomainError::Validation(
                    "base fee split must be between 0 and 100 percent".to_string(),
                ));
            }
        }

        let now = Utc::now();
        let config = PriceConfig {
            id: 0,
            price_ht,
            price_nt,
            base_fee,
            base_fee_split,
            valid_from: valid_from.unwrap_or(now),
            created_at: now,
        };
        let created = self.repos.prices().create(config).await?;

        info!(
            price_config_id = created.id,
            price_ht = created.price_ht,
            price_nt = created.price_nt,
            valid_from = %created.valid_from,
            "Price config added"
        );
        Ok(created)
    }

    /// All configs, `valid_from` descending.
    pub async fn list_prices(&self) -> DomainResult<Vec<PriceConfig>> {
        self.repos.prices().find_all().await
    }

    /// The config with the greatest `valid_from`.
    pub async fn current_price(&self) -> DomainResult<Option<PriceConfig>> {
        self.repos.prices().find_latest().await
    }
}

// ── Tests ──────────────────────────────────────────────────────

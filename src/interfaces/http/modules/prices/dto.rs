//! Price config DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::PriceConfig;

/// Tariff configuration
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PriceResponse {
    pub id: i32,
    pub price_ht: f64,
    pub price_nt: f64,
    pub base_fee: f64,
    pub base_fee_split: Option<f64>,
    pub valid_from: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<PriceConfig> for PriceResponse {
    fn from(c: PriceConfig) -> Self {
        Self {
            id: c.id,
            price_ht: c.price_ht,
            price_nt: c.price_nt,
            base_fee: c.base_fee,
            base_fee_split: c.base_fee_split,
            valid_from: c.valid_from,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePriceRequest {
    #[validate(range(min = 0.0, message = "price_ht must be non-negative"))]
    pub price_ht: f64,
    #[validate(range(min = 0.0, message = "price_nt must be non-negative"))]
    pub price_nt: f64,
    /// Monthly base fee, defaults to 0
    #[validate(range(min = 0.0, message = "base_fee must be non-negative"))]
    pub base_fee: Option<f64>,
    /// Percentage (0-100), defaults to a 50/50 split
    #[validate(range(min = 0.0, max = 100.0, message = "base_fee_split must be 0-100"))]
    pub base_fee_split: Option<f64>,
    /// Defaults to the current time when omitted
    pub valid_from: Option<DateTime<Utc>>,
}

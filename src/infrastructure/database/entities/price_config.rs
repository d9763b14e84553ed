//! Price config entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Price configuration row - a tariff valid from `valid_from` onward.
/// Rows are append-only; a price change is a new row, never an update.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "price_configs")]
pub struct Model {
    /// Unique config ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Price per kWh, high tariff (currency units)
    pub price_ht: f64,

    /// Price per kWh, low tariff (currency units)
    pub price_nt: f64,

    /// Monthly base fee (currency units)
    pub base_fee: f64,

    /// Percentage (0-100) of the base fee attributed to this billing party;
    /// NULL means the 50/50 default
    #[sea_orm(nullable)]
    pub base_fee_split: Option<f64>,

    /// First instant this config is authoritative for
    pub valid_from: DateTimeUtc,

    /// When the config was created
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

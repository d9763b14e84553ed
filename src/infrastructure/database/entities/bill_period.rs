//! Bill period entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Committed billing event spanning two boundary readings.
/// Rows are never mutated or deleted in normal operation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bill_periods")]
pub struct Model {
    /// Unique bill period ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Date of the start boundary reading
    pub from_date: DateTimeUtc,

    /// Date of the end boundary reading
    pub to_date: DateTimeUtc,

    /// Start boundary reading (weak reference)
    pub from_reading_id: i32,

    /// End boundary reading (weak reference)
    pub to_reading_id: i32,

    pub total_cost: f64,
    pub energy_cost: f64,
    pub base_fee_cost: f64,

    /// Whole calendar months covered by the base fee proration
    pub billing_months: i32,

    /// High-tariff consumption in the period (kWh)
    pub diff_ht: f64,

    /// Low-tariff consumption in the period (kWh)
    pub diff_nt: f64,

    /// Commit timestamp
    pub sent_at: DateTimeUtc,

    /// Delivery channel tag, e.g. "telegram"
    pub sent_via: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

//! Reading entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Meter reading row - a cumulative counter snapshot for both tariffs
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "readings")]
pub struct Model {
    /// Unique reading ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// When the reading was taken
    pub date: DateTimeUtc,

    /// High-tariff counter value (kWh, cumulative)
    pub value_ht: f64,

    /// Low-tariff counter value (kWh, cumulative)
    pub value_nt: f64,

    /// Optional free-form note
    #[sea_orm(nullable)]
    pub comment: Option<String>,

    /// Set when the reading was included in a committed bill period
    #[sea_orm(nullable)]
    pub billed_at: Option<DateTimeUtc>,

    /// Back-reference to the bill period, set together with `billed_at`
    #[sea_orm(nullable)]
    pub bill_period_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

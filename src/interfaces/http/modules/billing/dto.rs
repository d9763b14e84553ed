//! Billing DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::PeriodPreview;
use crate::domain::{BillPeriod, PeriodCost, PeriodSuggestion, PeriodSuggestions};
use crate::interfaces::http::modules::readings::dto::ReadingResponse;

/// A suggested billing period
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestionResponse {
    /// Stable key: "all" or "last3"
    pub key: String,
    pub label: String,
    pub from_id: i32,
    pub to_id: i32,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
}

impl From<PeriodSuggestion> for SuggestionResponse {
    fn from(s: PeriodSuggestion) -> Self {
        Self {
            key: s.key,
            label: s.label,
            from_id: s.from_id,
            to_id: s.to_id,
            from_date: s.from_date,
            to_date: s.to_date,
        }
    }
}

/// Suggestions plus the open readings for building a custom period
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestionsResponse {
    pub periods: Vec<SuggestionResponse>,
    pub unbilled_readings: Vec<ReadingResponse>,
    pub from_reading: Option<ReadingResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<PeriodSuggestions> for SuggestionsResponse {
    fn from(s: PeriodSuggestions) -> Self {
        Self {
            periods: s.periods.into_iter().map(Into::into).collect(),
            unbilled_readings: s.unbilled.into_iter().map(Into::into).collect(),
            from_reading: s.from_reading.map(Into::into),
            message: s.message,
        }
    }
}

/// A (from, to) reading pair identifying a candidate period
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PeriodRequest {
    #[validate(range(min = 1, message = "from_id must be a valid reading id"))]
    pub from_id: i32,
    #[validate(range(min = 1, message = "to_id must be a valid reading id"))]
    pub to_id: i32,
}

/// Cost breakdown for a period
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CostResponse {
    pub total: f64,
    pub energy_cost: f64,
    pub base_fee_cost: f64,
    pub billing_months: i32,
    pub diff_ht: f64,
    pub diff_nt: f64,
    pub price_ht: Option<f64>,
    pub price_nt: Option<f64>,
    pub base_fee: Option<f64>,
    pub base_fee_split: Option<f64>,
}

impl From<PeriodCost> for CostResponse {
    fn from(c: PeriodCost) -> Self {
        Self {
            total: c.total,
            energy_cost: c.energy_cost,
            base_fee_cost: c.base_fee_cost,
            billing_months: c.billing_months,
            diff_ht: c.diff_ht,
            diff_nt: c.diff_nt,
            price_ht: c.applied.as_ref().map(|a| a.price_ht),
            price_nt: c.applied.as_ref().map(|a| a.price_nt),
            base_fee: c.applied.as_ref().map(|a| a.base_fee),
            base_fee_split: c.applied.as_ref().map(|a| a.base_fee_split),
        }
    }
}

/// A validated, priced, not yet committed period
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PreviewResponse {
    pub from: ReadingResponse,
    pub to: ReadingResponse,
    pub cost: CostResponse,
}

impl From<PeriodPreview> for PreviewResponse {
    fn from(p: PeriodPreview) -> Self {
        Self {
            from: p.from.into(),
            to: p.to.into(),
            cost: p.cost.into(),
        }
    }
}

/// Committed billing event
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BillPeriodResponse {
    pub id: i32,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    pub from_reading_id: i32,
    pub to_reading_id: i32,
    pub total_cost: f64,
    pub energy_cost: f64,
    pub base_fee_cost: f64,
    pub billing_months: i32,
    pub diff_ht: f64,
    pub diff_nt: f64,
    pub sent_at: DateTime<Utc>,
    pub sent_via: String,
}

impl From<BillPeriod> for BillPeriodResponse {
    fn from(p: BillPeriod) -> Self {
        Self {
            id: p.id,
            from_date: p.from_date,
            to_date: p.to_date,
            from_reading_id: p.from_reading_id,
            to_reading_id: p.to_reading_id,
            total_cost: p.total_cost,
            energy_cost: p.energy_cost,
            base_fee_cost: p.base_fee_cost,
            billing_months: p.billing_months,
            diff_ht: p.diff_ht,
            diff_nt: p.diff_nt,
            sent_at: p.sent_at,
            sent_via: p.sent_via,
        }
    }
}

/// Billing history with the running total
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    pub items: Vec<BillPeriodResponse>,
    /// Sum of all committed totals
    pub total_billed: f64,
}

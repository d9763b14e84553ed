//! Reading DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Reading;

/// Meter reading snapshot
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadingResponse {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub value_ht: f64,
    pub value_nt: f64,
    pub comment: Option<String>,
    pub billed_at: Option<DateTime<Utc>>,
    pub bill_period_id: Option<i32>,
}

impl From<Reading> for ReadingResponse {
    fn from(r: Reading) -> Self {
        Self {
            id: r.id,
            date: r.date,
            value_ht: r.value_ht,
            value_nt: r.value_nt,
            comment: r.comment,
            billed_at: r.billed_at,
            bill_period_id: r.bill_period_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReadingRequest {
    /// Defaults to the current time when omitted
    pub date: Option<DateTime<Utc>>,
    #[validate(range(min = 0.0, message = "value_ht must be non-negative"))]
    pub value_ht: f64,
    #[validate(range(min = 0.0, message = "value_nt must be non-negative"))]
    pub value_nt: f64,
    #[validate(length(max = 500, message = "comment is too long"))]
    pub comment: Option<String>,
}

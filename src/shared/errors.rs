use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Reading from {} has already been billed", date.format("%Y-%m-%d"))]
    AlreadyBilled { date: DateTime<Utc> },

    #[error("The start reading must be earlier than the end reading")]
    InvalidOrdering,

    #[error(
        "Overlaps the bill period {} \u{2013} {} committed on {}",
        from.format("%Y-%m-%d"),
        to.format("%Y-%m-%d"),
        sent_at.format("%Y-%m-%d")
    )]
    OverlappingPeriod {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        sent_at: DateTime<Utc>,
    },

    #[error("No price configuration available")]
    NoPriceConfigured,

    #[error("Report delivery failed: {0}")]
    NotificationFailed(String),

    #[error("Bill period {bill_period_id} was created but readings could not be marked billed: {detail}")]
    PartialCommit { bill_period_id: i32, detail: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether the operation can be retried as-is without risking a
    /// duplicate billing record. `PartialCommit` must never be retried
    /// blindly: the record already exists.
    pub fn is_retry_safe(&self) -> bool {
        matches!(
            self,
            DomainError::NotificationFailed(_) | DomainError::Storage(_)
        )
    }
}

//! Shared HTTP plumbing: response envelope, error mapping, extractors

mod validated_json;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::errors::DomainError;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

/// Standard API response wrapper.
///
/// All REST endpoints return data in this envelope.
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Empty response for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// HTTP status for a domain error.
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::AlreadyBilled { .. }
        | DomainError::InvalidOrdering
        | DomainError::OverlappingPeriod { .. }
        | DomainError::NoPriceConfigured => StatusCode::CONFLICT,
        DomainError::NotificationFailed(_) => StatusCode::BAD_GATEWAY,
        DomainError::PartialCommit { .. } | DomainError::Storage(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Map a domain error into the standard rejection tuple used by handlers.
pub fn domain_error(err: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    (status_for(&err), Json(ApiResponse::error(err.to_string())))
}

// ── Tests ──────────────────────────────────────────────────────

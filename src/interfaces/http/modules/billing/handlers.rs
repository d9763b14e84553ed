//! Billing REST API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    BillPeriodResponse, HistoryResponse, PeriodRequest, PreviewResponse, SuggestionsResponse,
};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/billing/suggestions",
    tag = "Billing",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Candidate periods for the next bill", body = ApiResponse<SuggestionsResponse>)
    )
)]
pub async fn get_suggestions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SuggestionsResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let suggestions = state.billing.suggestions().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(suggestions.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/billing/preview",
    tag = "Billing",
    security(("bearer_auth" = [])),
    request_body = PeriodRequest,
    responses(
        (status = 200, description = "Validated and priced period", body = ApiResponse<PreviewResponse>),
        (status = 404, description = "Reading not found"),
        (status = 409, description = "Period not eligible")
    )
)]
pub async fn preview_period(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<PeriodRequest>,
) -> Result<Json<ApiResponse<PreviewResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let preview = state
        .billing
        .preview_period(body.from_id, body.to_id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(preview.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/billing/report",
    tag = "Billing",
    security(("bearer_auth" = [])),
    request_body = PeriodRequest,
    responses(
        (status = 200, description = "Report delivered and period committed", body = ApiResponse<BillPeriodResponse>),
        (status = 409, description = "Period not eligible"),
        (status = 502, description = "Report delivery failed; nothing was committed")
    )
)]
pub async fn send_report(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<PeriodRequest>,
) -> Result<Json<ApiResponse<BillPeriodResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let committed = state
        .billing
        .send_report(body.from_id, body.to_id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(committed.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/billing/history",
    tag = "Billing",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Committed bill periods, newest first", body = ApiResponse<HistoryResponse>)
    )
)]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HistoryResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let periods = state.billing.history().await.map_err(domain_error)?;
    let total_billed = periods.iter().map(|p| p.total_cost).sum();
    Ok(Json(ApiResponse::success(HistoryResponse {
        items: periods.into_iter().map(Into::into).collect(),
        total_billed,
    })))
}

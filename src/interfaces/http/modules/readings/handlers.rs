//! Reading REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateReadingRequest, ReadingResponse};
use crate::interfaces::http::common::{domain_error, ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::modules::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/readings",
    tag = "Readings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Readings ordered by date", body = ApiResponse<Vec<ReadingResponse>>)
    )
)]
pub async fn list_readings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ReadingResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let readings = state.readings.list_readings().await.map_err(domain_error)?;
    let responses: Vec<ReadingResponse> = readings.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(responses)))
}

#[utoipa::path(
    post,
    path = "/api/v1/readings",
    tag = "Readings",
    security(("bearer_auth" = [])),
    request_body = CreateReadingRequest,
    responses(
        (status = 200, description = "Reading created", body = ApiResponse<ReadingResponse>),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_reading(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateReadingRequest>,
) -> Result<Json<ApiResponse<ReadingResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let created = state
        .readings
        .add_reading(body.date, body.value_ht, body.value_nt, body.comment)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(created.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/readings/{id}",
    tag = "Readings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reading ID")),
    responses(
        (status = 200, description = "Reading deleted", body = ApiResponse<EmptyData>),
        (status = 400, description = "Reading is billed and cannot be deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_reading(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EmptyData>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .readings
        .delete_reading(id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

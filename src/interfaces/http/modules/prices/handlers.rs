//! Price config REST API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreatePriceRequest, PriceResponse};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/prices",
    tag = "Prices",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Price configs, newest first", body = ApiResponse<Vec<PriceResponse>>)
    )
)]
pub async fn list_prices(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PriceResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let configs = state.prices.list_prices().await.map_err(domain_error)?;
    let responses: Vec<PriceResponse> = configs.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(responses)))
}

#[utoipa::path(
    get,
    path = "/api/v1/prices/current",
    tag = "Prices",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Currently valid price config", body = ApiResponse<PriceResponse>),
        (status = 404, description = "No price configured")
    )
)]
pub async fn current_price(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PriceResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.prices.current_price().await.map_err(domain_error)? {
        Some(config) => Ok(Json(ApiResponse::success(config.into()))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("No price configured")),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/prices",
    tag = "Prices",
    security(("bearer_auth" = [])),
    request_body = CreatePriceRequest,
    responses(
        (status = 200, description = "Price config created", body = ApiResponse<PriceResponse>),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_price(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreatePriceRequest>,
) -> Result<Json<ApiResponse<PriceResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let created = state
        .prices
        .add_price(
            body.price_ht,
            body.price_nt,
            body.base_fee.unwrap_or(0.0),
            body.base_fee_split,
            body.valid_from,
        )
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(created.into())))
}

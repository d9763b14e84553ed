//! Dashboard REST API handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::DashboardData;
use crate::interfaces::http::common::{domain_error, ApiResponse};
use crate::interfaces::http::modules::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Headline stats and chart series", body = ApiResponse<DashboardData>)
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardData>>, (StatusCode, Json<ApiResponse<()>>)> {
    let data = state.dashboard.overview().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(data)))
}

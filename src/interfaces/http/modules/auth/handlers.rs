//! Auth REST API handlers

use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, warn};

use super::dto::{LoginRequest, LoginResponse};
use crate::auth::{check_admin_credentials, create_token};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    if !check_admin_credentials(&state.auth.admin, &body.username, &body.password) {
        warn!(username = body.username.as_str(), "Failed login attempt");
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid username or password")),
        ));
    }

    let token = create_token(&body.username, &state.auth.jwt_config).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to issue token: {}", e))),
        )
    })?;

    info!(username = body.username.as_str(), "Login successful");
    Ok(Json(ApiResponse::success(LoginResponse {
        token,
        username: body.username,
    })))
}

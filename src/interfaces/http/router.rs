//! API router with Swagger UI

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::middleware::auth_middleware;

use super::modules::{auth, billing, dashboard, health, prices, readings, AppState};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Auth
        auth::handlers::login,
        // Readings
        readings::handlers::list_readings,
        readings::handlers::create_reading,
        readings::handlers::delete_reading,
        // Prices
        prices::handlers::list_prices,
        prices::handlers::current_price,
        prices::handlers::create_price,
        // Billing
        billing::handlers::get_suggestions,
        billing::handlers::preview_period,
        billing::handlers::send_report,
        billing::handlers::get_history,
        // Dashboard
        dashboard::handlers::get_dashboard,
    ),
    components(schemas(
        health::handlers::HealthResponse,
        auth::dto::LoginRequest,
        auth::dto::LoginResponse,
        readings::dto::ReadingResponse,
        readings::dto::CreateReadingRequest,
        prices::dto::PriceResponse,
        prices::dto::CreatePriceRequest,
        billing::dto::SuggestionResponse,
        billing::dto::SuggestionsResponse,
        billing::dto::PeriodRequest,
        billing::dto::CostResponse,
        billing::dto::PreviewResponse,
        billing::dto::BillPeriodResponse,
        billing::dto::HistoryResponse,
        crate::application::DashboardData,
        crate::application::ChartPoint,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Auth", description = "Admin login"),
        (name = "Readings", description = "Meter readings"),
        (name = "Prices", description = "Price configurations"),
        (name = "Billing", description = "Billing periods and reports"),
        (name = "Dashboard", description = "Stats and chart data"),
    )
)]
struct ApiDoc;

/// Build the full application router.
///
/// Everything except health and login sits behind the JWT middleware.
pub fn create_api_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/v1/health", get(health::handlers::health_check))
        .route("/api/v1/auth/login", post(auth::handlers::login));

    let protected = Router::new()
        .route(
            "/api/v1/readings",
            get(readings::handlers::list_readings).post(readings::handlers::create_reading),
        )
        .route(
            "/api/v1/readings/{id}",
            delete(readings::handlers::delete_reading),
        )
        .route(
            "/api/v1/prices",
            get(prices::handlers::list_prices).post(prices::handlers::create_price),
        )
        .route("/api/v1/prices/current", get(prices::handlers::current_price))
        .route(
            "/api/v1/billing/suggestions",
            get(billing::handlers::get_suggestions),
        )
        .route(
            "/api/v1/billing/preview",
            post(billing::handlers::preview_period),
        )
        .route("/api/v1/billing/report", post(billing::handlers::send_report))
        .route("/api/v1/billing/history", get(billing::handlers::get_history))
        .route("/api/v1/dashboard", get(dashboard::handlers::get_dashboard))
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            auth_middleware,
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public)
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

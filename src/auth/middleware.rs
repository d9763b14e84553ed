//! Authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::jwt::{verify_token, JwtConfig, TokenClaims};
use crate::config::AdminConfig;
use crate::interfaces::http::common::ApiResponse;

/// Authentication state shared by the login handler and the middleware
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
    pub admin: AdminConfig,
}

/// The authenticated actor, inserted into request extensions
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub username: String,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: TokenClaims) -> Self {
        Self {
            username: claims.sub,
        }
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::<()>::error(message)),
    )
        .into_response()
}

/// JWT bearer authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return unauthorized("Missing authorization header");
    };

    let Some(token) = extract_token(&auth_header) else {
        return unauthorized("Invalid authorization header");
    };

    match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => {
            if claims.is_expired() {
                return unauthorized("Token expired");
            }
            let user = AuthenticatedUser::from_claims(claims);
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(_) => unauthorized("Invalid token"),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::Router;
    use tower::Service;

    use crate::auth::jwt::create_token;

    fn auth_state() -> AuthState {
        AuthState {
            jwt_config: JwtConfig {
                secret: "test-secret".to_string(),
                expiration_hours: 1,
            },
            admin: AdminConfig::default(),
        }
    }

    async fn handler() -> &'static str {
        "ok"
    }

    fn app(state: AuthState) -> Router {
        Router::new()
            .route("/protected", get(handler))
            .layer(axum::middleware::from_fn_with_state(state, auth_middleware))
    }

    async fn send(state: AuthState, auth: Option<String>) -> StatusCode {
        let mut builder = Request::builder().method("GET").uri("/protected");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let req = builder.body(Body::empty()).unwrap();
        let mut svc = app(state).into_service();
        svc.call(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        assert_eq!(send(auth_state(), None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_header_is_unauthorized() {
        assert_eq!(
            send(auth_state(), Some("Basic abc".to_string())).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn valid_bearer_token_passes() {
        let state = auth_state();
        let token = create_token("admin", &state.jwt_config).unwrap();
        assert_eq!(
            send(state, Some(format!("Bearer {}", token))).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        assert_eq!(
            send(auth_state(), Some("Bearer not-a-token".to_string())).await,
            StatusCode::UNAUTHORIZED
        );
    }
}

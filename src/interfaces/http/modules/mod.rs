//! HTTP API modules, one per resource

pub mod auth;
pub mod billing;
pub mod dashboard;
pub mod health;
pub mod prices;
pub mod readings;

use std::sync::Arc;

use axum::extract::FromRef;

use crate::application::{BillingService, DashboardService, PriceService, ReadingService};
use crate::auth::AuthState;

/// Unified state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub readings: Arc<ReadingService>,
    pub prices: Arc<PriceService>,
    pub billing: Arc<BillingService>,
    pub dashboard: Arc<DashboardService>,
    pub auth: AuthState,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(s: &AppState) -> Self {
        s.auth.clone()
    }
}

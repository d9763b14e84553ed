//!
//! Household utility-billing service.
//! Reads configuration from TOML file (~/.config/meterbill/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use meterbill::application::{BillingService, DashboardService, PriceService, ReadingService};
use meterbill::auth::{AuthState, JwtConfig};
use meterbill::config::AppConfig;
use meterbill::domain::RepositoryProvider;
use meterbill::infrastructure::database::migrator::Migrator;
use meterbill::notifications::{ReportSender, TelegramSender};
use meterbill::{
    create_api_router, default_config_path, init_database, AppState, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("METERBILL_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Meterbill billing service...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Repositories & services ────────────────────────────────
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    if app_cfg.telegram.bot_token.is_empty() {
        warn!("Telegram bot token not configured; report delivery will fail until it is set");
    }
    let sender: Arc<dyn ReportSender> = Arc::new(TelegramSender::new(&app_cfg.telegram));

    let state = AppState {
        readings: Arc::new(ReadingService::new(repos.clone())),
        prices: Arc::new(PriceService::new(repos.clone())),
        billing: Arc::new(BillingService::new(repos.clone(), sender)),
        dashboard: Arc::new(DashboardService::new(repos)),
        auth: AuthState {
            jwt_config: JwtConfig {
                secret: app_cfg.security.jwt_secret.clone(),
                expiration_hours: app_cfg.security.jwt_expiration_hours,
            },
            admin: app_cfg.admin.clone(),
        },
    };

    // ── HTTP server ────────────────────────────────────────────
    let router = create_api_router(state);
    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Meterbill shutdown complete");
    Ok(())
}

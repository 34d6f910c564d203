//! Lumière API Server
//!
//! Backend for the Lumière agency site: serves the public asset set, scans the
//! local gallery, proxies portfolio listings from Google Drive, and exposes the
//! hand-authored site content.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::GoogleDriveClient;
use app::{ContactDetails, DriveGalleryService, GalleryService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub gallery_service: Arc<GalleryService>,
    pub drive_gallery_service: Arc<DriveGalleryService<GoogleDriveClient>>,
    pub contact: Arc<ContactDetails>,
    pub config: Config,
}

impl AppState {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let drive_client = match &config.drive_api_key {
            Some(key) => Some(Arc::new(GoogleDriveClient::new(
                config.drive_api_url.clone(),
                key.clone(),
                Duration::from_secs(config.drive_timeout_secs),
            )?)),
            None => None,
        };

        Ok(Self {
            gallery_service: Arc::new(GalleryService::new(config.gallery_dir())),
            drive_gallery_service: Arc::new(DriveGalleryService::new(drive_client)),
            contact: Arc::new(ContactDetails::new(
                config.contact_email.clone(),
                config.contact_phone.clone(),
            )),
            config,
        })
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full router: API routes, then the public asset set as fallback
pub fn build_router(state: AppState) -> Router {
    // Routes that call out to Google Drive
    let drive_routes: Router<AppState> = Router::new()
        .route("/api/drive-gallery", get(handlers::get_drive_gallery))
        .route("/api/portfolio", get(handlers::get_portfolio));

    let drive_routes: Router<AppState> = match state.config.rate_limit_replenish_ms() {
        Some(replenish_ms) => {
            // PeerIpKeyExtractor reads the client IP from the socket connection
            let governor_config = GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_millisecond(replenish_ms)
                .burst_size(state.config.rate_limit_burst)
                .finish();

            match governor_config {
                Some(config) => drive_routes.layer(GovernorLayer {
                    config: Arc::new(config),
                }),
                None => {
                    tracing::warn!("Invalid rate limit settings, Drive routes are not limited");
                    drive_routes
                }
            }
        }
        None => drive_routes,
    };

    Router::new()
        .route("/health", get(health))
        // Local gallery
        .route("/api/gallery", get(handlers::list_gallery))
        .route("/api/photos", get(handlers::list_photos))
        .route("/gallery/:name", get(handlers::gallery_file))
        // Site content
        .route("/api/site", get(handlers::get_site))
        .route("/api/services", get(handlers::list_services))
        .route("/api/services/:id", get(handlers::get_service))
        .route("/api/team", get(handlers::list_team))
        .route("/api/reels", get(handlers::list_reels))
        .route("/api/faq", get(handlers::list_faq))
        .route("/api/testimonials", get(handlers::list_testimonials))
        .route("/api/contact", post(handlers::post_contact))
        // Merge Drive-backed routes
        .merge(drive_routes)
        // Everything else is a static asset
        .fallback_service(ServeDir::new(&state.config.public_dir))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lumiere_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lumière API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Serving public assets from {}", config.public_dir.display());
    if config.drive_enabled() {
        tracing::info!("Google Drive listing enabled");
    } else {
        tracing::info!("No Google Drive API key, portfolio falls back to embedded views");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::from_config(config)?;
    let app = build_router(state);

    // Start server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

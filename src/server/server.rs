use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::time::Duration;

use tracing::{error, info};

use axum::{
    extract::State,
    http::HeaderValue,
    middleware,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::state::{GuardedAlbumStore, ServerState};
use super::{albums::make_album_routes, log_requests, metrics, ServerConfig};
use crate::stats::{compute_stats, AlbumStats};

pub const SERVICE_NAME: &str = "Album API";

fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Serialize)]
struct Endpoints {
    albums: &'static str,
    album_by_id: &'static str,
    create_album: &'static str,
    update_album: &'static str,
    delete_album: &'static str,
    search: &'static str,
    stats: &'static str,
    health: &'static str,
}

const ENDPOINTS: Endpoints = Endpoints {
    albums: "GET /albums - List all albums",
    album_by_id: "GET /albums/{id} - Get album by ID",
    create_album: "POST /albums - Create new album",
    update_album: "PUT /albums/{id} - Update album",
    delete_album: "DELETE /albums/{id} - Delete album",
    search: "GET /albums/search?q={query} - Search albums",
    stats: "GET /stats - API statistics",
    health: "GET /health - Health check",
};

#[derive(Serialize)]
struct ServiceInfo {
    message: &'static str,
    version: &'static str,
    hash: String,
    uptime: String,
    endpoints: Endpoints,
    timestamp: String,
}

#[derive(Serialize)]
struct StatsResponse {
    #[serde(flatten)]
    stats: AlbumStats,
    timestamp: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    timestamp: String,
    albums_count: usize,
}

async fn home(State(state): State<ServerState>) -> Json<ServiceInfo> {
    info!(operation = "root", "Root endpoint accessed");
    Json(ServiceInfo {
        message: "Welcome to Album API",
        version: env!("CARGO_PKG_VERSION"),
        hash: state.hash.clone(),
        uptime: format_uptime(state.start_time.elapsed()),
        endpoints: ENDPOINTS,
        timestamp: now_timestamp(),
    })
}

async fn get_stats(State(store): State<GuardedAlbumStore>) -> Json<StatsResponse> {
    info!(operation = "get_stats", "Retrieving API statistics");

    let stats = compute_stats(&store.list());

    info!(
        album_count = stats.total_albums,
        "Stats generated: {} albums, {} artists, avg price ${:.2}",
        stats.total_albums,
        stats.unique_artists,
        stats.average_price
    );
    Json(StatsResponse {
        stats,
        timestamp: now_timestamp(),
    })
}

async fn health(State(store): State<GuardedAlbumStore>) -> Json<HealthResponse> {
    info!(operation = "health_check", "Health check requested");
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: now_timestamp(),
        albums_count: store.len(),
    })
}

fn make_cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

pub fn make_app(config: ServerConfig, album_store: GuardedAlbumStore) -> Result<Router> {
    let cors = make_cors_layer(&config.cors_origins)?;
    let state = ServerState::new(config, album_store);

    let app: Router = Router::new()
        .route("/", get(home))
        .route("/stats", get(get_stats))
        .route("/health", get(health))
        .merge(make_album_routes())
        .with_state(state.clone())
        .layer(cors)
        .layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, initiating graceful shutdown");
}

pub async fn run_server(album_store: GuardedAlbumStore, config: ServerConfig) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);
    let metrics_port = config.metrics_port;

    metrics::init_metrics();
    metrics::set_albums_count(album_store.len());

    let app = make_app(config.clone(), album_store)?;

    if metrics_port != 0 {
        let metrics_addr = SocketAddr::new(config.host, metrics_port);
        let metrics_listener = tokio::net::TcpListener::bind(metrics_addr)
            .await
            .with_context(|| format!("Failed to bind metrics server to {}", metrics_addr))?;
        info!("Metrics available at {}", metrics_addr);
        tokio::spawn(async move {
            if let Err(err) = axum::serve(metrics_listener, metrics::make_metrics_app()).await {
                error!("Metrics server stopped: {}", err);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Ready to serve at {}!", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Album API shutting down...");
    Ok(())
}

//! Routers HTTP
//!
//! `create_app_router` arma la aplicación completa: `/health` más los
//! recursos bajo `/api`, con trazas, compresión y CORS.

pub mod client_routes;
pub mod delivery_routes;
pub mod driver_routes;
pub mod package_routes;
pub mod route_optimization_routes;
pub mod route_routes;
pub mod tracking_event_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_layer;
use crate::state::AppState;

pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let api = Router::new()
        .nest("/clients", client_routes::create_client_router())
        .nest("/drivers", driver_routes::create_driver_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/routes", route_routes::create_route_router())
        .nest("/deliveries", delivery_routes::create_delivery_router())
        .nest("/packages", package_routes::create_package_router())
        .nest("/tracking-events", tracking_event_routes::create_tracking_event_router())
        .merge(route_optimization_routes::create_route_optimization_router());

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de salud
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

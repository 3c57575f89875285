//! Routers de la API
//!
//! Un router por recurso; `create_api_router` los monta bajo sus prefijos.

pub mod analytics_routes;
pub mod auth_routes;
pub mod driver_routes;
pub mod expense_routes;
pub mod maintenance_routes;
pub mod trip_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Router con todas las rutas bajo `/api`
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/drivers", driver_routes::create_driver_router())
        .nest("/trips", trip_routes::create_trip_router())
        .nest("/maintenance", maintenance_routes::create_maintenance_router())
        .nest("/expenses", expense_routes::create_expense_router())
        .nest("/dashboard", analytics_routes::create_dashboard_router())
        .nest("/analytics", analytics_routes::create_analytics_router())
        .nest("/auth", auth_routes::create_auth_router())
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "FleetFlow backend is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

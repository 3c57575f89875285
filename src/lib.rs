//! FleetFlow
//!
//! Backend REST para la gestión de una flota: vehículos, conductores, viajes,
//! mantenimiento, gastos y analítica financiera sobre PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Construir la aplicación completa con sus capas
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_origins.as_deref());

    Router::new()
        .nest("/api", routes::create_api_router())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

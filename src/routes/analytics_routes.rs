use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::analytics_controller::AnalyticsController;
use crate::dto::analytics_dto::AnalyticsQuery;
use crate::models::analytics::{AnalyticsSummary, DashboardStats, DashboardSummary};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/stats", get(dashboard_stats))
}

pub fn create_analytics_router() -> Router<AppState> {
    Router::new().route("/", get(analytics))
}

async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardSummary>, AppError> {
    let controller = AnalyticsController::new(state.pool.clone());
    Ok(Json(controller.dashboard().await?))
}

async fn dashboard_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    let controller = AnalyticsController::new(state.pool.clone());
    Ok(Json(controller.stats().await?))
}

/// `GET /analytics?period=`. Sin `period` se usa `all`; un valor desconocido
/// responde 400 en lugar de caer en silencio a `all`.
async fn analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let controller = AnalyticsController::new(state.pool.clone());
    Ok(Json(controller.analytics(query).await?))
}

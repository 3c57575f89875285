use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::CreateMaintenanceRequest;
use crate::models::maintenance::{MaintenanceListItem, MaintenanceLog};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_maintenance).post(create_maintenance))
        .route("/:id/complete", put(complete_maintenance))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<MaintenanceLog>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_maintenance(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceListItem>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn complete_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MaintenanceLog>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    Ok(Json(controller.complete(id).await?))
}

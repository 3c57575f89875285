use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{CreateDriverRequest, UpdateDriverStatusRequest};
use crate::models::driver::Driver;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers).post(create_driver))
        .route("/available", get(list_available_drivers))
        .route("/recalculate-all/safety", put(recalculate_all_safety))
        .route("/:id/status", put(update_driver_status))
        .route("/:id/calculate-safety", put(calculate_safety))
}

async fn create_driver(
    State(state): State<AppState>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<Json<Driver>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_drivers(State(state): State<AppState>) -> Result<Json<Vec<Driver>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn list_available_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Driver>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.list_available().await?))
}

async fn update_driver_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDriverStatusRequest>,
) -> Result<Json<Driver>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.update_status(id, request).await?))
}

async fn calculate_safety(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Driver>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.calculate_safety(id).await?))
}

async fn recalculate_all_safety(
    State(state): State<AppState>,
) -> Result<Json<Vec<Driver>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.recalculate_all_safety().await?))
}

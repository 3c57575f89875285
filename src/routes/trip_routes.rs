use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::{CreateTripRequest, UpdateTripStatusRequest};
use crate::models::trip::{Trip, TripListItem};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips).post(create_trip))
        .route("/:id/status", put(update_trip_status))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> Result<Json<Trip>, AppError> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<TripListItem>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn update_trip_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTripStatusRequest>,
) -> Result<Json<Trip>, AppError> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.update_status(id, request).await?))
}

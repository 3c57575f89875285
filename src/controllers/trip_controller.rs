use crate::dto::trip_dto::{CreateTripRequest, UpdateTripStatusRequest};
use crate::models::trip::{Trip, TripListItem};
use crate::repositories::trip_repository::TripRepository;
use crate::services::status_sync::StatusSynchronizer;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct TripController {
    repository: TripRepository,
    synchronizer: StatusSynchronizer,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool.clone()),
            synchronizer: StatusSynchronizer::new(pool),
        }
    }

    pub async fn create(&self, request: CreateTripRequest) -> Result<Trip, AppError> {
        request.validate()?;
        let new_trip = request.into_new_trip()?;
        self.synchronizer.create_trip(new_trip).await
    }

    pub async fn list(&self) -> Result<Vec<TripListItem>, AppError> {
        self.repository.list_with_vehicle().await
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateTripStatusRequest,
    ) -> Result<Trip, AppError> {
        request.validate()?;
        let status = request.status()?;
        self.synchronizer.set_trip_status(id, status).await
    }
}

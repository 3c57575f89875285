use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, AppError};
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        request.validate()?;

        let name = request.name.unwrap_or_default().trim().to_string();
        let license_plate = request.license_plate.unwrap_or_default().trim().to_string();

        // La matrícula es única en toda la flota
        if self.repository.license_plate_exists(&license_plate).await? {
            return Err(conflict_error("Vehicle", "license_plate", &license_plate));
        }

        let vehicle = self
            .repository
            .create(name, license_plate, request.max_capacity, request.odometer)
            .await?;

        info!(vehicle_id = %vehicle.id, plate = %vehicle.license_plate, "Vehicle registered");
        Ok(vehicle)
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list_all().await
    }
}

use crate::dto::driver_dto::{CreateDriverRequest, UpdateDriverStatusRequest};
use crate::dto::parse_status;
use crate::models::driver::{safety_score, Driver, DriverStatus};
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::non_blank;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateDriverRequest) -> Result<Driver, AppError> {
        request.validate()?;
        let expiry_date = request.expiry()?;

        let driver = self
            .repository
            .create(
                request.name.unwrap_or_default().trim().to_string(),
                non_blank(request.license_no),
                expiry_date,
            )
            .await?;

        info!(driver_id = %driver.id, "Driver registered");
        Ok(driver)
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        self.repository.list_all().await
    }

    /// Conductores que pueden salir de viaje hoy
    pub async fn list_available(&self) -> Result<Vec<Driver>, AppError> {
        self.repository.list_available().await
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateDriverStatusRequest,
    ) -> Result<Driver, AppError> {
        request.validate()?;
        let status: DriverStatus =
            parse_status("status", request.status.as_deref().unwrap_or_default())?;

        let driver = self
            .repository
            .set_status(id, status)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        info!(driver_id = %id, status = %status, "Driver status changed");
        Ok(driver)
    }

    pub async fn calculate_safety(&self, id: Uuid) -> Result<Driver, AppError> {
        let mut tx = self.repository.pool().begin().await?;

        let driver = DriverRepository::lock(&mut tx, id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        let score = safety_score(driver.completion_rate, driver.complaints);
        let driver = DriverRepository::update_safety_score(&mut *tx, id, score).await?;

        tx.commit().await?;
        Ok(driver)
    }

    pub async fn recalculate_all_safety(&self) -> Result<Vec<Driver>, AppError> {
        let mut tx = self.repository.pool().begin().await?;

        let drivers = DriverRepository::lock_all(&mut tx).await?;
        let mut updated = Vec::with_capacity(drivers.len());
        for driver in drivers {
            let score = safety_score(driver.completion_rate, driver.complaints);
            updated.push(DriverRepository::update_safety_score(&mut *tx, driver.id, score).await?);
        }

        tx.commit().await?;

        info!(drivers = updated.len(), "Safety scores recalculated");
        Ok(updated)
    }
}

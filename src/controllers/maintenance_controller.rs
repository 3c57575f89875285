use crate::dto::maintenance_dto::CreateMaintenanceRequest;
use crate::models::maintenance::{MaintenanceListItem, MaintenanceLog};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::services::maintenance_service::MaintenanceService;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
    service: MaintenanceService,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            service: MaintenanceService::new(pool),
        }
    }

    pub async fn create(&self, request: CreateMaintenanceRequest) -> Result<MaintenanceLog, AppError> {
        request.validate()?;
        let new_log = request.into_new_log()?;
        self.service.create_log(new_log).await
    }

    pub async fn list(&self) -> Result<Vec<MaintenanceListItem>, AppError> {
        self.repository.list_with_vehicle().await
    }

    pub async fn complete(&self, id: Uuid) -> Result<MaintenanceLog, AppError> {
        self.service.complete_log(id).await
    }
}

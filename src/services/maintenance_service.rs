//! Disparadores de mantenimiento
//!
//! Abrir un registro de taller manda el vehículo a `In Shop` y, si hay coste,
//! lo lleva al libro de gastos. Cerrarlo devuelve el vehículo a `Available`.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::expense::{NewExpense, DEFAULT_EXPENSE_STATUS};
use crate::models::maintenance::MaintenanceLog;
use crate::models::vehicle::VehicleStatus;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub const DEFAULT_SERVICE_TYPE: &str = "Service";

/// Datos de un registro de mantenimiento nuevo
#[derive(Debug, Clone)]
pub struct NewMaintenanceLog {
    pub vehicle_id: Uuid,
    pub service_type: Option<String>,
    pub cost: Option<String>,
    pub notes: Option<String>,
}

/// Tipo de servicio efectivo; vacío equivale a `Service`
pub fn effective_service_type(service_type: Option<&str>) -> &str {
    service_type
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SERVICE_TYPE)
}

/// Gasto que acompaña a un mantenimiento con coste
pub fn maintenance_expense(service_type: &str, cost: Option<&str>) -> Option<NewExpense> {
    let cost = cost.map(str::trim).filter(|c| !c.is_empty())?;
    Some(NewExpense {
        trip_id: None,
        driver_name: format!("Maintenance: {}", service_type),
        fuel_cost: "0".to_string(),
        misc_expense: cost.to_string(),
        distance: String::new(),
        status: DEFAULT_EXPENSE_STATUS.to_string(),
    })
}

pub struct MaintenanceService {
    pool: PgPool,
}

impl MaintenanceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_log(&self, request: NewMaintenanceLog) -> AppResult<MaintenanceLog> {
        let service_type = effective_service_type(request.service_type.as_deref());
        let cost = request.cost.as_deref();

        let mut tx = self.pool.begin().await?;

        VehicleRepository::lock(&mut tx, request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &request.vehicle_id.to_string()))?;

        let log = MaintenanceRepository::insert(
            &mut *tx,
            request.vehicle_id,
            service_type,
            cost,
            request.notes.as_deref(),
        )
        .await?;

        VehicleRepository::update_status(&mut *tx, request.vehicle_id, VehicleStatus::InShop)
            .await?;

        if let Some(expense) = maintenance_expense(service_type, cost) {
            ExpenseRepository::insert(&mut *tx, &expense).await?;
        }

        tx.commit().await?;

        info!(
            maintenance_id = %log.id,
            vehicle_id = %log.vehicle_id,
            service_type = %log.service_type,
            "Vehicle sent to shop"
        );
        Ok(log)
    }

    pub async fn complete_log(&self, id: Uuid) -> AppResult<MaintenanceLog> {
        let mut tx = self.pool.begin().await?;

        let log = MaintenanceRepository::mark_completed(&mut *tx, id)
            .await?
            .ok_or_else(|| not_found_error("Maintenance record", &id.to_string()))?;

        VehicleRepository::update_status(&mut *tx, log.vehicle_id, VehicleStatus::Available)
            .await?;

        tx.commit().await?;

        info!(maintenance_id = %log.id, vehicle_id = %log.vehicle_id, "Vehicle back in service");
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::currency::parse_money;
    use rust_decimal::Decimal;

    #[test]
    fn test_expense_for_costed_maintenance() {
        let expense = maintenance_expense("Oil Change", Some("5000")).unwrap();

        assert_eq!(expense.driver_name, "Maintenance: Oil Change");
        assert_eq!(expense.trip_id, None);
        assert_eq!(parse_money(&expense.misc_expense), Decimal::from(5000));
        assert_eq!(parse_money(&expense.fuel_cost), Decimal::ZERO);
        assert_eq!(expense.distance, "");
        assert_eq!(expense.status, "Recorded");
    }

    #[test]
    fn test_no_expense_without_cost() {
        assert!(maintenance_expense("Tyre Rotation", None).is_none());
        assert!(maintenance_expense("Tyre Rotation", Some("")).is_none());
        assert!(maintenance_expense("Tyre Rotation", Some("   ")).is_none());
    }

    #[test]
    fn test_blank_service_type_falls_back() {
        assert_eq!(effective_service_type(None), "Service");
        assert_eq!(effective_service_type(Some("  ")), "Service");
        assert_eq!(effective_service_type(Some(" Brakes ")), "Brakes");

        let expense = maintenance_expense(effective_service_type(None), Some("19k")).unwrap();
        assert_eq!(expense.driver_name, "Maintenance: Service");
        assert_eq!(parse_money(&expense.misc_expense), Decimal::from(19_000));
    }
}

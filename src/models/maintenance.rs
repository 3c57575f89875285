//! Modelo de MaintenanceLog
//!
//! Registros de taller. Un registro abierto mantiene el vehículo `In Shop`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del registro de mantenimiento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "varchar")]
pub enum MaintenanceStatus {
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    #[sqlx(rename = "Completed")]
    Completed,
}

/// MaintenanceLog principal - mapea exactamente a la tabla maintenance
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MaintenanceLog {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub issue: String,
    pub service_type: String,
    pub cost: Option<String>,
    pub notes: Option<String>,
    pub service_date: NaiveDate,
    pub status: MaintenanceStatus,
    pub created_at: DateTime<Utc>,
}

/// Registro con los datos del vehículo para el listado
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MaintenanceListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub log: MaintenanceLog,
    pub vehicle_name: Option<String>,
    pub license_plate: Option<String>,
}

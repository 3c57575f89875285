//! Modelo de Trip
//!
//! Viajes y su ciclo de vida: Draft → On Trip → Completed | Cancelled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Estado del viaje - columna `status`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "varchar")]
pub enum TripStatus {
    #[serde(rename = "Draft")]
    #[sqlx(rename = "Draft")]
    Draft,
    #[serde(rename = "On Trip")]
    #[sqlx(rename = "On Trip")]
    OnTrip,
    #[serde(rename = "Completed")]
    #[sqlx(rename = "Completed")]
    Completed,
    #[serde(rename = "Cancelled")]
    #[sqlx(rename = "Cancelled")]
    Cancelled,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Draft => "Draft",
            TripStatus::OnTrip => "On Trip",
            TripStatus::Completed => "Completed",
            TripStatus::Cancelled => "Cancelled",
        }
    }

    /// Completed y Cancelled son estados finales
    pub fn is_terminal(&self) -> bool {
        matches!(self, TripStatus::Completed | TripStatus::Cancelled)
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Draft" => Ok(TripStatus::Draft),
            "On Trip" => Ok(TripStatus::OnTrip),
            "Completed" => Ok(TripStatus::Completed),
            "Cancelled" => Ok(TripStatus::Cancelled),
            other => Err(format!("unknown trip status '{}'", other)),
        }
    }
}

/// Trip principal - mapea exactamente a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Trip {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub cargo_weight: Option<f64>,
    pub estimated_fuel_cost: Option<String>,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
}

/// Viaje aún no persistido
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub cargo_weight: Option<f64>,
    pub estimated_fuel_cost: Option<String>,
    pub status: TripStatus,
}

/// Viaje con el nombre del vehículo, para el tablero del despachador
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TripListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub trip: Trip,
    pub vehicle_name: Option<String>,
}

/// Fila resumida de los viajes recientes del dashboard
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecentTrip {
    pub id: Uuid,
    pub vehicle: Option<String>,
    pub driver: Option<String>,
    pub status: TripStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!TripStatus::Draft.is_terminal());
        assert!(!TripStatus::OnTrip.is_terminal());
        assert!(TripStatus::Completed.is_terminal());
        assert!(TripStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(" On Trip ".parse::<TripStatus>().unwrap(), TripStatus::OnTrip);
        assert_eq!("Cancelled".parse::<TripStatus>().unwrap(), TripStatus::Cancelled);
        assert!("Dispatched".parse::<TripStatus>().is_err());
        assert!("on trip".parse::<TripStatus>().is_err());
    }
}

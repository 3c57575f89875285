//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su estado de disponibilidad.
//! Mapea exactamente a la tabla `vehicles`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use uuid::Uuid;

/// Estado del vehículo tal como se guarda en la columna `status`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "varchar")]
pub enum VehicleStatus {
    #[serde(rename = "Available")]
    #[sqlx(rename = "Available")]
    Available,
    #[serde(rename = "On Trip")]
    #[sqlx(rename = "On Trip")]
    OnTrip,
    #[serde(rename = "In Shop")]
    #[sqlx(rename = "In Shop")]
    InShop,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::OnTrip => "On Trip",
            VehicleStatus::InShop => "In Shop",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub license_plate: String,
    pub max_capacity: Option<f64>,
    pub odometer: Option<f64>,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&VehicleStatus::OnTrip).unwrap(), "\"On Trip\"");
        assert_eq!(
            serde_json::from_str::<VehicleStatus>("\"In Shop\"").unwrap(),
            VehicleStatus::InShop
        );
        assert_eq!(VehicleStatus::OnTrip.to_string(), "On Trip");
    }
}

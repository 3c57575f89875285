//! Modelo de Driver
//!
//! Conductores, su estado operativo y las métricas derivadas
//! (`completion_rate`, `trips`, `safety_score`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::{fmt, str::FromStr};
use uuid::Uuid;

pub const DEFAULT_COMPLETION_RATE: i32 = 80;
pub const DEFAULT_SAFETY_SCORE: i32 = 80;
pub const MAX_SCORE: i32 = 100;
const COMPLAINT_PENALTY: i32 = 5;

/// Estado del conductor - columna `status`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "varchar")]
pub enum DriverStatus {
    #[serde(rename = "On Duty")]
    #[sqlx(rename = "On Duty")]
    OnDuty,
    #[serde(rename = "Off Duty")]
    #[sqlx(rename = "Off Duty")]
    OffDuty,
    #[serde(rename = "On Trip")]
    #[sqlx(rename = "On Trip")]
    OnTrip,
    #[serde(rename = "Suspended")]
    #[sqlx(rename = "Suspended")]
    Suspended,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::OnDuty => "On Duty",
            DriverStatus::OffDuty => "Off Duty",
            DriverStatus::OnTrip => "On Trip",
            DriverStatus::Suspended => "Suspended",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "On Duty" => Ok(DriverStatus::OnDuty),
            "Off Duty" => Ok(DriverStatus::OffDuty),
            "On Trip" => Ok(DriverStatus::OnTrip),
            "Suspended" => Ok(DriverStatus::Suspended),
            other => Err(format!("unknown driver status '{}'", other)),
        }
    }
}

/// Driver principal - mapea exactamente a la tabla drivers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub license_no: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub status: DriverStatus,
    pub completion_rate: i32,
    pub safety_score: i32,
    pub complaints: i32,
    pub trips: i32,
    pub created_at: DateTime<Utc>,
}

impl Driver {
    /// Registrar un viaje completado: +1 viaje y +1 de tasa de finalización (máx. 100)
    pub fn record_completed_trip(&mut self) {
        self.trips += 1;
        self.completion_rate = (self.completion_rate + 1).min(MAX_SCORE);
    }
}

/// Puntuación de seguridad: tasa de finalización menos 5 por queja, acotada a 0..=100
pub fn safety_score(completion_rate: i32, complaints: i32) -> i32 {
    completion_rate
        .saturating_sub(complaints.saturating_mul(COMPLAINT_PENALTY))
        .clamp(0, MAX_SCORE)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_driver(completion_rate: i32) -> Driver {
        Driver {
            id: Uuid::new_v4(),
            name: "Ravi Kumar".to_string(),
            license_no: Some("DL-0420110012345".to_string()),
            expiry_date: None,
            status: DriverStatus::OnDuty,
            completion_rate,
            safety_score: DEFAULT_SAFETY_SCORE,
            complaints: 0,
            trips: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_record_completed_trip_clamps_at_100() {
        let mut driver = sample_driver(99);
        driver.record_completed_trip();
        assert_eq!(driver.completion_rate, 100);
        assert_eq!(driver.trips, 1);

        driver.record_completed_trip();
        assert_eq!(driver.completion_rate, 100);
        assert_eq!(driver.trips, 2);
    }

    #[test]
    fn test_safety_score() {
        assert_eq!(safety_score(80, 0), 80);
        assert_eq!(safety_score(80, 3), 65);
        assert_eq!(safety_score(10, 5), 0);
        assert_eq!(safety_score(150, 0), 100);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            DriverStatus::OnDuty,
            DriverStatus::OffDuty,
            DriverStatus::OnTrip,
            DriverStatus::Suspended,
        ] {
            assert_eq!(status.as_str().parse::<DriverStatus>().unwrap(), status);
        }
        assert!("Available".parse::<DriverStatus>().is_err());
    }
}

use serde::Deserialize;
use validator::Validate;

use super::{optional_number, optional_text, parse_status, required_uuid};
use crate::models::trip::{NewTrip, TripStatus};
use crate::utils::errors::AppResult;
use crate::utils::validation::{non_blank, validate_not_empty};

/// Alta de viaje. El formulario del despachador manda camelCase.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    #[serde(alias = "vehicle_id")]
    #[validate(required, custom = "validate_not_empty")]
    pub vehicle_id: Option<String>,
    #[serde(alias = "driver_id")]
    #[validate(required, custom = "validate_not_empty")]
    pub driver_id: Option<String>,
    #[validate(required, custom = "validate_not_empty")]
    pub origin: Option<String>,
    #[validate(required, custom = "validate_not_empty")]
    pub destination: Option<String>,
    #[serde(default, alias = "cargo_weight", deserialize_with = "optional_number")]
    #[validate(range(min = 0.0))]
    pub cargo_weight: Option<f64>,
    #[serde(
        default,
        alias = "estimatedFuelCost",
        alias = "estimated_fuel_cost",
        alias = "fuel_cost",
        deserialize_with = "optional_text"
    )]
    pub fuel_cost: Option<String>,
    /// `Draft` u `On Trip`; ausente equivale a `On Trip`
    pub status: Option<String>,
}

impl CreateTripRequest {
    pub fn into_new_trip(self) -> AppResult<NewTrip> {
        let vehicle_id = required_uuid("vehicleId", self.vehicle_id.as_deref())?;
        let driver_id = required_uuid("driverId", self.driver_id.as_deref())?;
        let status = match non_blank(self.status) {
            Some(raw) => parse_status::<TripStatus>("status", &raw)?,
            None => TripStatus::OnTrip,
        };

        Ok(NewTrip {
            vehicle_id,
            driver_id,
            origin: self.origin.unwrap_or_default().trim().to_string(),
            destination: self.destination.unwrap_or_default().trim().to_string(),
            cargo_weight: self.cargo_weight,
            estimated_fuel_cost: non_blank(self.fuel_cost),
            status,
        })
    }
}

// Request de cambio de estado
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTripStatusRequest {
    #[validate(required, custom = "validate_not_empty")]
    pub status: Option<String>,
}

impl UpdateTripStatusRequest {
    pub fn status(&self) -> AppResult<TripStatus> {
        parse_status("status", self.status.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use uuid::Uuid;

    #[test]
    fn test_camel_case_body() {
        let vehicle_id = Uuid::new_v4();
        let driver_id = Uuid::new_v4();
        let body = format!(
            r#"{{"vehicleId": "{}", "driverId": "{}", "origin": "Pune", "destination": "Mumbai", "cargoWeight": "450", "fuelCost": 3200}}"#,
            vehicle_id, driver_id
        );
        let request: CreateTripRequest = serde_json::from_str(&body).unwrap();
        assert!(request.validate().is_ok());

        let trip = request.into_new_trip().unwrap();
        assert_eq!(trip.vehicle_id, vehicle_id);
        assert_eq!(trip.driver_id, driver_id);
        assert_eq!(trip.cargo_weight, Some(450.0));
        assert_eq!(trip.estimated_fuel_cost.as_deref(), Some("3200"));
        assert_eq!(trip.status, TripStatus::OnTrip);
    }

    #[test]
    fn test_snake_case_body_with_draft() {
        let body = format!(
            r#"{{"vehicle_id": "{}", "driver_id": "{}", "origin": "Pune", "destination": "Nashik", "status": "Draft"}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let request: CreateTripRequest = serde_json::from_str(&body).unwrap();
        let trip = request.into_new_trip().unwrap();
        assert_eq!(trip.status, TripStatus::Draft);
        assert_eq!(trip.estimated_fuel_cost, None);
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let request: CreateTripRequest =
            serde_json::from_str(r#"{"origin": "Pune", "destination": " "}"#).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("vehicle_id"));
        assert!(fields.contains_key("driver_id"));
        assert!(fields.contains_key("destination"));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let body = format!(
            r#"{{"vehicleId": "{}", "driverId": "{}", "origin": "A", "destination": "B", "status": "Dispatched"}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let request: CreateTripRequest = serde_json::from_str(&body).unwrap();
        assert!(matches!(request.into_new_trip(), Err(AppError::Validation(_))));

        let update = UpdateTripStatusRequest {
            status: Some("Finished".to_string()),
        };
        assert!(update.status().is_err());
    }
}

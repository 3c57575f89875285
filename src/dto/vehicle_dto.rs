use serde::Deserialize;
use validator::Validate;

use super::optional_number;
use crate::utils::validation::validate_not_empty;

// Request para registrar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(required, custom = "validate_not_empty")]
    pub name: Option<String>,
    #[validate(required, length(max = 50), custom = "validate_not_empty")]
    pub license_plate: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    #[validate(range(min = 0.0))]
    pub max_capacity: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    #[validate(range(min = 0.0))]
    pub odometer: Option<f64>,
}

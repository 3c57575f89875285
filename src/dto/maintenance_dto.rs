use serde::Deserialize;
use validator::Validate;

use super::{optional_text, required_uuid};
use crate::services::maintenance_service::NewMaintenanceLog;
use crate::utils::errors::AppResult;
use crate::utils::validation::{non_blank, validate_not_empty};

// Request para abrir un registro de taller
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    #[validate(required, custom = "validate_not_empty")]
    pub vehicle_id: Option<String>,
    pub service_type: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub cost: Option<String>,
    pub notes: Option<String>,
}

impl CreateMaintenanceRequest {
    pub fn into_new_log(self) -> AppResult<NewMaintenanceLog> {
        Ok(NewMaintenanceLog {
            vehicle_id: required_uuid("vehicle_id", self.vehicle_id.as_deref())?,
            service_type: non_blank(self.service_type),
            cost: non_blank(self.cost),
            notes: non_blank(self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_vehicle_id_is_required() {
        let request: CreateMaintenanceRequest =
            serde_json::from_str(r#"{"service_type": "Oil Change", "cost": "5000"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_numeric_cost_is_kept_as_text() {
        let vehicle_id = Uuid::new_v4();
        let body = format!(r#"{{"vehicle_id": "{}", "cost": 5000, "notes": ""}}"#, vehicle_id);
        let request: CreateMaintenanceRequest = serde_json::from_str(&body).unwrap();
        assert!(request.validate().is_ok());

        let log = request.into_new_log().unwrap();
        assert_eq!(log.vehicle_id, vehicle_id);
        assert_eq!(log.cost.as_deref(), Some("5000"));
        assert_eq!(log.service_type, None);
        assert_eq!(log.notes, None);
    }
}

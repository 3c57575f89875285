use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{non_blank, validate_date, validate_not_empty};

// Request para dar de alta un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(required, custom = "validate_not_empty")]
    pub name: Option<String>,
    pub license_no: Option<String>,
    /// `YYYY-MM-DD`; vacío equivale a sin caducidad
    pub expiry_date: Option<String>,
}

impl CreateDriverRequest {
    pub fn expiry(&self) -> AppResult<Option<NaiveDate>> {
        match non_blank(self.expiry_date.clone()) {
            None => Ok(None),
            Some(raw) => validate_date(&raw).map(Some).map_err(|e| {
                let mut errors = ValidationErrors::new();
                errors.add("expiry_date", e);
                AppError::Validation(errors)
            }),
        }
    }
}

// Request para el cambio manual de estado
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverStatusRequest {
    #[validate(required, custom = "validate_not_empty")]
    pub status: Option<String>,
}

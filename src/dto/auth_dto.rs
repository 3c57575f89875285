use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::UserResponse;
use crate::utils::validation::validate_not_empty;

// Register request, en camelCase como lo envía el formulario
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(alias = "first_name")]
    pub first_name: Option<String>,
    #[serde(alias = "last_name")]
    pub last_name: Option<String>,
    #[validate(required, length(max = 100), custom = "validate_not_empty")]
    pub username: Option<String>,
    #[validate(required, length(max = 255), email)]
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    #[validate(required, custom = "validate_not_empty")]
    pub password: Option<String>,
}

// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, custom = "validate_not_empty")]
    pub username: Option<String>,
    #[validate(required, custom = "validate_not_empty")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub expires_in: u64,
    pub user: UserResponse,
}

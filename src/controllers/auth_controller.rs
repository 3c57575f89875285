//! Registro e inicio de sesión de los operadores del panel

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::models::user::UserResponse;
use crate::repositories::user_repository::{NewUser, UserRepository};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::non_blank;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub struct AuthController {
    repository: UserRepository,
    jwt: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        request.validate()?;

        let username = request.username.unwrap_or_default().trim().to_string();
        let email = request.email.unwrap_or_default().trim().to_string();

        if self.repository.username_or_email_exists(&username, &email).await? {
            return Err(AppError::Conflict("Username or email already exists".to_string()));
        }

        let password_hash = hash_password(request.password.unwrap_or_default()).await?;

        let user = self
            .repository
            .create(NewUser {
                first_name: non_blank(request.first_name),
                last_name: non_blank(request.last_name),
                username,
                email,
                mobile: non_blank(request.mobile),
                address: non_blank(request.address),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(RegisterResponse {
            message: "Registration successful".to_string(),
            user: user.into(),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let username = request.username.unwrap_or_default();
        let password = request.password.unwrap_or_default();

        let Some(user) = self.repository.find_by_username(username.trim()).await? else {
            warn!(username = %username, "Login attempt for unknown user");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = generate_token(user.id, &user.username, &self.jwt)?;

        info!(user_id = %user.id, "User logged in");
        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
            expires_in: self.jwt.expiration,
            user: user.into(),
        })
    }

    /// Usuario identificado por el token de la petición
    pub async fn current_user(&self, user_id: Uuid) -> AppResult<UserResponse> {
        self.repository
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::Unauthorized("User no longer exists".to_string()))
    }
}

// bcrypt es costoso en CPU, fuera del runtime async
async fn hash_password(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| AppError::Hash(e.to_string()))
}

async fn verify_password(password: String, password_hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || verify(password, &password_hash))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| AppError::Hash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_password() {
        let hashed = hash_password("s3cret".to_string()).await.unwrap();
        assert_ne!(hashed, "s3cret");
        assert!(verify_password("s3cret".to_string(), hashed.clone()).await.unwrap());
        assert!(!verify_password("wrong".to_string(), hashed).await.unwrap());
    }
}

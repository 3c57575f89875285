use crate::models::driver::{
    Driver, DriverStatus, DEFAULT_COMPLETION_RATE, DEFAULT_SAFETY_SCORE,
};
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::{Executor, PgConnection, PgPool, Postgres};
use uuid::Uuid;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn create(
        &self,
        name: String,
        license_no: Option<String>,
        expiry_date: Option<NaiveDate>,
    ) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (id, name, license_no, expiry_date, status, completion_rate, safety_score, complaints, trips)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 0, 0)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(license_no)
        .bind(expiry_date)
        .bind(DriverStatus::OnDuty)
        .bind(DEFAULT_COMPLETION_RATE)
        .bind(DEFAULT_SAFETY_SCORE)
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn list_all(&self) -> Result<Vec<Driver>, AppError> {
        let drivers =
            sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(drivers)
    }

    /// Conductores despachables: no están en viaje y la licencia no ha caducado
    pub async fn list_available(&self) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(
            r#"
            SELECT * FROM drivers
            WHERE status <> $1
              AND (expiry_date IS NULL OR expiry_date >= CURRENT_DATE)
            ORDER BY name ASC
            "#,
        )
        .bind(DriverStatus::OnTrip)
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM drivers")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    pub async fn set_status(
        &self,
        id: Uuid,
        status: DriverStatus,
    ) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            "UPDATE drivers SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(driver)
    }

    /// Leer y bloquear la fila dentro de una transacción
    pub async fn lock(conn: &mut PgConnection, id: Uuid) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(driver)
    }

    /// Bloquear todas las filas, para el recálculo masivo
    pub async fn lock_all(conn: &mut PgConnection) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(
            "SELECT * FROM drivers ORDER BY created_at DESC FOR UPDATE",
        )
        .fetch_all(conn)
        .await?;

        Ok(drivers)
    }

    /// Persistir estado y contadores tras una cascada de viaje
    pub async fn save_trip_state<'e, E>(executor: E, driver: &Driver) -> Result<Driver, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let saved = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET status = $2, trips = $3, completion_rate = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(driver.id)
        .bind(driver.status)
        .bind(driver.trips)
        .bind(driver.completion_rate)
        .fetch_one(executor)
        .await?;

        Ok(saved)
    }

    pub async fn update_safety_score<'e, E>(
        executor: E,
        id: Uuid,
        safety_score: i32,
    ) -> Result<Driver, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let driver = sqlx::query_as::<_, Driver>(
            "UPDATE drivers SET safety_score = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(safety_score)
        .fetch_one(executor)
        .await?;

        Ok(driver)
    }
}

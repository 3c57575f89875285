use crate::models::maintenance::{MaintenanceListItem, MaintenanceLog, MaintenanceStatus};
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert<'e, E>(
        executor: E,
        vehicle_id: Uuid,
        service_type: &str,
        cost: Option<&str>,
        notes: Option<&str>,
    ) -> Result<MaintenanceLog, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let log = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            INSERT INTO maintenance (id, vehicle_id, issue, service_type, cost, notes, service_date, status)
            VALUES ($1, $2, $3, $3, $4, $5, CURRENT_DATE, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(service_type)
        .bind(cost)
        .bind(notes)
        .bind(MaintenanceStatus::InProgress)
        .fetch_one(executor)
        .await?;

        Ok(log)
    }

    /// Registros con nombre y matrícula del vehículo, más recientes primero
    pub async fn list_with_vehicle(&self) -> Result<Vec<MaintenanceListItem>, AppError> {
        let logs = sqlx::query_as::<_, MaintenanceListItem>(
            r#"
            SELECT maintenance.*, vehicles.name AS vehicle_name, vehicles.license_plate
            FROM maintenance
            LEFT JOIN vehicles ON maintenance.vehicle_id = vehicles.id
            ORDER BY maintenance.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    /// Costes en texto libre de los registros creados desde `since`
    pub async fn costs_since(&self, since: Option<NaiveDate>) -> Result<Vec<Option<String>>, AppError> {
        let rows: Vec<(Option<String>,)> = sqlx::query_as(
            "SELECT cost FROM maintenance WHERE ($1::date IS NULL OR created_at >= $1::date)",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(cost,)| cost).collect())
    }

    pub async fn mark_completed<'e, E>(
        executor: E,
        id: Uuid,
    ) -> Result<Option<MaintenanceLog>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let log = sqlx::query_as::<_, MaintenanceLog>(
            "UPDATE maintenance SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(MaintenanceStatus::Completed)
        .fetch_optional(executor)
        .await?;

        Ok(log)
    }
}

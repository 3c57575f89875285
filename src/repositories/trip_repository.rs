use crate::models::trip::{NewTrip, RecentTrip, Trip, TripListItem, TripStatus};
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::{Executor, PgConnection, PgPool, Postgres};
use uuid::Uuid;

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert<'e, E>(executor: E, trip: &NewTrip) -> Result<Trip, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (id, vehicle_id, driver_id, origin, destination, cargo_weight, estimated_fuel_cost, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(trip.vehicle_id)
        .bind(trip.driver_id)
        .bind(&trip.origin)
        .bind(&trip.destination)
        .bind(trip.cargo_weight)
        .bind(&trip.estimated_fuel_cost)
        .bind(trip.status)
        .fetch_one(executor)
        .await?;

        Ok(trip)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM trips WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    /// Viajes con el nombre del vehículo, más recientes primero
    pub async fn list_with_vehicle(&self) -> Result<Vec<TripListItem>, AppError> {
        let trips = sqlx::query_as::<_, TripListItem>(
            r#"
            SELECT trips.*, vehicles.name AS vehicle_name
            FROM trips
            LEFT JOIN vehicles ON trips.vehicle_id = vehicles.id
            ORDER BY trips.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    pub async fn recent(&self, limit: i64) -> Result<Vec<RecentTrip>, AppError> {
        let trips = sqlx::query_as::<_, RecentTrip>(
            r#"
            SELECT trips.id, vehicles.name AS vehicle, drivers.name AS driver, trips.status
            FROM trips
            LEFT JOIN vehicles ON trips.vehicle_id = vehicles.id
            LEFT JOIN drivers ON trips.driver_id = drivers.id
            ORDER BY trips.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    /// Contar viajes creados desde `since`, opcionalmente filtrando por estado
    pub async fn count(
        &self,
        since: Option<NaiveDate>,
        status: Option<TripStatus>,
    ) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM trips
            WHERE ($1::date IS NULL OR created_at >= $1::date)
              AND ($2::varchar IS NULL OR status = $2)
            "#,
        )
        .bind(since)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Leer y bloquear la fila dentro de una transacción
    pub async fn lock(conn: &mut PgConnection, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(trip)
    }

    pub async fn update_status<'e, E>(
        executor: E,
        id: Uuid,
        status: TripStatus,
    ) -> Result<Trip, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let trip =
            sqlx::query_as::<_, Trip>("UPDATE trips SET status = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(status)
                .fetch_one(executor)
                .await?;

        Ok(trip)
    }
}

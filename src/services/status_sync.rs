//! Sincronización de estados entre viajes, vehículos y conductores
//!
//! Cada alta o cambio de estado de un viaje propaga su efecto al vehículo y al
//! conductor referenciados. La regla de propagación ([`Cascade`]) es pura; el
//! [`StatusSynchronizer`] la aplica dentro de una única transacción con las
//! filas bloqueadas, de modo que dos finalizaciones concurrentes del mismo
//! conductor se serializan y ningún incremento se pierde.

use sqlx::{PgConnection, PgPool};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::driver::{Driver, DriverStatus};
use crate::models::trip::{NewTrip, Trip, TripStatus};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, validation_error, AppResult};

/// Efecto de un estado de viaje sobre su vehículo y su conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cascade {
    pub vehicle_status: Option<VehicleStatus>,
    pub driver_status: Option<DriverStatus>,
    pub records_completion: bool,
}

impl Cascade {
    pub const NONE: Cascade = Cascade {
        vehicle_status: None,
        driver_status: None,
        records_completion: false,
    };

    pub fn for_status(status: TripStatus) -> Self {
        match status {
            TripStatus::Draft => Cascade::NONE,
            TripStatus::OnTrip => Cascade {
                vehicle_status: Some(VehicleStatus::OnTrip),
                driver_status: Some(DriverStatus::OnTrip),
                records_completion: false,
            },
            TripStatus::Completed => Cascade {
                vehicle_status: Some(VehicleStatus::Available),
                driver_status: Some(DriverStatus::OnDuty),
                records_completion: true,
            },
            TripStatus::Cancelled => Cascade {
                vehicle_status: Some(VehicleStatus::Available),
                driver_status: Some(DriverStatus::OnDuty),
                records_completion: false,
            },
        }
    }

    pub fn is_noop(&self) -> bool {
        *self == Cascade::NONE
    }

    pub fn apply(&self, vehicle: &mut Vehicle, driver: &mut Driver) {
        if let Some(status) = self.vehicle_status {
            vehicle.status = status;
        }
        if let Some(status) = self.driver_status {
            driver.status = status;
        }
        if self.records_completion {
            driver.record_completed_trip();
        }
    }
}

/// Un viaje solo puede nacer como borrador o despachado
pub fn validate_initial_status(status: TripStatus) -> AppResult<TripStatus> {
    match status {
        TripStatus::Draft | TripStatus::OnTrip => Ok(status),
        other => Err(validation_error(
            "status",
            &format!("a trip cannot be created as '{}'", other),
        )),
    }
}

pub struct StatusSynchronizer {
    pool: PgPool,
}

impl StatusSynchronizer {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear un viaje y, si sale despachado, ocupar vehículo y conductor
    pub async fn create_trip(&self, new_trip: NewTrip) -> AppResult<Trip> {
        let status = validate_initial_status(new_trip.status)?;

        let mut tx = self.pool.begin().await?;

        let (mut vehicle, mut driver) =
            lock_assignment(&mut tx, new_trip.vehicle_id, new_trip.driver_id).await?;

        let trip = TripRepository::insert(&mut *tx, &new_trip).await?;

        let cascade = Cascade::for_status(status);
        if !cascade.is_noop() {
            cascade.apply(&mut vehicle, &mut driver);
            persist(&mut tx, &vehicle, &driver).await?;
        }

        tx.commit().await?;

        info!(
            trip_id = %trip.id,
            vehicle_id = %vehicle.id,
            driver_id = %driver.id,
            status = %trip.status,
            "Trip created"
        );
        Ok(trip)
    }

    /// Cambiar el estado de un viaje y propagarlo.
    ///
    /// No se valida la transición: cualquier estado es aceptado y se aplica su
    /// cascada, también desde estados finales.
    pub async fn set_trip_status(&self, trip_id: Uuid, new_status: TripStatus) -> AppResult<Trip> {
        let mut tx = self.pool.begin().await?;

        let current = TripRepository::lock(&mut tx, trip_id)
            .await?
            .ok_or_else(|| not_found_error("Trip", &trip_id.to_string()))?;

        if current.status.is_terminal() && current.status != new_status {
            warn!(
                trip_id = %trip_id,
                from = %current.status,
                to = %new_status,
                "Trip leaves a terminal state"
            );
        }

        let trip = TripRepository::update_status(&mut *tx, trip_id, new_status).await?;

        let cascade = Cascade::for_status(new_status);
        if !cascade.is_noop() {
            let (mut vehicle, mut driver) =
                lock_assignment(&mut tx, trip.vehicle_id, trip.driver_id).await?;
            cascade.apply(&mut vehicle, &mut driver);
            persist(&mut tx, &vehicle, &driver).await?;

            info!(
                trip_id = %trip_id,
                vehicle_status = %vehicle.status,
                driver_status = %driver.status,
                driver_trips = driver.trips,
                completion_rate = driver.completion_rate,
                "Trip cascade applied"
            );
        }

        tx.commit().await?;
        Ok(trip)
    }
}

/// Bloquear vehículo y conductor, siempre en ese orden
async fn lock_assignment(
    conn: &mut PgConnection,
    vehicle_id: Uuid,
    driver_id: Uuid,
) -> AppResult<(Vehicle, Driver)> {
    let vehicle = VehicleRepository::lock(&mut *conn, vehicle_id)
        .await?
        .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;
    let driver = DriverRepository::lock(&mut *conn, driver_id)
        .await?
        .ok_or_else(|| not_found_error("Driver", &driver_id.to_string()))?;
    Ok((vehicle, driver))
}

async fn persist(conn: &mut PgConnection, vehicle: &Vehicle, driver: &Driver) -> AppResult<()> {
    VehicleRepository::update_status(&mut *conn, vehicle.id, vehicle.status).await?;
    DriverRepository::save_trip_state(&mut *conn, driver).await?;
    Ok(())
}

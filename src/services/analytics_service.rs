//! Capa de agregación
//!
//! Resumen financiero por periodo y contadores del dashboard. Los datos se
//! leen con consultas independientes en paralelo y se agregan en memoria.

use chrono::{Months, NaiveDate, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

use crate::models::analytics::{
    AnalyticsPeriod, AnalyticsSummary, DashboardStats, DashboardSummary, RawFinancials,
};
use crate::models::trip::TripStatus;
use crate::models::vehicle::VehicleStatus;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::currency::{format_inr, parse_money, parse_optional_money};
use crate::utils::errors::AppResult;

/// Ingreso fijo por viaje completado, en rupias
pub const REVENUE_PER_COMPLETED_TRIP: i64 = 40_000;

const RECENT_TRIPS_LIMIT: i64 = 5;

/// Fecha de corte del periodo; `None` para `all`
pub fn period_cutoff(period: AnalyticsPeriod, today: NaiveDate) -> Option<NaiveDate> {
    period
        .months()
        .and_then(|months| today.checked_sub_months(Months::new(months)))
}

/// Filas ya leídas de la base de datos para un periodo
#[derive(Debug, Clone, Default)]
pub struct AnalyticsInput {
    pub expenses: Vec<(String, String)>,
    pub maintenance_costs: Vec<Option<String>>,
    pub total_trips: i64,
    pub completed_trips: i64,
    pub total_vehicles: i64,
    pub total_drivers: i64,
}

/// Porcentaje entero redondeado (mitades hacia arriba); 0 sin viajes
pub fn completion_percentage(completed: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (completed * 200 + total) / (total * 2)
}

/// Totales del periodo. Las sumas saturan en `Decimal::MAX`, así un importe
/// desorbitado en el libro de gastos no tumba el informe.
pub fn compute_analytics(period: AnalyticsPeriod, input: &AnalyticsInput) -> AnalyticsSummary {
    let (total_fuel, total_misc) = input.expenses.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(fuel, misc), (fuel_cost, misc_expense)| {
            (
                fuel.saturating_add(parse_money(fuel_cost)),
                misc.saturating_add(parse_money(misc_expense)),
            )
        },
    );
    let total_maintenance = input
        .maintenance_costs
        .iter()
        .map(|cost| parse_optional_money(cost.as_deref()))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let revenue = Decimal::from(input.completed_trips.saturating_mul(REVENUE_PER_COMPLETED_TRIP));
    let total_expenses = total_fuel
        .saturating_add(total_misc)
        .saturating_add(total_maintenance);
    let net_profit = revenue.saturating_sub(total_expenses);

    let as_f64 = |value: Decimal| value.to_f64().unwrap_or(0.0);

    AnalyticsSummary {
        period: period.to_string(),
        revenue: format_inr(revenue),
        fuel_cost: format_inr(total_fuel),
        misc_expenses: format_inr(total_misc),
        maintenance: format_inr(total_maintenance),
        total_expenses: format_inr(total_expenses),
        net_profit: format_inr(net_profit),
        total_trips: input.total_trips,
        completed_trips: input.completed_trips,
        completion_rate: completion_percentage(input.completed_trips, input.total_trips),
        total_vehicles: input.total_vehicles,
        total_drivers: input.total_drivers,
        raw: RawFinancials {
            revenue: as_f64(revenue),
            fuel_cost: as_f64(total_fuel),
            misc_expenses: as_f64(total_misc),
            maintenance: as_f64(total_maintenance),
            total_expenses: as_f64(total_expenses),
            net_profit: as_f64(net_profit),
        },
    }
}

pub struct AnalyticsService {
    vehicles: VehicleRepository,
    drivers: DriverRepository,
    trips: TripRepository,
    maintenance: MaintenanceRepository,
    expenses: ExpenseRepository,
}

impl AnalyticsService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            trips: TripRepository::new(pool.clone()),
            maintenance: MaintenanceRepository::new(pool.clone()),
            expenses: ExpenseRepository::new(pool),
        }
    }

    pub async fn analytics(&self, period: AnalyticsPeriod) -> AppResult<AnalyticsSummary> {
        let cutoff = period_cutoff(period, Utc::now().date_naive());
        debug!(period = %period, cutoff = ?cutoff, "Computing analytics");

        let (expenses, maintenance_costs, total_trips, completed_trips, total_vehicles, total_drivers) =
            tokio::try_join!(
                self.expenses.amounts_since(cutoff),
                self.maintenance.costs_since(cutoff),
                self.trips.count(cutoff, None),
                self.trips.count(cutoff, Some(TripStatus::Completed)),
                self.vehicles.count(),
                self.drivers.count(),
            )?;

        let input = AnalyticsInput {
            expenses,
            maintenance_costs,
            total_trips,
            completed_trips,
            total_vehicles,
            total_drivers,
        };
        Ok(compute_analytics(period, &input))
    }

    pub async fn dashboard(&self) -> AppResult<DashboardSummary> {
        let (active_fleet, maintenance_alert, pending_cargo, recent_trips) = tokio::try_join!(
            self.vehicles.count_by_status(VehicleStatus::OnTrip),
            self.vehicles.count_by_status(VehicleStatus::InShop),
            self.trips.count(None, Some(TripStatus::Draft)),
            self.trips.recent(RECENT_TRIPS_LIMIT),
        )?;

        Ok(DashboardSummary {
            active_fleet,
            maintenance_alert,
            pending_cargo,
            recent_trips,
        })
    }

    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let (total_vehicles, total_drivers, total_trips, completed_trips) = tokio::try_join!(
            self.vehicles.count(),
            self.drivers.count(),
            self.trips.count(None, None),
            self.trips.count(None, Some(TripStatus::Completed)),
        )?;

        Ok(DashboardStats {
            total_vehicles,
            total_drivers,
            total_trips,
            completed_trips,
        })
    }
}

//! Modelos de Analytics
//!
//! Este módulo contiene los modelos para el resumen financiero por periodo
//! y los contadores del dashboard.

use serde::Serialize;
use std::{fmt, str::FromStr};

use super::trip::RecentTrip;

/// Ventana de tiempo del análisis financiero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsPeriod {
    OneMonth,
    ThreeMonths,
    OneYear,
    FiveYears,
    TenYears,
    #[default]
    All,
}

impl AnalyticsPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsPeriod::OneMonth => "1m",
            AnalyticsPeriod::ThreeMonths => "3m",
            AnalyticsPeriod::OneYear => "1y",
            AnalyticsPeriod::FiveYears => "5y",
            AnalyticsPeriod::TenYears => "10y",
            AnalyticsPeriod::All => "all",
        }
    }

    /// Duración de la ventana en meses; `None` para `all`
    pub fn months(&self) -> Option<u32> {
        match self {
            AnalyticsPeriod::OneMonth => Some(1),
            AnalyticsPeriod::ThreeMonths => Some(3),
            AnalyticsPeriod::OneYear => Some(12),
            AnalyticsPeriod::FiveYears => Some(60),
            AnalyticsPeriod::TenYears => Some(120),
            AnalyticsPeriod::All => None,
        }
    }
}

impl fmt::Display for AnalyticsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1m" => Ok(AnalyticsPeriod::OneMonth),
            "3m" => Ok(AnalyticsPeriod::ThreeMonths),
            "1y" => Ok(AnalyticsPeriod::OneYear),
            "5y" => Ok(AnalyticsPeriod::FiveYears),
            "10y" => Ok(AnalyticsPeriod::TenYears),
            "all" | "" => Ok(AnalyticsPeriod::All),
            other => Err(format!("unknown analytics period '{}'", other)),
        }
    }
}

/// Cifras numéricas para los gráficos
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFinancials {
    pub revenue: f64,
    pub fuel_cost: f64,
    pub misc_expenses: f64,
    pub maintenance: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
}

/// Resumen financiero y operativo de un periodo
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub period: String,
    pub revenue: String,
    pub fuel_cost: String,
    pub misc_expenses: String,
    pub maintenance: String,
    pub total_expenses: String,
    pub net_profit: String,
    pub total_trips: i64,
    pub completed_trips: i64,
    pub completion_rate: i64,
    pub total_vehicles: i64,
    pub total_drivers: i64,
    pub raw: RawFinancials,
}

/// Resumen para el dashboard principal
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub active_fleet: i64,
    pub maintenance_alert: i64,
    pub pending_cargo: i64,
    pub recent_trips: Vec<RecentTrip>,
}

/// Contadores globales para la banda de estadísticas
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_vehicles: i64,
    pub total_drivers: i64,
    pub total_trips: i64,
    pub completed_trips: i64,
}

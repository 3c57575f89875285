//! Modelo de Expense
//!
//! Libro de gastos. Las filas no se modifican una vez insertadas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const DEFAULT_EXPENSE_STATUS: &str = "Recorded";

/// Expense principal - mapea exactamente a la tabla expenses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub trip_id: Option<Uuid>,
    pub driver_name: String,
    pub fuel_cost: String,
    pub misc_expense: String,
    pub distance: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Gasto aún no persistido
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub trip_id: Option<Uuid>,
    pub driver_name: String,
    pub fuel_cost: String,
    pub misc_expense: String,
    pub distance: String,
    pub status: String,
}

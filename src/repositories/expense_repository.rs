use crate::models::expense::{Expense, NewExpense};
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, expense: &NewExpense) -> Result<Expense, AppError> {
        Self::insert(&self.pool, expense).await
    }

    pub async fn insert<'e, E>(executor: E, expense: &NewExpense) -> Result<Expense, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (id, trip_id, driver_name, fuel_cost, misc_expense, distance, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(expense.trip_id)
        .bind(&expense.driver_name)
        .bind(&expense.fuel_cost)
        .bind(&expense.misc_expense)
        .bind(&expense.distance)
        .bind(&expense.status)
        .fetch_one(executor)
        .await?;

        Ok(expense)
    }

    pub async fn list_all(&self) -> Result<Vec<Expense>, AppError> {
        let expenses =
            sqlx::query_as::<_, Expense>("SELECT * FROM expenses ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(expenses)
    }

    /// Pares (combustible, varios) en texto libre de los gastos creados desde `since`
    pub async fn amounts_since(
        &self,
        since: Option<NaiveDate>,
    ) -> Result<Vec<(String, String)>, AppError> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT fuel_cost, misc_expense FROM expenses WHERE ($1::date IS NULL OR created_at >= $1::date)",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

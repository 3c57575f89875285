use crate::dto::expense_dto::CreateExpenseRequest;
use crate::models::expense::Expense;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

pub struct ExpenseController {
    repository: ExpenseRepository,
    trips: TripRepository,
}

impl ExpenseController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ExpenseRepository::new(pool.clone()),
            trips: TripRepository::new(pool),
        }
    }

    /// Registrar un gasto; el viaje referenciado, si lo hay, debe existir
    pub async fn create(&self, request: CreateExpenseRequest) -> Result<Expense, AppError> {
        let expense = request.into_new_expense()?;

        if let Some(trip_id) = expense.trip_id {
            if !self.trips.exists(trip_id).await? {
                return Err(not_found_error("Trip", &trip_id.to_string()));
            }
        }

        self.repository.create(&expense).await
    }

    pub async fn list(&self) -> Result<Vec<Expense>, AppError> {
        self.repository.list_all().await
    }
}

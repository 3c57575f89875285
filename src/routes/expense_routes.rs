use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::expense_controller::ExpenseController;
use crate::dto::expense_dto::CreateExpenseRequest;
use crate::models::expense::Expense;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_expense_router() -> Router<AppState> {
    Router::new().route("/", get(list_expenses).post(create_expense))
}

async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<Json<Expense>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_expenses(State(state): State<AppState>) -> Result<Json<Vec<Expense>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

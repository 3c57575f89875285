use serde::Deserialize;

use super::{optional_text, required_uuid};
use crate::models::expense::{NewExpense, DEFAULT_EXPENSE_STATUS};
use crate::utils::errors::AppResult;
use crate::utils::validation::non_blank;

/// Alta manual en el libro de gastos; todos los campos son opcionales
#[derive(Debug, Default, Deserialize)]
pub struct CreateExpenseRequest {
    pub trip_id: Option<String>,
    pub driver_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub fuel_cost: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub misc_expense: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub distance: Option<String>,
    pub status: Option<String>,
}

impl CreateExpenseRequest {
    pub fn into_new_expense(self) -> AppResult<NewExpense> {
        let trip_id = match non_blank(self.trip_id) {
            Some(raw) => Some(required_uuid("trip_id", Some(raw.as_str()))?),
            None => None,
        };

        Ok(NewExpense {
            trip_id,
            driver_name: self.driver_name.unwrap_or_default(),
            fuel_cost: non_blank(self.fuel_cost).unwrap_or_else(|| "0".to_string()),
            misc_expense: non_blank(self.misc_expense).unwrap_or_else(|| "0".to_string()),
            distance: self.distance.unwrap_or_default(),
            status: non_blank(self.status).unwrap_or_else(|| DEFAULT_EXPENSE_STATUS.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    #[test]
    fn test_defaults_for_empty_body() {
        let expense = CreateExpenseRequest::default().into_new_expense().unwrap();
        assert_eq!(expense.trip_id, None);
        assert_eq!(expense.driver_name, "");
        assert_eq!(expense.fuel_cost, "0");
        assert_eq!(expense.misc_expense, "0");
        assert_eq!(expense.distance, "");
        assert_eq!(expense.status, "Recorded");
    }

    #[test]
    fn test_free_text_amounts() {
        let request: CreateExpenseRequest = serde_json::from_str(
            r#"{"trip_id": "", "driver_name": "Ravi", "fuel_cost": "19k", "misc_expense": 350, "distance": "420 km"}"#,
        )
        .unwrap();
        let expense = request.into_new_expense().unwrap();
        assert_eq!(expense.trip_id, None);
        assert_eq!(expense.fuel_cost, "19k");
        assert_eq!(expense.misc_expense, "350");
        assert_eq!(expense.distance, "420 km");
    }

    #[test]
    fn test_malformed_trip_id() {
        let request = CreateExpenseRequest {
            trip_id: Some("7".to_string()),
            ..Default::default()
        };
        assert!(matches!(request.into_new_expense(), Err(AppError::Validation(_))));
    }
}

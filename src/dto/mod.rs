//! DTOs de la API
//!
//! Cuerpos de petición y respuesta. Los campos opcionales llegan como
//! `Option<T>` y se validan con `validator` antes de tocar la base de datos.

pub mod analytics_dto;
pub mod auth_dto;
pub mod driver_dto;
pub mod expense_dto;
pub mod maintenance_dto;
pub mod trip_dto;
pub mod vehicle_dto;

use serde::{de, Deserialize, Deserializer};
use std::str::FromStr;
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::validation::validate_uuid;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Número que el formulario puede mandar como `500` o como `"500"`
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("'{}' is not a number", s))),
    }
}

/// Importe en texto libre; un número se conserva tal cual como texto
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        None => None,
        Some(NumberOrText::Number(n)) => Some(n.to_string()),
        Some(NumberOrText::Text(s)) => Some(s),
    })
}

fn field_error(field: &'static str, error: ValidationError) -> AppError {
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    AppError::Validation(errors)
}

/// Identificador obligatorio en el cuerpo de la petición
pub(crate) fn required_uuid(field: &'static str, value: Option<&str>) -> AppResult<Uuid> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| validation_error(field, &format!("{} is required", field)))?;
    validate_uuid(value).map_err(|e| field_error(field, e))
}

/// Estado textual convertido a su enum; desconocido es un error de validación
pub(crate) fn parse_status<T>(field: &'static str, value: &str) -> AppResult<T>
where
    T: FromStr<Err = String>,
{
    value.parse::<T>().map_err(|message| validation_error(field, &message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::TripStatus;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "optional_number")]
        weight: Option<f64>,
        #[serde(default, deserialize_with = "optional_text")]
        cost: Option<String>,
    }

    #[test]
    fn test_numbers_accept_text_and_numbers() {
        let p: Payload = serde_json::from_str(r#"{"weight": "500", "cost": 4500}"#).unwrap();
        assert_eq!(p.weight, Some(500.0));
        assert_eq!(p.cost.as_deref(), Some("4500"));

        let p: Payload = serde_json::from_str(r#"{"weight": 12.5, "cost": "19k"}"#).unwrap();
        assert_eq!(p.weight, Some(12.5));
        assert_eq!(p.cost.as_deref(), Some("19k"));

        let p: Payload = serde_json::from_str(r#"{"weight": ""}"#).unwrap();
        assert_eq!(p.weight, None);
        assert_eq!(p.cost, None);

        assert!(serde_json::from_str::<Payload>(r#"{"weight": "heavy"}"#).is_err());
    }

    #[test]
    fn test_required_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(required_uuid("vehicle_id", Some(&id.to_string())).unwrap(), id);
        assert!(matches!(required_uuid("vehicle_id", None), Err(AppError::Validation(_))));
        assert!(matches!(required_uuid("vehicle_id", Some(" ")), Err(AppError::Validation(_))));
        assert!(matches!(required_uuid("vehicle_id", Some("12")), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_parse_status() {
        let status: TripStatus = parse_status("status", "Completed").unwrap();
        assert_eq!(status, TripStatus::Completed);
        assert!(parse_status::<TripStatus>("status", "Dispatched").is_err());
    }
}

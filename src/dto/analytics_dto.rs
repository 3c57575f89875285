use serde::Deserialize;

use crate::models::analytics::AnalyticsPeriod;
use crate::utils::errors::{validation_error, AppResult};

/// Query string de `GET /analytics`
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub period: Option<String>,
}

impl AnalyticsQuery {
    /// Periodo pedido; uno desconocido es un `ValidationError`, no `all`
    pub fn period(&self) -> AppResult<AnalyticsPeriod> {
        match self.period.as_deref() {
            None => Ok(AnalyticsPeriod::All),
            Some(raw) => raw
                .parse()
                .map_err(|message: String| validation_error("period", &message)),
        }
    }
}

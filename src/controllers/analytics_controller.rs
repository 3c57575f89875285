use crate::dto::analytics_dto::AnalyticsQuery;
use crate::models::analytics::{AnalyticsSummary, DashboardStats, DashboardSummary};
use crate::services::analytics_service::AnalyticsService;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct AnalyticsController {
    service: AnalyticsService,
}

impl AnalyticsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: AnalyticsService::new(pool),
        }
    }

    pub async fn analytics(&self, query: AnalyticsQuery) -> Result<AnalyticsSummary, AppError> {
        let period = query.period()?;
        self.service.analytics(period).await
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary, AppError> {
        self.service.dashboard().await
    }

    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        self.service.stats().await
    }
}

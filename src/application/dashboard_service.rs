// Dashboard service - Use case for building the country dashboard
use crate::application::dashboard_builder;
use crate::application::errors::DataSourceError;
use crate::application::series_transformer::transform;
use crate::application::table_source::TableSource;
use crate::domain::dashboard::DashboardSpec;
use crate::domain::series::DailyRateSeries;
use crate::infrastructure::config::DashboardConfig;
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn TableSource>,
    config: DashboardConfig,
}

impl DashboardService {
    pub fn new(source: Arc<dyn TableSource>, config: DashboardConfig) -> Self {
        Self { source, config }
    }

    /// Fetch both tables in turn and assemble the dashboard. The first source
    /// failure aborts the build.
    pub async fn get_dashboard(&self, as_of: NaiveDate) -> Result<DashboardSpec, DataSourceError> {
        let cases = self.daily_rates(&self.config.src_daily_cases).await?;
        let deaths = self.daily_rates(&self.config.src_daily_death).await?;

        tracing::info!("Making plots");
        Ok(dashboard_builder::build(
            cases,
            deaths,
            &self.config.country,
            as_of,
            &self.config.layout,
        ))
    }

    async fn daily_rates(&self, location: &str) -> Result<DailyRateSeries, DataSourceError> {
        let table = self.source.fetch_table(location).await?;
        Ok(transform(&table, &self.config.country))
    }
}

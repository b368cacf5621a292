// Port for fetching raw cumulative tables
use crate::application::errors::DataSourceError;
use crate::domain::table::RawTable;
use async_trait::async_trait;

#[async_trait]
pub trait TableSource: Send + Sync {
    /// Fetch and parse the table addressed by `location`.
    async fn fetch_table(&self, location: &str) -> Result<RawTable, DataSourceError>;
}

// Table source implementation over HTTP(S) and the local filesystem
use crate::application::errors::DataSourceError;
use crate::application::table_source::TableSource;
use crate::domain::table::RawTable;
use crate::infrastructure::csv_table::parse_table;
use async_trait::async_trait;
use tokio::fs;

#[derive(Debug, Clone, Default)]
pub struct CsvTableSource {
    client: reqwest::Client,
}

impl CsvTableSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_text(&self, location: &str) -> Result<String, DataSourceError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            self.fetch_url(location).await
        } else if let Some(path) = location.strip_prefix("file://") {
            read_file(location, path).await
        } else if location.contains("://") {
            Err(DataSourceError::UnsupportedLocation(location.to_string()))
        } else {
            read_file(location, location).await
        }
    }

    async fn fetch_url(&self, url: &str) -> Result<String, DataSourceError> {
        let fetch_error = |source: reqwest::Error| DataSourceError::Fetch {
            location: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(fetch_error)?;

        if !response.status().is_success() {
            return Err(DataSourceError::Status {
                location: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(fetch_error)
    }
}

async fn read_file(location: &str, path: &str) -> Result<String, DataSourceError> {
    fs::read_to_string(path)
        .await
        .map_err(|source| DataSourceError::Read {
            location: location.to_string(),
            source,
        })
}

#[async_trait]
impl TableSource for CsvTableSource {
    async fn fetch_table(&self, location: &str) -> Result<RawTable, DataSourceError> {
        tracing::info!("Reading source table {}", location);
        let text = self.fetch_text(location).await?;
        parse_table(location, &text)
    }
}

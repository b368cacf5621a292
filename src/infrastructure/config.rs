use config::{Config, Source};
use serde::Deserialize;

pub const DEFAULT_COUNTRY: &str = "Russia";
pub const DEFAULT_SRC_DAILY_CASES: &str = "https://data.humdata.org/hxlproxy/api/data-preview.csv?url=https%3A%2F%2Fraw.githubusercontent.com%2FCSSEGISandData%2FCOVID-19%2Fmaster%2Fcsse_covid_19_data%2Fcsse_covid_19_time_series%2Ftime_series_covid19_confirmed_global.csv&filename=time_series_covid19_confirmed_global.csv";
pub const DEFAULT_SRC_DAILY_DEATH: &str = "https://data.humdata.org/hxlproxy/api/data-preview.csv?url=https%3A%2F%2Fraw.githubusercontent.com%2FCSSEGISandData%2FCOVID-19%2Fmaster%2Fcsse_covid_19_data%2Fcsse_covid_19_time_series%2Ftime_series_covid19_deaths_global.csv&filename=time_series_covid19_deaths_global.csv";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Must match the country name used by the source tables exactly.
    pub country: String,
    pub src_daily_cases: String,
    pub src_daily_death: String,
    pub layout: LayoutConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub viewer: ViewerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LayoutConfig {
    pub height: u32,
    pub width: u32,
    pub creator: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub file: String,
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewerConfig {
    pub serve: bool,
    pub bind: String,
}

/// Load `config/dashboard.toml` if present, on top of the built-in defaults.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    build_config(config::File::with_name("config/dashboard").required(false))
}

fn build_config<S>(source: S) -> anyhow::Result<DashboardConfig>
where
    S: Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .set_default("country", DEFAULT_COUNTRY)?
        .set_default("src_daily_cases", DEFAULT_SRC_DAILY_CASES)?
        .set_default("src_daily_death", DEFAULT_SRC_DAILY_DEATH)?
        .set_default("layout.height", 900_i64)?
        .set_default("layout.width", 1500_i64)?
        .set_default("layout.creator", "Mohsin Asif")?
        .set_default("output.path", "covid-dashboard.html")?
        .set_default("logging.file", "covid-dashboard.log")?
        .set_default("logging.level", "debug")?
        .set_default("viewer.serve", false)?
        .set_default("viewer.bind", "127.0.0.1:8080")?
        .add_source(source)
        .build()?;

    Ok(settings.try_deserialize()?)
}

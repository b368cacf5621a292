// Typed failures raised while ingesting a source table
use chrono::NaiveDate;
use thiserror::Error;

/// A source table could not be fetched or is not a well-formed cumulative
/// time-series table. Always fatal for the run.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("unsupported source location '{0}': expected http(s)://, file:// or a path")]
    UnsupportedLocation(String),

    #[error("failed to fetch '{location}': {source}")]
    Fetch {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{location}' responded with status {status}")]
    Status { location: String, status: u16 },

    #[error("failed to read '{location}': {source}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in '{location}': {source}")]
    Csv {
        location: String,
        #[source]
        source: csv::Error,
    },

    #[error("'{location}' has no '{column}' column")]
    MissingColumn {
        location: String,
        column: &'static str,
    },

    #[error("'{location}' has no date columns")]
    NoDateColumns { location: String },

    #[error("'{location}': column header '{header}' is not a date")]
    InvalidDate { location: String, header: String },

    #[error("'{location}': date {date} appears in more than one column")]
    DuplicateDate { location: String, date: NaiveDate },

    #[error("'{location}': row {row}, column '{column}': '{value}' is not a cumulative count")]
    InvalidCount {
        location: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("'{location}': total for '{country}' on {date} does not fit in a 64-bit count")]
    CountOverflow {
        location: String,
        country: String,
        date: NaiveDate,
    },
}

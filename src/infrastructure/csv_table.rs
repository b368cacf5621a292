// CSV ingestion for wide cumulative time-series tables
use crate::application::errors::DataSourceError;
use crate::domain::table::{RawTable, RegionRow};
use chrono::NaiveDate;
use std::collections::HashMap;

pub const COUNTRY_COLUMN: &str = "Country/Region";
pub const PROVINCE_COLUMN: &str = "Province/State";
const COORDINATE_COLUMNS: [&str; 3] = ["Lat", "Long", "Long_"];
const DATE_FORMATS: [&str; 3] = ["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"];

/// Parse CSV text into a `RawTable`.
///
/// Every header other than the country, province and coordinate columns must
/// be a date. Date columns are put into calendar order, so the upstream column
/// order does not matter; a date appearing twice is rejected.
pub fn parse_table(location: &str, text: &str) -> Result<RawTable, DataSourceError> {
    let csv_error = |source: csv::Error| DataSourceError::Csv {
        location: location.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut country_idx = None;
    let mut province_idx = None;
    let mut date_columns: Vec<(usize, NaiveDate)> = Vec::new();

    for (idx, header) in headers.iter().enumerate() {
        match header {
            COUNTRY_COLUMN => country_idx = Some(idx),
            PROVINCE_COLUMN => province_idx = Some(idx),
            h if COORDINATE_COLUMNS.contains(&h) => {}
            h => {
                let date = parse_date(h).ok_or_else(|| DataSourceError::InvalidDate {
                    location: location.to_string(),
                    header: h.to_string(),
                })?;
                date_columns.push((idx, date));
            }
        }
    }

    let country_idx = country_idx.ok_or_else(|| DataSourceError::MissingColumn {
        location: location.to_string(),
        column: COUNTRY_COLUMN,
    })?;

    if date_columns.is_empty() {
        return Err(DataSourceError::NoDateColumns {
            location: location.to_string(),
        });
    }

    if date_columns.windows(2).any(|pair| pair[0].1 > pair[1].1) {
        tracing::debug!("Date columns in {} are out of order; sorting by date", location);
        date_columns.sort_by_key(|&(_, date)| date);
    }

    if let Some(pair) = date_columns.windows(2).find(|pair| pair[0].1 == pair[1].1) {
        return Err(DataSourceError::DuplicateDate {
            location: location.to_string(),
            date: pair[0].1,
        });
    }

    let mut rows = Vec::new();
    for (row_number, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;

        let country = record.get(country_idx).unwrap_or_default().to_string();
        let province = province_idx
            .and_then(|idx| record.get(idx))
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        let counts = date_columns
            .iter()
            .map(|&(idx, _)| {
                let value = record.get(idx).unwrap_or_default();
                parse_count(value).ok_or_else(|| DataSourceError::InvalidCount {
                    location: location.to_string(),
                    row: row_number + 1,
                    column: headers[idx].to_string(),
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(RegionRow::new(country, province, counts));
    }

    check_country_totals(location, &date_columns, &rows)?;

    tracing::debug!(
        "Parsed {} rows x {} dates from {}",
        rows.len(),
        date_columns.len(),
        location
    );

    let dates = date_columns.into_iter().map(|(_, date)| date).collect();
    Ok(RawTable::new(dates, rows))
}

/// Regional rows are summed per country downstream; reject tables where any
/// such sum leaves the `i64` range.
fn check_country_totals(
    location: &str,
    date_columns: &[(usize, NaiveDate)],
    rows: &[RegionRow],
) -> Result<(), DataSourceError> {
    let mut totals: HashMap<&str, Vec<i64>> = HashMap::new();

    for row in rows {
        let sums = totals
            .entry(row.country.as_str())
            .or_insert_with(|| vec![0; date_columns.len()]);
        for ((sum, count), &(_, date)) in sums.iter_mut().zip(&row.counts).zip(date_columns) {
            *sum = sum
                .checked_add(*count)
                .ok_or_else(|| DataSourceError::CountOverflow {
                    location: location.to_string(),
                    country: row.country.clone(),
                    date,
                })?;
        }
    }

    Ok(())
}

fn parse_date(header: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(header, format).ok())
}

fn parse_count(value: &str) -> Option<i64> {
    value.parse::<i64>().ok().filter(|count| *count >= 0)
}

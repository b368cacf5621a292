// Raw wide-format table domain model
use chrono::NaiveDate;

/// One region row of a cumulative time-series table.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRow {
    pub country: String,
    pub province: Option<String>,
    /// Cumulative count per date column, aligned with `RawTable::dates`.
    pub counts: Vec<i64>,
}

impl RegionRow {
    pub fn new(country: String, province: Option<String>, counts: Vec<i64>) -> Self {
        Self {
            country,
            province,
            counts,
        }
    }
}

/// A wide table: one row per region, one column per reporting day.
///
/// Date columns are kept in ascending calendar order and every row carries
/// exactly one count per date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<RegionRow>,
}

impl RawTable {
    pub fn new(dates: Vec<NaiveDate>, rows: Vec<RegionRow>) -> Self {
        Self { dates, rows }
    }

    /// Rows whose country matches `country` exactly.
    pub fn rows_for<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a RegionRow> + 'a {
        self.rows.iter().filter(move |row| row.country == country)
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.rows_for(country).next().is_some()
    }
}

// Series transformer - Wide cumulative table to per-country daily rates
use crate::domain::series::{CountrySeries, CumulativePoint, DailyRateSeries};
use crate::domain::table::RawTable;

/// Sum every row of `country` per date column into a national total.
///
/// Province/state and coordinates never take part in the sum; rows are
/// matched on the exact, case-sensitive country name. No matching rows gives
/// an empty series. Tables from `parse_table` are checked so these sums fit
/// in an `i64`.
pub fn country_series(table: &RawTable, country: &str) -> CountrySeries {
    let mut totals: Option<Vec<i64>> = None;
    let mut regions = Vec::new();

    for row in table.rows_for(country) {
        let sums = totals.get_or_insert_with(|| vec![0; table.dates.len()]);
        for (sum, count) in sums.iter_mut().zip(&row.counts) {
            *sum += count;
        }
        regions.push(row.province.as_deref().unwrap_or("(national)"));
    }

    let Some(totals) = totals else {
        return CountrySeries::new(country.to_string(), Vec::new());
    };

    if regions.len() > 1 {
        tracing::debug!(
            "Summed {} regional rows for {}: {}",
            regions.len(),
            country,
            regions.join(", ")
        );
    }

    let points = table
        .dates
        .iter()
        .zip(totals)
        .map(|(&date, cumulative)| CumulativePoint { date, cumulative })
        .collect();

    CountrySeries::new(country.to_string(), points)
}

/// Daily deltas for `country`, one per date after the first.
pub fn transform(table: &RawTable, country: &str) -> DailyRateSeries {
    if !table.has_country(country) {
        tracing::warn!(
            "Country '{}' not found among {} rows; its panel will be empty",
            country,
            table.rows.len()
        );
    }

    let rates = country_series(table, country).daily_rates();
    tracing::debug!("Derived {} daily rates for {}", rates.len(), country);
    rates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::RegionRow;
    use chrono::NaiveDate;

    fn dates(n: u32) -> Vec<NaiveDate> {
        (0..n)
            .map(|i| NaiveDate::from_ymd_opt(2020, 1, 22 + i).unwrap())
            .collect()
    }

    fn row(country: &str, province: Option<&str>, counts: &[i64]) -> RegionRow {
        RegionRow::new(
            country.to_string(),
            province.map(str::to_string),
            counts.to_vec(),
        )
    }

    #[test]
    fn test_testland_scenario() {
        let table = RawTable::new(
            dates(4),
            vec![
                row("Testland", Some("North"), &[4, 9, 9, 12]),
                row("Testland", Some("South"), &[6, 6, 6, 8]),
                row("Elsewhere", None, &[1, 2, 3, 4]),
            ],
        );

        let (x, y) = transform(&table, "Testland").axes();

        assert_eq!(x, dates(4)[1..].to_vec());
        assert_eq!(y, vec![5, 0, 5]);
    }

    #[test]
    fn test_sub_national_rows_are_summed() {
        let table = RawTable::new(
            dates(3),
            vec![
                row("Australia", Some("New South Wales"), &[1, 3, 6]),
                row("Australia", Some("Victoria"), &[0, 2, 2]),
                row("Australia", Some("Queensland"), &[5, 5, 7]),
            ],
        );

        let series = country_series(&table, "Australia");
        let totals: Vec<i64> = series.points.iter().map(|p| p.cumulative).collect();

        assert_eq!(totals, vec![6, 10, 15]);
        assert_eq!(series.points[0].date, dates(3)[0]);
    }

    #[test]
    fn test_missing_country_gives_empty_series() {
        let table = RawTable::new(dates(3), vec![row("Testland", None, &[1, 2, 3])]);

        let rates = transform(&table, "Nowhere");

        assert!(rates.dates().is_empty());
        assert!(rates.deltas().is_empty());
    }

    #[test]
    fn test_country_match_is_exact() {
        let table = RawTable::new(dates(2), vec![row("Korea, South", None, &[1, 2])]);

        assert!(transform(&table, "korea, south").is_empty());
        assert!(transform(&table, "Korea").is_empty());
        assert_eq!(transform(&table, "Korea, South").deltas(), vec![1]);
    }

    #[test]
    fn test_single_date_column_has_no_deltas() {
        let table = RawTable::new(dates(1), vec![row("Testland", None, &[42])]);

        assert_eq!(country_series(&table, "Testland").len(), 1);
        assert!(transform(&table, "Testland").is_empty());
    }

    #[test]
    fn test_downward_revision_passes_through() {
        let table = RawTable::new(dates(2), vec![row("Testland", None, &[100, 90])]);

        assert_eq!(transform(&table, "Testland").deltas(), vec![-10]);
    }
}

// Per-country series domain models
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub cumulative: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRate {
    pub date: NaiveDate,
    pub delta: i64,
}

/// National cumulative totals in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySeries {
    pub country: String,
    pub points: Vec<CumulativePoint>,
}

impl CountrySeries {
    pub fn new(country: String, points: Vec<CumulativePoint>) -> Self {
        Self { country, points }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First differences of the cumulative values. The first date has no
    /// predecessor and is left out, so the result is one entry shorter.
    pub fn daily_rates(&self) -> DailyRateSeries {
        let rates = self
            .points
            .windows(2)
            .map(|pair| DailyRate {
                date: pair[1].date,
                delta: pair[1].cumulative - pair[0].cumulative,
            })
            .collect();

        DailyRateSeries::new(self.country.clone(), rates)
    }
}

/// Day-over-day changes for one country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyRateSeries {
    pub country: String,
    pub rates: Vec<DailyRate>,
}

impl DailyRateSeries {
    pub fn new(country: String, rates: Vec<DailyRate>) -> Self {
        Self { country, rates }
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// The series as its x (dates) and y (deltas) axes.
    pub fn axes(&self) -> (Vec<NaiveDate>, Vec<i64>) {
        self.rates.iter().map(|r| (r.date, r.delta)).unzip()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    #[cfg(test)]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.axes().0
    }

    #[cfg(test)]
    pub fn deltas(&self) -> Vec<i64> {
        self.axes().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, d).unwrap()
    }

    fn series(values: &[i64]) -> CountrySeries {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &cumulative)| CumulativePoint {
                date: day(i as u32 + 1),
                cumulative,
            })
            .collect();
        CountrySeries::new("Testland".to_string(), points)
    }

    #[test]
    fn test_daily_rates_are_first_differences() {
        let cumulative = [3, 7, 7, 12, 40, 41];
        let rates = series(&cumulative).daily_rates();

        assert_eq!(rates.len(), cumulative.len() - 1);
        for (i, rate) in rates.rates.iter().enumerate() {
            assert_eq!(rate.delta, cumulative[i + 1] - cumulative[i]);
            assert_eq!(rate.date, day(i as u32 + 2));
        }
    }

    #[test]
    fn test_daily_rates_keep_negative_revisions() {
        let rates = series(&[100, 90]).daily_rates();
        assert_eq!(rates.deltas(), vec![-10]);
    }

    #[test]
    fn test_daily_rates_of_short_series() {
        assert!(series(&[5]).daily_rates().is_empty());
        assert!(series(&[]).daily_rates().is_empty());
    }

    #[test]
    fn test_axes() {
        let (dates, deltas) = series(&[1, 4, 9]).daily_rates().axes();
        assert_eq!(dates, vec![day(2), day(3)]);
        assert_eq!(deltas, vec![3, 5]);
    }
}

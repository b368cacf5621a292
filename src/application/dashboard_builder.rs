// Dashboard builder - Two stacked daily-rate panels for one country
use crate::domain::dashboard::{CanvasSize, DashboardSpec, Panel, PanelKind};
use crate::domain::series::DailyRateSeries;
use crate::infrastructure::config::LayoutConfig;
use chrono::NaiveDate;

pub fn build(
    cases: DailyRateSeries,
    deaths: DailyRateSeries,
    country: &str,
    as_of: NaiveDate,
    layout: &LayoutConfig,
) -> DashboardSpec {
    let deaths_panel = Panel::new(
        PanelKind::DailyDeaths,
        format!("Number of Daily Deaths in {}", country),
        "Number of Deaths".to_string(),
        deaths,
    );
    let cases_panel = Panel::new(
        PanelKind::DailyCases,
        format!("Number of Daily New Cases in {}", country),
        "Number of New Cases".to_string(),
        cases,
    );

    let title = format!(
        "COVID-19 Deaths in {} as of {}: Dashboard by {}",
        country, as_of, layout.creator
    );

    DashboardSpec::new(
        title,
        deaths_panel,
        cases_panel,
        CanvasSize {
            height: layout.height,
            width: layout.width,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::DailyRate;

    fn rates(deltas: &[i64]) -> DailyRateSeries {
        let rates = deltas
            .iter()
            .enumerate()
            .map(|(i, &delta)| DailyRate {
                date: NaiveDate::from_ymd_opt(2021, 5, i as u32 + 2).unwrap(),
                delta,
            })
            .collect();
        DailyRateSeries::new("Testland".to_string(), rates)
    }

    fn layout() -> LayoutConfig {
        LayoutConfig {
            height: 900,
            width: 1500,
            creator: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn test_panels_are_deaths_then_cases() {
        let as_of = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        let spec = build(rates(&[100, 200]), rates(&[3]), "Testland", as_of, &layout());

        assert_eq!(spec.deaths().kind, PanelKind::DailyDeaths);
        assert_eq!(spec.deaths().series.deltas(), vec![3]);
        assert_eq!(spec.deaths().title, "Number of Daily Deaths in Testland");

        assert_eq!(spec.cases().kind, PanelKind::DailyCases);
        assert_eq!(spec.cases().series.deltas(), vec![100, 200]);
        assert_eq!(spec.cases().title, "Number of Daily New Cases in Testland");
    }

    #[test]
    fn test_title_and_size() {
        let as_of = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        let spec = build(rates(&[]), rates(&[]), "Testland", as_of, &layout());

        assert_eq!(
            spec.title,
            "COVID-19 Deaths in Testland as of 2021-06-01: Dashboard by Jane Doe"
        );
        assert_eq!(spec.size, CanvasSize { height: 900, width: 1500 });
        assert!(spec.deaths().series.is_empty());
    }
}

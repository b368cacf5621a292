// Dashboard domain model
use super::series::DailyRateSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    DailyDeaths,
    DailyCases,
}

/// One chart pane: a marker plot of daily deltas against dates.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub kind: PanelKind,
    pub title: String,
    pub trace_name: String,
    pub series: DailyRateSeries,
}

impl Panel {
    pub fn new(kind: PanelKind, title: String, trace_name: String, series: DailyRateSeries) -> Self {
        Self {
            kind,
            title,
            trace_name,
            series,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub height: u32,
    pub width: u32,
}

/// Two stacked panels, deaths above cases, with independent axes.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSpec {
    pub title: String,
    pub panels: [Panel; 2],
    pub size: CanvasSize,
}

impl DashboardSpec {
    pub fn new(title: String, deaths: Panel, cases: Panel, size: CanvasSize) -> Self {
        Self {
            title,
            panels: [deaths, cases],
            size,
        }
    }

    pub fn deaths(&self) -> &Panel {
        &self.panels[0]
    }

    pub fn cases(&self) -> &Panel {
        &self.panels[1]
    }
}

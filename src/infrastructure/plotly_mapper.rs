// Mapper to convert the dashboard domain model to a plotly.js figure
use crate::domain::dashboard::{DashboardSpec, Panel};
use serde::Serialize;

/// Vertical extent of each stacked row in paper coordinates, top row first.
const ROW_DOMAINS: [[f64; 2]; 2] = [[0.575, 1.0], [0.0, 0.425]];

#[derive(Debug, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<i64>,
    pub xaxis: &'static str,
    pub yaxis: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Layout {
    pub title: Title,
    pub height: u32,
    pub width: u32,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub xaxis2: Axis,
    pub yaxis2: Axis,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct Axis {
    pub domain: [f64; 2],
    pub anchor: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xref: &'static str,
    pub yref: &'static str,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub showarrow: bool,
}

pub fn dashboard_to_figure(dashboard: &DashboardSpec) -> Figure {
    let (top, bottom) = (dashboard.deaths(), dashboard.cases());

    Figure {
        data: vec![panel_to_trace(top, "x", "y"), panel_to_trace(bottom, "x2", "y2")],
        layout: Layout {
            title: Title {
                text: dashboard.title.clone(),
            },
            height: dashboard.size.height,
            width: dashboard.size.width,
            xaxis: Axis {
                domain: [0.0, 1.0],
                anchor: "y",
            },
            yaxis: Axis {
                domain: ROW_DOMAINS[0],
                anchor: "x",
            },
            xaxis2: Axis {
                domain: [0.0, 1.0],
                anchor: "y2",
            },
            yaxis2: Axis {
                domain: ROW_DOMAINS[1],
                anchor: "x2",
            },
            annotations: vec![
                subplot_title(top, ROW_DOMAINS[0][1]),
                subplot_title(bottom, ROW_DOMAINS[1][1]),
            ],
        },
    }
}

fn panel_to_trace(panel: &Panel, xaxis: &'static str, yaxis: &'static str) -> Trace {
    let (dates, deltas) = panel.series.axes();
    Trace {
        kind: "scatter",
        mode: "markers",
        name: panel.trace_name.clone(),
        x: dates.iter().map(|d| d.to_string()).collect(),
        y: deltas,
        xaxis,
        yaxis,
    }
}

fn subplot_title(panel: &Panel, y: f64) -> Annotation {
    Annotation {
        text: panel.title.clone(),
        x: 0.5,
        y,
        xref: "paper",
        yref: "paper",
        xanchor: "center",
        yanchor: "bottom",
        showarrow: false,
    }
}

// HTML page rendering for the dashboard; plotly.js is loaded from its CDN
use crate::domain::dashboard::DashboardSpec;
use crate::infrastructure::plotly_mapper::dashboard_to_figure;
use anyhow::Context;
use std::path::Path;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub fn render_page(dashboard: &DashboardSpec) -> anyhow::Result<String> {
    let figure = serde_json::to_string(&dashboard_to_figure(dashboard))
        .context("Failed to serialize dashboard figure")?;

    Ok(PAGE_HTML
        .replace("{{TITLE}}", &escape_html(&dashboard.title))
        .replace("{{PLOTLY}}", PLOTLY_CDN)
        .replace("{{FIGURE}}", &figure.replace("</", "<\\/")))
}

pub async fn write_page(path: impl AsRef<Path>, html: &str) -> anyhow::Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("Failed to write dashboard page to {}", path.display()))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <script src="{{PLOTLY}}" charset="utf-8"></script>
  <style>
    body {
      margin: 0;
      padding: 16px;
      font-family: "Open Sans", verdana, arial, sans-serif;
      background: #fff;
    }
  </style>
</head>
<body>
  <div id="dashboard"></div>
  <script>
    const figure = {{FIGURE}};
    Plotly.newPlot("dashboard", figure.data, figure.layout, { responsive: true });
  </script>
</body>
</html>
"#;

// Main entry point - Configuration, dependency wiring and exit status
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, process::ExitCode, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use chrono::{Local, NaiveDate};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::application::dashboard_service::DashboardService;
use crate::application::errors::DataSourceError;
use crate::application::table_source::TableSource;
use crate::infrastructure::config::{load_dashboard_config, DashboardConfig, ViewerConfig};
use crate::infrastructure::html_page::{render_page, write_page};
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::table_source::CsvTableSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_page, health_check};

const EXIT_DATA_SOURCE: u8 = 1;
const EXIT_FAILURE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_dashboard_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            return ExitCode::from(exit_code(&e));
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{:#}", e);
        return ExitCode::from(exit_code(&e));
    }

    let source = Arc::new(CsvTableSource::new());
    let today = Local::now().date_naive();

    match run(config, source, today).await {
        Ok(()) => {
            info!("Process finished successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            let code = exit_code(&e);
            if code == EXIT_DATA_SOURCE {
                error!("Unable to read the source data. Please check logs for details");
                info!("Terminating the process");
            }
            eprintln!("{:#}", e);
            ExitCode::from(code)
        }
    }
}

/// Source failures get their own status; everything else is a generic failure.
fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<DataSourceError>().is_some() {
        EXIT_DATA_SOURCE
    } else {
        EXIT_FAILURE
    }
}

async fn run(
    config: DashboardConfig,
    source: Arc<dyn TableSource>,
    today: NaiveDate,
) -> anyhow::Result<()> {
    info!("Started processing data for {}", config.country);
    info!("Date today: {}", today);

    // Create services (application layer)
    let dashboard_service = DashboardService::new(source, config.clone());

    let dashboard = dashboard_service.get_dashboard(today).await?;

    let page = render_page(&dashboard)?;
    write_page(&config.output.path, &page).await?;
    info!("Dashboard written to {}", config.output.path);
    println!("Dashboard written to {}", config.output.path);

    if config.viewer.serve {
        serve(&config.viewer, page).await?;
    }

    Ok(())
}

async fn serve(viewer: &ViewerConfig, page: String) -> anyhow::Result<()> {
    let state = Arc::new(AppState { page });

    let router = Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = viewer
        .bind
        .parse()
        .with_context(|| format!("Invalid viewer bind address '{}'", viewer.bind))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let local = listener.local_addr()?;
    info!("Serving dashboard on http://{}", local);
    println!("Open http://{} to view the dashboard (Ctrl-C to stop)", local);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl-C, stopping the viewer: {}", e);
            }
        })
        .await?;

    Ok(())
}

// HTTP request handlers
use crate::presentation::app_state::AppState;
use axum::{extract::State, response::Html};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Serve the rendered dashboard page
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dashboard_page_returns_rendered_html() {
        let state = Arc::new(AppState {
            page: "<html>dashboard</html>".to_string(),
        });

        let Html(body) = dashboard_page(State(state)).await;

        assert_eq!(body, "<html>dashboard</html>");
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "ok");
    }
}

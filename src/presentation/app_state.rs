// Application state for HTTP handlers

/// The dashboard page is rendered once before serving starts.
#[derive(Clone)]
pub struct AppState {
    pub page: String,
}

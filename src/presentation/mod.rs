// Presentation layer - HTTP viewer for the rendered dashboard
pub mod app_state;
pub mod handlers;

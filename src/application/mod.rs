// Application layer - Use cases and ports
pub mod dashboard_builder;
pub mod dashboard_service;
pub mod errors;
pub mod series_transformer;
pub mod table_source;

// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod csv_table;
pub mod html_page;
pub mod logging;
pub mod plotly_mapper;
pub mod table_source;

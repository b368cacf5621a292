// Domain layer - Core data shapes for the dashboard
pub mod dashboard;
pub mod series;
pub mod table;

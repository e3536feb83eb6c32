// Presentation layer - HTTP surface consumed by the dashboard page
pub mod app_state;
pub mod handlers;
pub mod router;

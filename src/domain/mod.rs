// Domain layer - Field metrics, advisories, chat and chart models
pub mod advisory;
pub mod chat;
pub mod dashboard;
pub mod error;
pub mod metrics;

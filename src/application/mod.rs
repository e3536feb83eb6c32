// Application layer - Use cases and the data source seam
pub mod advisory_analyzer;
pub mod chat_service;
pub mod dashboard_service;
pub mod metrics_repository;
pub mod reply_matcher;
pub mod streaming_service;

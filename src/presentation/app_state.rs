// Application state for HTTP handlers
use crate::application::advisory_analyzer::AdvisoryAnalyzer;
use crate::application::chat_service::ChatService;
use crate::application::dashboard_service::DashboardService;
use crate::application::reply_matcher::ReplyMatcher;
use crate::application::streaming_service::StreamingDashboardService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::sample_repository::StaticSampleRepository;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub streaming_service: StreamingDashboardService,
    pub chat_service: ChatService,
}

impl AppState {
    /// Wire repository and services from a validated configuration
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let repository = Arc::new(StaticSampleRepository::new(
            config.samples.clone(),
            config.performance.clone(),
        ));

        let dashboard_service = DashboardService::new(
            repository,
            AdvisoryAnalyzer::new(config.advisories.clone()),
            config.thresholds,
            config.charts.clone(),
            config.dashboard.title.clone(),
        );
        let streaming_service = StreamingDashboardService::new(dashboard_service.clone());

        let matcher = ReplyMatcher::new(config.chat.rules.clone(), config.chat.fallback.clone())?;
        let chat_service = ChatService::new(matcher, Duration::from_millis(config.chat.reply_delay_ms));

        Ok(Self {
            dashboard_service,
            streaming_service,
            chat_service,
        })
    }
}

// Repository trait for field metric access
use crate::domain::metrics::{FieldSamples, PerformanceProfile};
use async_trait::async_trait;

#[async_trait]
pub trait MetricsRepository: Send + Sync {
    /// The six field series for the current window, one sample per day label
    async fn load_samples(&self) -> anyhow::Result<FieldSamples>;

    /// Current-vs-optimal performance scores for the radar chart
    async fn load_performance(&self) -> anyhow::Result<PerformanceProfile>;
}

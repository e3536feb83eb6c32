// Static sample repository - Canned field data from configuration
use crate::application::metrics_repository::MetricsRepository;
use crate::domain::metrics::{FieldSamples, PerformanceProfile};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct StaticSampleRepository {
    samples: FieldSamples,
    performance: PerformanceProfile,
}

impl StaticSampleRepository {
    pub fn new(samples: FieldSamples, performance: PerformanceProfile) -> Self {
        Self {
            samples,
            performance,
        }
    }
}

#[async_trait]
impl MetricsRepository for StaticSampleRepository {
    async fn load_samples(&self) -> anyhow::Result<FieldSamples> {
        Ok(self.samples.clone())
    }

    async fn load_performance(&self) -> anyhow::Result<PerformanceProfile> {
        Ok(self.performance.clone())
    }
}

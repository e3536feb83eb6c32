// Dashboard service - Use case for building dashboards
use crate::application::advisory_analyzer::AdvisoryAnalyzer;
use crate::application::metrics_repository::MetricsRepository;
use crate::domain::advisory::{AdvisoryMessage, ThresholdSet};
use crate::domain::dashboard::{ChartData, ChartKind, Dashboard, SeriesData};
use crate::domain::metrics::{FieldSamples, PerformanceProfile};
use crate::infrastructure::config::{ChartConfig, SeriesConfig, SeriesSource};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn MetricsRepository>,
    analyzer: AdvisoryAnalyzer,
    thresholds: ThresholdSet,
    charts_config: Vec<ChartConfig>,
    title: String,
}

impl DashboardService {
    pub fn new(
        repository: Arc<dyn MetricsRepository>,
        analyzer: AdvisoryAnalyzer,
        thresholds: ThresholdSet,
        charts_config: Vec<ChartConfig>,
        title: String,
    ) -> Self {
        Self {
            repository,
            analyzer,
            thresholds,
            charts_config,
            title,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub async fn get_dashboard(&self) -> anyhow::Result<Dashboard> {
        let samples = self.repository.load_samples().await?;
        let profile = self.repository.load_performance().await?;

        let charts = self.build_charts(&samples, &profile);
        let advisories = self.analyze(&samples);

        Ok(Dashboard::new(self.title.clone(), charts, advisories))
    }

    pub async fn get_advisories(&self) -> anyhow::Result<Vec<AdvisoryMessage>> {
        let samples = self.repository.load_samples().await?;
        Ok(self.analyze(&samples))
    }

    pub async fn load_inputs(&self) -> anyhow::Result<(FieldSamples, PerformanceProfile)> {
        let samples = self.repository.load_samples().await?;
        let profile = self.repository.load_performance().await?;
        Ok((samples, profile))
    }

    pub fn analyze(&self, samples: &FieldSamples) -> Vec<AdvisoryMessage> {
        let advisories = self.analyzer.analyze(samples, &self.thresholds);
        for advisory in &advisories {
            tracing::debug!("{}", advisory);
        }
        advisories
    }

    /// Build every configured chart. Series without values are dropped, and so is
    /// a chart left with no series.
    pub fn build_charts(&self, samples: &FieldSamples, profile: &PerformanceProfile) -> Vec<ChartData> {
        let mut charts = Vec::new();

        for chart_config in &self.charts_config {
            let mut series_list = Vec::new();

            for series_config in &chart_config.series {
                let values = series_values(series_config.source, samples, profile);
                if values.is_empty() {
                    tracing::warn!(
                        "Skipping series {} for chart {} - no values",
                        series_config.id,
                        chart_config.id
                    );
                    continue;
                }
                series_list.push(series_data(series_config, values));
            }

            if series_list.is_empty() {
                continue;
            }

            charts.push(ChartData {
                id: chart_config.id.clone(),
                title: chart_config.title.clone(),
                kind: chart_config.kind,
                labels: chart_labels(chart_config.kind, samples, profile),
                axes: chart_config.axes.clone(),
                series: series_list,
            });
        }

        charts
    }
}

/// Radar charts are labelled by performance axis, everything else by day.
pub fn chart_labels(kind: ChartKind, samples: &FieldSamples, profile: &PerformanceProfile) -> Vec<String> {
    match kind {
        ChartKind::Radar => profile.axes.clone(),
        ChartKind::Line | ChartKind::Bar => samples.labels.clone(),
    }
}

pub fn series_values(source: SeriesSource, samples: &FieldSamples, profile: &PerformanceProfile) -> Vec<f64> {
    match source {
        SeriesSource::PerformanceCurrent => profile.current.clone(),
        SeriesSource::PerformanceOptimal => profile.optimal.clone(),
        other => other
            .metric()
            .map(|metric| samples.series(metric).samples().to_vec())
            .unwrap_or_default(),
    }
}

pub fn series_data(config: &SeriesConfig, values: Vec<f64>) -> SeriesData {
    SeriesData {
        id: config.id.clone(),
        name: config.name.clone(),
        color: config.color.clone(),
        fill_color: config.fill_color.clone(),
        fill: config.fill,
        tension: config.tension,
        axis: config.axis.clone(),
        border_radius: config.border_radius,
        point_color: config.point_color.clone(),
        point_border_color: config.point_border_color.clone(),
        point_hover_color: config.point_hover_color.clone(),
        point_hover_border_color: config.point_hover_border_color.clone(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::load_app_config_from;
    use crate::infrastructure::sample_repository::StaticSampleRepository;

    fn service() -> DashboardService {
        let config = load_app_config_from("config/dashboard").unwrap();
        let repository = Arc::new(StaticSampleRepository::new(
            config.samples.clone(),
            config.performance.clone(),
        ));
        DashboardService::new(
            repository,
            AdvisoryAnalyzer::new(config.advisories.clone()),
            config.thresholds,
            config.charts.clone(),
            config.dashboard.title.clone(),
        )
    }

    #[tokio::test]
    async fn test_dashboard_has_four_charts() {
        let dashboard = service().get_dashboard().await.unwrap();

        let ids: Vec<&str> = dashboard.charts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["soil", "air", "visual", "suggestion"]);

        let kinds: Vec<ChartKind> = dashboard.charts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ChartKind::Line, ChartKind::Line, ChartKind::Bar, ChartKind::Radar]
        );
    }

    #[tokio::test]
    async fn test_air_chart_uses_two_axes() {
        let dashboard = service().get_dashboard().await.unwrap();
        let air = dashboard.charts.iter().find(|c| c.id == "air").unwrap();

        let axes: Vec<Option<&str>> = air.series.iter().map(|s| s.axis.as_deref()).collect();
        assert_eq!(axes, vec![Some("y"), Some("y1")]);
        assert_eq!(air.series[1].values[4], 1200.0);
        assert_eq!(air.labels.len(), 7);
    }

    #[tokio::test]
    async fn test_radar_uses_performance_axes() {
        let dashboard = service().get_dashboard().await.unwrap();
        let radar = dashboard.charts.iter().find(|c| c.id == "suggestion").unwrap();

        assert_eq!(radar.labels[0], "Irrigation");
        assert_eq!(radar.series[0].values, vec![70.0, 85.0, 65.0, 60.0, 75.0]);
        assert_eq!(radar.series[1].values, vec![90.0, 70.0, 80.0, 85.0, 90.0]);
    }

    #[tokio::test]
    async fn test_series_styling_carried_through() {
        let dashboard = service().get_dashboard().await.unwrap();

        let visual = dashboard.charts.iter().find(|c| c.id == "visual").unwrap();
        assert!(visual.series.iter().all(|s| s.border_radius == Some(5.0)));

        let radar = dashboard.charts.iter().find(|c| c.id == "suggestion").unwrap();
        let current = &radar.series[0];
        assert_eq!(current.point_color.as_deref(), Some("#2c974b"));
        assert_eq!(current.point_border_color.as_deref(), Some("#fff"));
        assert_eq!(current.point_hover_color.as_deref(), Some("#fff"));
        assert_eq!(current.point_hover_border_color.as_deref(), Some("#2c974b"));
        assert_eq!(radar.series[1].point_color.as_deref(), Some("#339999"));

        let soil = dashboard.charts.iter().find(|c| c.id == "soil").unwrap();
        assert!(soil.series.iter().all(|s| s.border_radius.is_none() && s.point_color.is_none()));

        let json = serde_json::to_value(&visual.series[0]).unwrap();
        assert_eq!(json["border_radius"], 5.0);
    }

    #[tokio::test]
    async fn test_shipped_samples_fire_every_rule() {
        let advisories = service().get_advisories().await.unwrap();

        assert_eq!(advisories.len(), 7);
        assert_eq!(
            advisories[0].text,
            "Soil moisture at 41% (trending down) → Increase irrigation immediately."
        );
        assert_eq!(
            advisories[3].text,
            "CO₂ peaked at 1200 ppm (above 1100) → Adjust CO₂ supply or ventilation."
        );
        assert_eq!(
            advisories[4].text,
            "Leaf discoloration at 22% (+12% this week) → Provide foliar feed and check for deficiencies."
        );
    }

    #[test]
    fn test_empty_series_dropped() {
        let service = service();
        let config = load_app_config_from("config/dashboard").unwrap();
        let mut profile = config.performance.clone();
        profile.current.clear();
        profile.optimal.clear();

        let charts = service.build_charts(&config.samples, &profile);

        assert_eq!(charts.len(), 3);
        assert!(charts.iter().all(|c| c.kind != ChartKind::Radar));
    }
}

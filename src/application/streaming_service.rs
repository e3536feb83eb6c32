// Streaming dashboard service - Progressive loading over newline-delimited JSON
use crate::application::dashboard_service::DashboardService;
use crate::domain::advisory::AdvisoryMessage;
use crate::domain::dashboard::{AxisData, ChartData, ChartKind};
use serde::Serialize;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Serialize)]
pub struct SeriesSkeleton {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub fill_color: Option<String>,
    pub fill: bool,
    pub tension: Option<f64>,
    pub axis: Option<String>,
    pub border_radius: Option<f64>,
    pub point_color: Option<String>,
    pub point_border_color: Option<String>,
    pub point_hover_color: Option<String>,
    pub point_hover_border_color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSkeleton {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub axes: Vec<AxisData>,
    pub series: Vec<SeriesSkeleton>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamMessage {
    Skeleton {
        title: String,
        charts: Vec<ChartSkeleton>,
    },
    ChartUpdate {
        chart_id: String,
        series_id: String,
        values: Vec<f64>,
    },
    Advisories {
        messages: Vec<AdvisoryMessage>,
    },
    Complete {
        total_widgets: usize,
        duration_ms: u64,
    },
    Error {
        message: String,
    },
}

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboard_service: DashboardService,
}

impl StreamingDashboardService {
    pub fn new(dashboard_service: DashboardService) -> Self {
        Self { dashboard_service }
    }

    /// Skeleton first, then one update per series, the advisories, and a completion event.
    pub fn stream_dashboard(&self) -> mpsc::Receiver<StreamMessage> {
        let (tx, rx) = mpsc::channel(100);
        let service = self.dashboard_service.clone();
        let start_time = Instant::now();

        tokio::spawn(async move {
            let (samples, profile) = match service.load_inputs().await {
                Ok(inputs) => inputs,
                Err(e) => {
                    tracing::error!("Error loading dashboard inputs: {}", e);
                    let _ = tx
                        .send(StreamMessage::Error {
                            message: "dashboard data unavailable".to_string(),
                        })
                        .await;
                    return;
                }
            };

            let charts = service.build_charts(&samples, &profile);
            let total_widgets = charts.len() + 1;

            let skeleton = StreamMessage::Skeleton {
                title: service.title().to_string(),
                charts: charts.iter().map(chart_skeleton).collect(),
            };
            if tx.send(skeleton).await.is_err() {
                tracing::debug!("Dashboard stream closed before skeleton was sent");
                return;
            }

            for chart in charts {
                for series in chart.series {
                    let update = StreamMessage::ChartUpdate {
                        chart_id: chart.id.clone(),
                        series_id: series.id,
                        values: series.values,
                    };
                    if tx.send(update).await.is_err() {
                        return;
                    }
                }
            }

            let messages = service.analyze(&samples);
            if tx.send(StreamMessage::Advisories { messages }).await.is_err() {
                return;
            }

            let duration_ms = start_time.elapsed().as_millis() as u64;
            let _ = tx
                .send(StreamMessage::Complete {
                    total_widgets,
                    duration_ms,
                })
                .await;
        });

        rx
    }
}

fn chart_skeleton(chart: &ChartData) -> ChartSkeleton {
    ChartSkeleton {
        id: chart.id.clone(),
        title: chart.title.clone(),
        kind: chart.kind,
        labels: chart.labels.clone(),
        axes: chart.axes.clone(),
        series: chart
            .series
            .iter()
            .map(|s| SeriesSkeleton {
                id: s.id.clone(),
                name: s.name.clone(),
                color: s.color.clone(),
                fill_color: s.fill_color.clone(),
                fill: s.fill,
                tension: s.tension,
                axis: s.axis.clone(),
                border_radius: s.border_radius,
                point_color: s.point_color.clone(),
                point_border_color: s.point_border_color.clone(),
                point_hover_color: s.point_hover_color.clone(),
                point_hover_border_color: s.point_hover_border_color.clone(),
            })
            .collect(),
    }
}

// Dashboard domain model
use serde::{Deserialize, Serialize};

use super::advisory::AdvisoryMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Radar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPosition {
    Left,
    Right,
    Bottom,
    Radial,
}

/// Scale settings handed to the charting library as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisData {
    pub id: String,
    pub position: AxisPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default)]
    pub begin_at_zero: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default = "default_grid")]
    pub grid: bool,
}

fn default_grid() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
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
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub axes: Vec<AxisData>,
    pub series: Vec<SeriesData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub charts: Vec<ChartData>,
    pub advisories: Vec<AdvisoryMessage>,
}

impl Dashboard {
    pub fn new(title: String, charts: Vec<ChartData>, advisories: Vec<AdvisoryMessage>) -> Self {
        Self {
            title,
            charts,
            advisories,
        }
    }
}

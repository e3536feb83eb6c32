use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::advisory::ThresholdSet;
use crate::domain::chat::KeywordRule;
use crate::domain::dashboard::{AxisData, ChartKind};
use crate::domain::error::ConfigError;
use crate::domain::metrics::{FieldSamples, Metric, PerformanceProfile};

const DEFAULT_CONFIG_PATH: &str = "config/dashboard";
const CONFIG_PATH_VAR: &str = "FIELD_DASHBOARD_CONFIG";
const ENV_PREFIX: &str = "FIELD_DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    pub chat: ChatSettings,
    pub samples: FieldSamples,
    pub thresholds: ThresholdSet,
    pub performance: PerformanceProfile,
    pub advisories: AdvisoryTemplates,
    #[serde(default)]
    pub charts: Vec<ChartConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub title: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: "Field Monitoring".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatSettings {
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    pub fallback: String,
    #[serde(default)]
    pub rules: Vec<KeywordRule>,
}

fn default_reply_delay_ms() -> u64 {
    800
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AdvisoryTemplate {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AdvisoryTemplates {
    pub soil_moisture: AdvisoryTemplate,
    pub ph: AdvisoryTemplate,
    pub humidity: AdvisoryTemplate,
    pub co2: AdvisoryTemplate,
    pub leaf_discoloration: AdvisoryTemplate,
    pub pest_spots: AdvisoryTemplate,
    pub best_practices: AdvisoryTemplate,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    #[serde(default)]
    pub axes: Vec<AxisData>,
    #[serde(default)]
    pub series: Vec<SeriesConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeriesConfig {
    pub id: String,
    pub name: String,
    pub source: SeriesSource,
    pub color: Option<String>,
    pub fill_color: Option<String>,
    #[serde(default)]
    pub fill: bool,
    pub tension: Option<f64>,
    pub axis: Option<String>,
    /// Corner radius for bar charts
    pub border_radius: Option<f64>,
    pub point_color: Option<String>,
    pub point_border_color: Option<String>,
    pub point_hover_color: Option<String>,
    pub point_hover_border_color: Option<String>,
}

/// Where a chart series takes its values from.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeriesSource {
    SoilMoisture,
    Ph,
    Humidity,
    Co2,
    DiscoloredLeaves,
    PestSpots,
    PerformanceCurrent,
    PerformanceOptimal,
}

impl SeriesSource {
    pub fn metric(&self) -> Option<Metric> {
        match self {
            SeriesSource::SoilMoisture => Some(Metric::SoilMoisture),
            SeriesSource::Ph => Some(Metric::Ph),
            SeriesSource::Humidity => Some(Metric::Humidity),
            SeriesSource::Co2 => Some(Metric::Co2),
            SeriesSource::DiscoloredLeaves => Some(Metric::DiscoloredLeaves),
            SeriesSource::PestSpots => Some(Metric::PestSpots),
            SeriesSource::PerformanceCurrent | SeriesSource::PerformanceOptimal => None,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.samples.validate()?;
        self.performance.validate()?;
        Ok(())
    }
}

/// Load the dashboard configuration from `FIELD_DASHBOARD_CONFIG` (default `config/dashboard`).
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let path = config_path(std::env::var(CONFIG_PATH_VAR).ok());
    load_app_config_from(&path)
}

fn config_path(configured: Option<String>) -> String {
    configured
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// `FIELD_DASHBOARD__SECTION__KEY` overrides `section.key` from the file
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    load_with_environment(path, environment())
}

fn build_settings(path: &str, env: config::Environment) -> anyhow::Result<config::Config> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(env)
        .build()?;
    Ok(settings)
}

fn load_with_environment(path: &str, env: config::Environment) -> anyhow::Result<AppConfig> {
    let settings = build_settings(path, env)?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.validate()?;

    tracing::debug!(
        "Loaded configuration from {}: {} chat rules, {} charts, {} samples per series",
        path,
        app_config.chat.rules.len(),
        app_config.charts.len(),
        app_config.samples.labels.len()
    );

    Ok(app_config)
}

/// Replace `${name}` placeholders in a message template
pub fn render_template(template: &str, vars: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

// Field metric domain models
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    SoilMoisture,
    Ph,
    Humidity,
    Co2,
    DiscoloredLeaves,
    PestSpots,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::SoilMoisture,
        Metric::Ph,
        Metric::Humidity,
        Metric::Co2,
        Metric::DiscoloredLeaves,
        Metric::PestSpots,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::SoilMoisture => "soil_moisture",
            Metric::Ph => "ph",
            Metric::Humidity => "humidity",
            Metric::Co2 => "co2",
            Metric::DiscoloredLeaves => "discolored_leaves",
            Metric::PestSpots => "pest_spots",
        }
    }
}

/// Direction of the three most recent samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Down,
    Up,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Down => "down",
            Trend::Up => "up",
            Trend::Stable => "stable",
        };
        f.write_str(s)
    }
}

/// One sample per day label, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSeries {
    samples: Vec<f64>,
}

impl MetricSeries {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn latest(&self) -> f64 {
        self.samples.last().copied().unwrap_or_default()
    }

    pub fn baseline(&self) -> f64 {
        self.samples.first().copied().unwrap_or_default()
    }

    /// Change over the whole window (latest minus baseline).
    pub fn delta(&self) -> f64 {
        self.latest() - self.baseline()
    }

    pub fn peak(&self) -> f64 {
        self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn any_above(&self, bound: f64) -> bool {
        self.samples.iter().any(|&v| v > bound)
    }

    /// Mean of the last three samples compared against the first of them.
    pub fn trend(&self) -> Trend {
        let recent = &self.samples[self.samples.len().saturating_sub(3)..];
        let Some(&first) = recent.first() else {
            return Trend::Stable;
        };
        let mean = recent.iter().sum::<f64>() / recent.len() as f64;

        if mean < first {
            Trend::Down
        } else if mean > first {
            Trend::Up
        } else {
            Trend::Stable
        }
    }
}

/// The six field series sharing one set of day labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSamples {
    pub labels: Vec<String>,
    pub soil_moisture: MetricSeries,
    pub ph: MetricSeries,
    pub humidity: MetricSeries,
    pub co2: MetricSeries,
    pub discolored_leaves: MetricSeries,
    pub pest_spots: MetricSeries,
}

impl FieldSamples {
    pub fn series(&self, metric: Metric) -> &MetricSeries {
        match metric {
            Metric::SoilMoisture => &self.soil_moisture,
            Metric::Ph => &self.ph,
            Metric::Humidity => &self.humidity,
            Metric::Co2 => &self.co2,
            Metric::DiscoloredLeaves => &self.discolored_leaves,
            Metric::PestSpots => &self.pest_spots,
        }
    }

    /// Every series must be non-empty and carry exactly one sample per label.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.labels.is_empty() {
            return Err(ConfigError::NoLabels);
        }

        for metric in Metric::ALL {
            let actual = self.series(metric).samples().len();
            if actual != self.labels.len() {
                return Err(ConfigError::SeriesLength {
                    metric: metric.name(),
                    expected: self.labels.len(),
                    actual,
                });
            }
        }

        Ok(())
    }
}

/// Radar comparison of current field performance against targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceProfile {
    pub axes: Vec<String>,
    pub current: Vec<f64>,
    pub optimal: Vec<f64>,
}

impl PerformanceProfile {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, values) in [("current", &self.current), ("optimal", &self.optimal)] {
            if values.len() != self.axes.len() {
                return Err(ConfigError::ProfileLength {
                    profile: name,
                    expected: self.axes.len(),
                    actual: values.len(),
                });
            }
        }
        Ok(())
    }
}

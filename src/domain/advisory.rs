// Advisory domain models
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-metric bounds. Soil moisture and pH are minimums, the rest are maximums.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    pub min_soil_moisture: f64,
    pub min_ph: f64,
    pub max_humidity: f64,
    pub max_co2: f64,
    pub max_leaf_discoloration: f64,
    pub max_pest_spots: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Alert,
    Warning,
    Notice,
    Concern,
    ActionNeeded,
    BestPractice,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Alert => "Alert",
            Severity::Warning => "Warning",
            Severity::Notice => "Notice",
            Severity::Concern => "Concern",
            Severity::ActionNeeded => "Action needed",
            Severity::BestPractice => "Best practices",
        }
    }
}

/// The rule that produced a message, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryRule {
    SoilMoisture,
    Ph,
    Humidity,
    Co2,
    LeafDiscoloration,
    PestPressure,
    BestPractices,
}

impl AdvisoryRule {
    pub fn severity(&self) -> Severity {
        match self {
            AdvisoryRule::SoilMoisture => Severity::Critical,
            AdvisoryRule::Ph => Severity::Alert,
            AdvisoryRule::Humidity => Severity::Warning,
            AdvisoryRule::Co2 => Severity::Notice,
            AdvisoryRule::LeafDiscoloration => Severity::Concern,
            AdvisoryRule::PestPressure => Severity::ActionNeeded,
            AdvisoryRule::BestPractices => Severity::BestPractice,
        }
    }
}

/// A rendered advisory. Text is plain; the client inserts it as text, never markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryMessage {
    pub rule: AdvisoryRule,
    pub severity: Severity,
    pub icon: String,
    pub text: String,
}

impl AdvisoryMessage {
    pub fn new(rule: AdvisoryRule, icon: String, text: String) -> Self {
        Self {
            rule,
            severity: rule.severity(),
            icon,
            text,
        }
    }
}

impl fmt::Display for AdvisoryMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.icon, self.severity.label(), self.text)
    }
}

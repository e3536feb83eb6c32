// Advisory analyzer - Threshold rules over the field series
use crate::domain::advisory::{AdvisoryMessage, AdvisoryRule, ThresholdSet};
use crate::domain::metrics::FieldSamples;
use crate::infrastructure::config::{render_template, AdvisoryTemplate, AdvisoryTemplates};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct AdvisoryAnalyzer {
    templates: AdvisoryTemplates,
}

impl AdvisoryAnalyzer {
    pub fn new(templates: AdvisoryTemplates) -> Self {
        Self { templates }
    }

    /// Evaluate every rule in order. Each breach adds one message; the
    /// best-practices message is always appended last.
    pub fn analyze(&self, samples: &FieldSamples, thresholds: &ThresholdSet) -> Vec<AdvisoryMessage> {
        let mut advice = Vec::new();
        let t = &self.templates;

        let soil = &samples.soil_moisture;
        if soil.latest() < thresholds.min_soil_moisture {
            let vars = HashMap::from([
                ("value", format_value(soil.latest())),
                ("trend", soil.trend().to_string()),
                ("threshold", format_value(thresholds.min_soil_moisture)),
            ]);
            advice.push(render(AdvisoryRule::SoilMoisture, &t.soil_moisture, &vars));
        }

        let ph = &samples.ph;
        if ph.latest() < thresholds.min_ph {
            let vars = HashMap::from([
                ("value", format_value(ph.latest())),
                ("threshold", format_value(thresholds.min_ph)),
            ]);
            advice.push(render(AdvisoryRule::Ph, &t.ph, &vars));
        }

        let humidity = &samples.humidity;
        if humidity.any_above(thresholds.max_humidity) {
            let vars = HashMap::from([
                ("peak", format_value(humidity.peak())),
                ("threshold", format_value(thresholds.max_humidity)),
            ]);
            advice.push(render(AdvisoryRule::Humidity, &t.humidity, &vars));
        }

        let co2_peak = samples.co2.peak();
        if co2_peak > thresholds.max_co2 {
            let vars = HashMap::from([
                ("peak", format_value(co2_peak)),
                ("threshold", format_value(thresholds.max_co2)),
            ]);
            advice.push(render(AdvisoryRule::Co2, &t.co2, &vars));
        }

        let leaves = &samples.discolored_leaves;
        if leaves.latest() > thresholds.max_leaf_discoloration {
            let vars = HashMap::from([
                ("value", format_value(leaves.latest())),
                ("delta", format_delta(leaves.delta())),
                ("threshold", format_value(thresholds.max_leaf_discoloration)),
            ]);
            advice.push(render(AdvisoryRule::LeafDiscoloration, &t.leaf_discoloration, &vars));
        }

        let pests = &samples.pest_spots;
        if pests.latest() > thresholds.max_pest_spots {
            let vars = HashMap::from([
                ("value", format_value(pests.latest())),
                ("delta", format_delta(pests.delta())),
                ("threshold", format_value(thresholds.max_pest_spots)),
            ]);
            advice.push(render(AdvisoryRule::PestPressure, &t.pest_spots, &vars));
        }

        advice.push(render(AdvisoryRule::BestPractices, &t.best_practices, &HashMap::new()));

        tracing::debug!("Advisory analysis produced {} messages", advice.len());
        advice
    }
}

fn render(rule: AdvisoryRule, template: &AdvisoryTemplate, vars: &HashMap<&str, String>) -> AdvisoryMessage {
    AdvisoryMessage::new(rule, template.icon.clone(), render_template(&template.text, vars))
}

// Whole numbers print without a fraction: 41.0 -> "41", 5.9 -> "5.9"
fn format_value(value: f64) -> String {
    format!("{}", value)
}

fn format_delta(delta: f64) -> String {
    format!("{:+}", delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advisory::Severity;
    use crate::domain::metrics::MetricSeries;

    fn template(text: &str) -> AdvisoryTemplate {
        AdvisoryTemplate {
            icon: "*".to_string(),
            text: text.to_string(),
        }
    }

    fn analyzer() -> AdvisoryAnalyzer {
        AdvisoryAnalyzer::new(AdvisoryTemplates {
            soil_moisture: template("Soil moisture at ${value}% (trending ${trend})"),
            ph: template("Soil pH at ${value} (below ${threshold})"),
            humidity: template("Humidity exceeded ${threshold}%"),
            co2: template("CO2 peaked at ${peak} ppm (above ${threshold})"),
            leaf_discoloration: template("Leaf discoloration at ${value}% (${delta}% this week)"),
            pest_spots: template("Pest population at ${value}% (${delta}% this week)"),
            best_practices: template("Keep records"),
        })
    }

    fn series(values: &[f64]) -> MetricSeries {
        MetricSeries::new(values.to_vec())
    }

    fn week_samples() -> FieldSamples {
        FieldSamples {
            labels: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            soil_moisture: series(&[48.0, 47.0, 46.0, 44.0, 43.0, 42.0, 41.0]),
            ph: series(&[6.5, 6.4, 6.3, 6.2, 6.0, 5.9, 6.0]),
            humidity: series(&[70.0, 75.0, 80.0, 85.0, 88.0, 82.0, 78.0]),
            co2: series(&[800.0, 850.0, 950.0, 1100.0, 1200.0, 1150.0, 1000.0]),
            discolored_leaves: series(&[10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0]),
            pest_spots: series(&[5.0, 6.0, 7.0, 9.0, 10.0, 12.0, 13.0]),
        }
    }

    fn thresholds() -> ThresholdSet {
        ThresholdSet {
            min_soil_moisture: 45.0,
            min_ph: 6.2,
            max_humidity: 85.0,
            max_co2: 1100.0,
            max_leaf_discoloration: 20.0,
            max_pest_spots: 10.0,
        }
    }

    fn texts(messages: &[AdvisoryMessage]) -> Vec<&str> {
        messages.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let advice = analyzer().analyze(&week_samples(), &thresholds());

        assert_eq!(
            texts(&advice),
            vec![
                "Soil moisture at 41% (trending down)",
                "Soil pH at 6 (below 6.2)",
                "Humidity exceeded 85%",
                "CO2 peaked at 1200 ppm (above 1100)",
                "Leaf discoloration at 22% (+12% this week)",
                "Pest population at 13% (+8% this week)",
                "Keep records",
            ]
        );

        let severities: Vec<Severity> = advice.iter().map(|m| m.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Critical,
                Severity::Alert,
                Severity::Warning,
                Severity::Notice,
                Severity::Concern,
                Severity::ActionNeeded,
                Severity::BestPractice,
            ]
        );
    }

    #[test]
    fn test_soil_moisture_trend_down() {
        let advice = analyzer().analyze(&week_samples(), &thresholds());
        assert_eq!(advice[0].rule, AdvisoryRule::SoilMoisture);
        assert!(advice[0].text.contains("trending down"));
    }

    #[test]
    fn test_co2_cites_peak_not_latest() {
        let advice = analyzer().analyze(&week_samples(), &thresholds());
        let co2 = advice.iter().find(|m| m.rule == AdvisoryRule::Co2).unwrap();
        assert!(co2.text.contains("1200"));
    }

    #[test]
    fn test_humidity_within_bound_is_silent() {
        let mut samples = week_samples();
        samples.humidity = series(&[70.0, 75.0, 80.0, 85.0, 84.0, 82.0, 78.0]);

        let advice = analyzer().analyze(&samples, &thresholds());

        assert!(advice.iter().all(|m| m.rule != AdvisoryRule::Humidity));
        assert_eq!(advice.last().unwrap().rule, AdvisoryRule::BestPractices);
    }

    #[test]
    fn test_healthy_field_gets_best_practices_only() {
        let samples = FieldSamples {
            labels: vec!["Mon".into(), "Tue".into()],
            soil_moisture: series(&[50.0, 52.0]),
            ph: series(&[6.5, 6.6]),
            humidity: series(&[60.0, 65.0]),
            co2: series(&[700.0, 800.0]),
            discolored_leaves: series(&[5.0, 4.0]),
            pest_spots: series(&[2.0, 3.0]),
        };

        let advice = analyzer().analyze(&samples, &thresholds());

        assert_eq!(texts(&advice), vec!["Keep records"]);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut samples = week_samples();
        samples.soil_moisture = series(&[48.0, 47.0, 46.0, 44.0, 43.0, 42.0, 45.0]);
        samples.discolored_leaves = series(&[10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 20.0]);

        let advice = analyzer().analyze(&samples, &thresholds());
        let rules: Vec<AdvisoryRule> = advice.iter().map(|m| m.rule).collect();

        assert!(!rules.contains(&AdvisoryRule::SoilMoisture));
        assert!(!rules.contains(&AdvisoryRule::LeafDiscoloration));
    }

    #[test]
    fn test_negative_delta_keeps_sign() {
        let mut samples = week_samples();
        samples.pest_spots = series(&[15.0, 14.0, 13.0, 12.0, 12.0, 12.0, 12.0]);

        let advice = analyzer().analyze(&samples, &thresholds());
        let pests = advice.iter().find(|m| m.rule == AdvisoryRule::PestPressure).unwrap();

        assert_eq!(pests.text, "Pest population at 12% (-3% this week)");
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let analyzer = analyzer();
        let first = analyzer.analyze(&week_samples(), &thresholds());
        let second = analyzer.analyze(&week_samples(), &thresholds());
        assert_eq!(first, second);
    }
}

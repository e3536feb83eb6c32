// Configuration validation errors
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sample set has no day labels")]
    NoLabels,

    #[error("series {metric} has {actual} samples, expected {expected} (one per label)")]
    SeriesLength {
        metric: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("performance profile {profile} has {actual} values, expected {expected} (one per axis)")]
    ProfileLength {
        profile: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("chat rule #{index} has an empty keyword")]
    EmptyKeyword { index: usize },
}

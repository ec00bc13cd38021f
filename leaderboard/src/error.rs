use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("top size must be at least 1")]
    EmptyTop,

    #[error("window capacity {capacity} is smaller than top size {top_size}")]
    CapacityBelowTop { capacity: usize, top_size: usize },

    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
}

use crate::error::ConfigError;
use crate::types::{TOP_SIZE, WINDOW_CAPACITY};

pub const ENV_TOP_SIZE: &str = "LEADERBOARD_TOP_SIZE";
pub const ENV_WINDOW_CAPACITY: &str = "LEADERBOARD_WINDOW_CAPACITY";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeaderboardConfig {
    /// Length of each published list.
    pub top_size: usize,

    /// Maximum number of candidates each window keeps.
    ///
    /// The margin above `top_size` is what lets most updates skip
    /// recomputation. If updates push more than `window_capacity - top_size`
    /// candidates out of a window before it is recomputed, the window refills
    /// from the full quote set.
    pub window_capacity: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            top_size: TOP_SIZE,
            window_capacity: WINDOW_CAPACITY,
        }
    }
}

impl LeaderboardConfig {
    /// Read overrides from the environment, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), with variables resolved by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            top_size: parse_usize(&lookup, ENV_TOP_SIZE)?.unwrap_or(defaults.top_size),
            window_capacity: parse_usize(&lookup, ENV_WINDOW_CAPACITY)?
                .unwrap_or(defaults.window_capacity),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_size == 0 {
            return Err(ConfigError::EmptyTop);
        }
        if self.window_capacity < self.top_size {
            return Err(ConfigError::CapacityBelowTop {
                capacity: self.window_capacity,
                top_size: self.top_size,
            });
        }
        Ok(())
    }
}

fn parse_usize(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<usize>, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { key, value: raw }),
        None => Ok(None),
    }
}

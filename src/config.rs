//! Meter configuration
//!
//! Values are read from the environment, falling back to built-in defaults.

use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

pub const ENV_QUANTITY_MIN: &str = "PWD_QUANTITY_MIN";
pub const ENV_QUANTITY_MAX: &str = "PWD_QUANTITY_MAX";
pub const ENV_DEBOUNCE_MS: &str = "PWD_EVAL_DEBOUNCE_MS";

pub const DEFAULT_QUANTITY_MIN: u32 = 8;
pub const DEFAULT_QUANTITY_MAX: u32 = 50;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("Empty quantity range: {min} > {max}")]
    EmptyRange { min: u32, max: u32 },
}

/// Inclusive bounds for the requested password length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityRange {
    min: u32,
    max: u32,
}

impl QuantityRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::EmptyRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        self.as_range().contains(&value)
    }

    pub fn as_range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl Default for QuantityRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_QUANTITY_MIN,
            max: DEFAULT_QUANTITY_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterConfig {
    pub quantity: QuantityRange,
    /// Delay before an async evaluation runs.
    pub debounce: Duration,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            quantity: QuantityRange::default(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl MeterConfig {
    /// Builds the configuration from the environment.
    ///
    /// Priority for each value:
    /// 1. Environment variable (`PWD_QUANTITY_MIN`, `PWD_QUANTITY_MAX`, `PWD_EVAL_DEBOUNCE_MS`)
    /// 2. Built-in default
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but not a non-negative integer,
    /// or if the resulting quantity range is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let min = env_or(ENV_QUANTITY_MIN, DEFAULT_QUANTITY_MIN)?;
        let max = env_or(ENV_QUANTITY_MAX, DEFAULT_QUANTITY_MAX)?;
        let debounce_ms = env_or(ENV_DEBOUNCE_MS, DEFAULT_DEBOUNCE_MS)?;

        let config = Self {
            quantity: QuantityRange::new(min, max)?,
            debounce: Duration::from_millis(debounce_ms),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Meter config: quantity {}..={}, debounce {:?}",
            config.quantity.min(),
            config.quantity.max(),
            config.debounce
        );

        Ok(config)
    }
}

fn env_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(default);
    };
    match raw.trim().parse() {
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::Invalid { key, value: raw }),
    }
}

//! Generator configuration.
//!
//! [`IdConfig`] carries the per-call options of a sortable ID. [`GeneratorConfig`]
//! describes a whole generator and can be loaded from a JSON file:
//!
//! ```json
//! { "pool_size": 4096, "length": 24, "random_length": 21 }
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, IdError};
use crate::generator::{DEFAULT_LENGTH, DEFAULT_RANDOM_LENGTH, TIME_LEN};
use crate::pool::DEFAULT_POOL_SIZE;

/// Options for a single sortable ID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdConfig {
    /// Total ID length including the time component (default 20).
    pub length: Option<usize>,
}

impl IdConfig {
    pub fn with_length(length: usize) -> Self {
        Self {
            length: Some(length),
        }
    }

    /// Effective total length.
    pub fn length(&self) -> usize {
        self.length.unwrap_or(DEFAULT_LENGTH)
    }

    /// Check that the length leaves room for a random component.
    pub fn validate(&self) -> Result<(), IdError> {
        let length = self.length();
        if length <= TIME_LEN {
            return Err(IdError::InvalidLength {
                length,
                min: TIME_LEN + 1,
            });
        }
        Ok(())
    }
}

/// Settings for an [`IdGenerator`](crate::generator::IdGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Entropy pool capacity in bytes.
    pub pool_size: usize,
    /// Total length of sortable IDs.
    pub length: Option<usize>,
    /// Length of purely random IDs.
    pub random_length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            length: None,
            random_length: DEFAULT_RANDOM_LENGTH,
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Options for sortable IDs built from this config.
    pub fn id_config(&self) -> IdConfig {
        IdConfig {
            length: self.length,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        self.id_config().validate()?;
        Ok(())
    }
}

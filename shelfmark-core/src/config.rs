//! Catalog configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env::VarError;

/// Capacity used when nothing else is configured
pub const DEFAULT_CAPACITY: usize = 1000;

/// Environment variable overriding the catalog capacity
pub const CAPACITY_ENV: &str = "SHELFMARK_CAPACITY";

/// Settings fixed at catalog construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Maximum number of records the catalog holds
    pub capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CatalogConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var(std::env::var(CAPACITY_ENV))
    }

    fn from_var(value: Result<String, VarError>) -> Result<Self, ConfigError> {
        match value {
            Ok(value) => Ok(Self::with_capacity(parse_capacity(&value)?)),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidCapacity(format!(
                "{:?} is not valid unicode",
                raw
            ))),
        }
    }
}

/// Parse a capacity value (must be at least 1)
pub fn parse_capacity(s: &str) -> Result<usize, ConfigError> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidCapacity(format!("'{}' is not a valid number", s)))?;
    if n < 1 {
        Err(ConfigError::InvalidCapacity(
            "capacity must be at least 1".to_string(),
        ))
    } else {
        Ok(n)
    }
}

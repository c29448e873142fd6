//! Lot configuration structures.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;
use crate::util::serde::LotCapacity;

/// Environment variable holding the number of compact spaces.
pub const ENV_COMPACT_SPACES: &str = "CARPARK_COMPACT_SPACES";
/// Environment variable holding the number of large spaces.
pub const ENV_LARGE_SPACES: &str = "CARPARK_LARGE_SPACES";
/// Environment variable holding the audit buffer size.
pub const ENV_AUDIT_CAPACITY: &str = "CARPARK_AUDIT_CAPACITY";

const fn default_audit_capacity() -> usize {
    256
}

/// Lot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotConfig {
    /// Number of compact spaces.
    pub compact_spaces: u32,
    /// Number of large spaces.
    pub large_spaces: u32,
    /// Maximum audit events retained in memory.
    #[serde(default = "default_audit_capacity")]
    pub audit_capacity: usize,
}

impl LotConfig {
    /// Create a configuration with the default audit buffer.
    #[must_use]
    pub const fn new(compact_spaces: u32, large_spaces: u32) -> Self {
        Self {
            compact_spaces,
            large_spaces,
            audit_capacity: default_audit_capacity(),
        }
    }

    /// Capacity described by this configuration.
    #[must_use]
    pub const fn capacity(&self) -> LotCapacity {
        LotCapacity::new(self.compact_spaces, self.large_spaces)
    }

    /// Validate configuration values.
    ///
    /// A single class may have zero spaces, but the lot as a whole may not.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity().total() == 0 {
            return Err("lot must have at least one space".into());
        }
        if self.audit_capacity == 0 {
            return Err("audit_capacity must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a message on parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the process environment, reading a `.env`
    /// file first when one is present.
    ///
    /// # Errors
    ///
    /// Fails if a required variable is missing or any value is invalid.
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e).context("failed to read .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Fails if a required key is missing or any value is invalid.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read_u32 = |key: &str| -> AppResult<u32> {
            let raw = lookup(key).with_context(|| format!("{key} is not set"))?;
            raw.trim()
                .parse()
                .with_context(|| format!("{key} must be a non-negative integer, got `{raw}`"))
        };

        let audit_capacity: usize = match lookup(ENV_AUDIT_CAPACITY) {
            Some(raw) => raw.trim().parse().with_context(|| {
                format!("{ENV_AUDIT_CAPACITY} must be a non-negative integer, got `{raw}`")
            })?,
            None => default_audit_capacity(),
        };

        let cfg = Self {
            compact_spaces: read_u32(ENV_COMPACT_SPACES)?,
            large_spaces: read_u32(ENV_LARGE_SPACES)?,
            audit_capacity,
        };
        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }
}

use serde::Deserialize;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::error::{DemoError, Result};

/// Environment variable naming an optional TOML settings file.
pub const CONFIG_ENV_VAR: &str = "PATTERN_DEMOS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Forces colored headings on or off; terminal detection decides when unset.
    pub color: Option<bool>,
    /// Fixed seed for student id assignment; entropy when absent.
    pub seed: Option<u64>,
    pub student_ids: IdRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct IdRange {
    pub min: u32,
    pub max: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: None,
            seed: None,
            student_ids: IdRange::default(),
        }
    }
}

impl Default for IdRange {
    fn default() -> Self {
        Self { min: 1, max: 1000 }
    }
}

impl IdRange {
    pub fn as_range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reads the file named by `PATTERN_DEMOS_CONFIG`, or falls back to defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                tracing::debug!(path = ?path, "loading demo config");
                Self::load_from(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    /// Overrides `colored`'s terminal detection only when `color` is set.
    pub fn apply_color(&self) {
        if let Some(color) = self.color {
            colored::control::set_override(color);
        }
    }

    pub fn validate(&self) -> Result<()> {
        let ids = self.student_ids;
        if ids.min == 0 {
            return Err(DemoError::config("student_ids.min must be at least 1"));
        }
        if ids.min > ids.max {
            return Err(DemoError::config(format!(
                "student_ids.min ({}) is greater than student_ids.max ({})",
                ids.min, ids.max
            )));
        }
        Ok(())
    }
}

//! Config loading and validation.

use super::model::Config;
use crate::error::{Result, TradeDocsError};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TradeDocsError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config if the file exists, otherwise return defaults.
    ///
    /// A config file that exists but is invalid is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            TradeDocsError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            TradeDocsError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `output_dir` must be non-empty
    /// - `trader`, when set, must be non-blank
    /// - migration job names must be non-empty and unique
    /// - migration job patterns must compile
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.trim().is_empty() {
            return Err(TradeDocsError::UserError(
                "config validation failed: output_dir must not be empty".to_string(),
            ));
        }

        if let Some(trader) = &self.trader
            && trader.trim().is_empty()
        {
            return Err(TradeDocsError::UserError(
                "config validation failed: trader must not be blank when set".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for job in &self.migrations {
            if job.name.trim().is_empty() {
                return Err(TradeDocsError::UserError(
                    "config validation failed: migration names must be non-empty".to_string(),
                ));
            }
            if !names.insert(job.name.as_str()) {
                return Err(TradeDocsError::UserError(format!(
                    "config validation failed: duplicate migration name '{}'",
                    job.name
                )));
            }
            Regex::new(&job.pattern).map_err(|e| {
                TradeDocsError::UserError(format!(
                    "config validation failed: migration '{}' has an invalid pattern: {}",
                    job.name, e
                ))
            })?;
        }

        Ok(())
    }

    /// The trader identity for this invocation.
    pub fn effective_trader<'a>(&'a self, override_trader: Option<&'a str>) -> Option<&'a str> {
        override_trader
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .or(self.trader.as_deref())
    }
}


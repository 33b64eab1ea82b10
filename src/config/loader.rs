//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and provides access to engine configuration.
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml")?;
/// println!("Dates are entered as {}", loader.config().date_format);
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or unknown keys
    /// - The date format cannot round-trip a calendar date
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses configuration from YAML text; `source` names it in errors.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml("date_format: \"%Y-%m-%d\"", "inline").unwrap();
    /// assert_eq!(loader.config().date_format, "%Y-%m-%d");
    /// assert_eq!(loader.config().default_annual_leave, 14);
    /// ```
    pub fn from_yaml(content: &str, source: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::validate_date_format(&config.date_format).map_err(|message| {
            EngineError::ConfigParseError {
                path: source.to_string(),
                message,
            }
        })?;

        Ok(Self { config })
    }

    /// Checks that `format` is well formed and identifies a whole date.
    fn validate_date_format(format: &str) -> Result<(), String> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(format!("invalid date format '{}'", format));
        }

        let sample = NaiveDate::from_ymd_opt(2023, 11, 3)
            .ok_or_else(|| "sample date out of range".to_string())?;
        let rendered = sample.format(format).to_string();
        match NaiveDate::parse_from_str(&rendered, format) {
            Ok(parsed) if parsed == sample => Ok(()),
            _ => Err(format!(
                "date format '{}' does not identify a full calendar date",
                format
            )),
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_repository_config() {
        let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
        assert_eq!(loader.config(), &EngineConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConfigLoader::load("/nonexistent/engine.yaml").unwrap_err();
        assert_eq!(
            err,
            EngineError::ConfigNotFound {
                path: "/nonexistent/engine.yaml".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_yaml_reports_source() {
        let err = ConfigLoader::from_yaml("default_annual_leave: [", "bad.yaml").unwrap_err();
        match err {
            EngineError::ConfigParseError { path, .. } => assert_eq!(path, "bad.yaml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_entitlement_is_rejected() {
        assert!(ConfigLoader::from_yaml("default_annual_leave: -1", "inline").is_err());
    }

    #[test]
    fn test_malformed_date_format_is_rejected() {
        let err = ConfigLoader::from_yaml("date_format: \"%Q\"", "inline").unwrap_err();
        assert!(err.to_string().contains("invalid date format"));
    }

    #[test]
    fn test_partial_date_format_is_rejected() {
        let err = ConfigLoader::from_yaml("date_format: \"%m/%Y\"", "inline").unwrap_err();
        assert!(err.to_string().contains("full calendar date"));
    }

    #[test]
    fn test_iso_date_format_is_accepted() {
        let config = ConfigLoader::from_yaml("date_format: \"%Y-%m-%d\"", "inline")
            .unwrap()
            .into_config();
        assert_eq!(config.date_format, "%Y-%m-%d");
    }
}

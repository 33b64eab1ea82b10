//! Configuration types for the roster engine.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use serde::Deserialize;

/// Default date format for user input.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Default annual leave entitlement, in days.
pub const DEFAULT_ANNUAL_LEAVE: u32 = 14;

/// Engine settings.
///
/// Every field is optional in the file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// `chrono` format string used to parse dates in commands.
    pub date_format: String,
    /// Entitlement given to employees added without an explicit one.
    pub default_annual_leave: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            default_annual_leave: DEFAULT_ANNUAL_LEAVE,
        }
    }
}

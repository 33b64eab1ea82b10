//! Configuration loading and management for the Roster Engine.
//!
//! This module provides functionality to load engine settings from a YAML
//! file: the date format accepted in commands and the default annual leave
//! entitlement.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Default entitlement: {}", config.config().default_annual_leave);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_ANNUAL_LEAVE, DEFAULT_DATE_FORMAT, EngineConfig};

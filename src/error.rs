//! Error types for the Roster Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parsing or executing
//! roster commands. Every variant renders a fixed, user-facing message from
//! the [`messages`](crate::messages) catalog or a field-specific template.

use thiserror::Error;

use crate::messages::{
    MESSAGE_DUPLICATE_EMPLOYEE, MESSAGE_DUPLICATE_FIELDS, MESSAGE_EMPLOYEE_NOT_FOUND,
    MESSAGE_INVALID_COMMAND_FORMAT, MESSAGE_INVALID_EMPLOYEE_DISPLAYED_INDEX,
    MESSAGE_UNKNOWN_COMMAND,
};

/// The main error type for the Roster Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::InvalidDisplayedIndex { index: 3, visible: 1 };
/// assert_eq!(error.to_string(), "The employee index provided is invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The index is outside the bounds of the currently displayed employees.
    #[error("{}", MESSAGE_INVALID_EMPLOYEE_DISPLAYED_INDEX)]
    InvalidDisplayedIndex {
        /// The zero-based index that was requested.
        index: usize,
        /// The number of employees in the displayed view.
        visible: usize,
    },

    /// A field value failed its format rule.
    #[error("Invalid {field}: {message}")]
    InvalidField {
        /// The field that was invalid.
        field: String,
        /// The constraint the value must satisfy.
        message: String,
    },

    /// The employee targeted by a replace or remove is not in the roster.
    #[error("{}", MESSAGE_EMPLOYEE_NOT_FOUND)]
    EmployeeNotFound,

    /// The roster already holds an employee with the same name.
    #[error("{}", MESSAGE_DUPLICATE_EMPLOYEE)]
    DuplicateEmployee,

    /// The command word was recognised but its arguments were malformed.
    #[error("{}{}", MESSAGE_INVALID_COMMAND_FORMAT, .usage)]
    InvalidCommandFormat {
        /// Usage text for the command.
        usage: String,
    },

    /// The command word is not recognised.
    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,

    /// A single-valued prefix was supplied more than once.
    #[error("{}{}", MESSAGE_DUPLICATE_FIELDS, .prefixes)]
    DuplicatePrefixes {
        /// The repeated prefixes, space separated.
        prefixes: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Creates an [`EngineError::InvalidField`] for the named field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an [`EngineError::InvalidCommandFormat`] carrying `usage`.
    pub fn invalid_format(usage: impl Into<String>) -> Self {
        Self::InvalidCommandFormat {
            usage: usage.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_displays_catalog_message() {
        let error = EngineError::InvalidDisplayedIndex {
            index: 1,
            visible: 1,
        };
        assert_eq!(error.to_string(), MESSAGE_INVALID_EMPLOYEE_DISPLAYED_INDEX);
    }

    #[test]
    fn test_invalid_field_displays_field_and_message() {
        let error = EngineError::invalid_field("phone", "must contain only digits");
        assert_eq!(error.to_string(), "Invalid phone: must contain only digits");
    }

    #[test]
    fn test_invalid_command_format_appends_usage() {
        let error = EngineError::invalid_format("list: Lists all employees.");
        assert_eq!(
            error.to_string(),
            "Invalid command format! \nlist: Lists all employees."
        );
    }

    #[test]
    fn test_duplicate_prefixes_lists_prefixes() {
        let error = EngineError::DuplicatePrefixes {
            prefixes: "n/ p/".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Multiple values specified for the following single-valued field(s): n/ p/"
        );
    }

    #[test]
    fn test_store_errors_display_catalog_messages() {
        assert_eq!(
            EngineError::EmployeeNotFound.to_string(),
            MESSAGE_EMPLOYEE_NOT_FOUND
        );
        assert_eq!(
            EngineError::DuplicateEmployee.to_string(),
            MESSAGE_DUPLICATE_EMPLOYEE
        );
        assert_eq!(EngineError::UnknownCommand.to_string(), "Unknown command");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert_eq!(propagates_error(), Err(EngineError::EmployeeNotFound));
    }
}

//! Success payload returned by command execution.

use std::fmt;

use serde::Serialize;

/// The outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Message shown to the user.
    pub feedback_to_user: String,
}

impl CommandResult {
    /// Creates a result carrying `feedback`.
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback.into(),
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback_to_user)
    }
}

//! Command execution for the Roster Engine.
//!
//! Every operation on the roster is a [`Command`] variant wrapping a value
//! object built from already validated arguments. [`Command::execute`]
//! dispatches to the variant, which validates against the roster's current
//! state before mutating anything, so a failed command leaves the roster
//! exactly as it was.
//!
//! Commands that take an [`Index`] resolve it against the filtered view, not
//! the full roster.

mod add;
mod add_leave;
mod clear;
mod delete;
mod edit;
mod find;
mod index;
mod list;
mod mark_attendance;
mod result;

#[cfg(test)]
pub(crate) mod fixtures;

pub use add::AddCommand;
pub use add_leave::AddLeaveCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditEmployeeDescriptor};
pub use find::FindCommand;
pub use index::Index;
pub use list::ListCommand;
pub use mark_attendance::MarkAttendanceCommand;
pub use result::CommandResult;

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;
use crate::roster::Roster;

/// A fully constructed roster command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new employee.
    Add(AddCommand),
    /// Delete the employee at a displayed index.
    Delete(DeleteCommand),
    /// Overwrite selected fields of the employee at a displayed index.
    Edit(EditCommand),
    /// Record leave for the employee at a displayed index.
    AddLeave(AddLeaveCommand),
    /// Record attendance for the employee at a displayed index.
    MarkAttendance(MarkAttendanceCommand),
    /// Filter the displayed employees by name keywords.
    Find(FindCommand),
    /// Show every employee.
    List(ListCommand),
    /// Remove every employee.
    Clear(ClearCommand),
}

impl Command {
    /// Returns the command word that selects this command.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => AddCommand::COMMAND_WORD,
            Self::Delete(_) => DeleteCommand::COMMAND_WORD,
            Self::Edit(_) => EditCommand::COMMAND_WORD,
            Self::AddLeave(_) => AddLeaveCommand::COMMAND_WORD,
            Self::MarkAttendance(_) => MarkAttendanceCommand::COMMAND_WORD,
            Self::Find(_) => FindCommand::COMMAND_WORD,
            Self::List(_) => ListCommand::COMMAND_WORD,
            Self::Clear(_) => ClearCommand::COMMAND_WORD,
        }
    }

    /// Executes the command against `roster`.
    ///
    /// On failure the roster is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::commands::{Command, Index, DeleteCommand};
    /// use roster_engine::roster::Roster;
    ///
    /// let mut roster = Roster::new();
    /// let command = Command::Delete(DeleteCommand::new(Index::from_zero_based(0)));
    ///
    /// let error = command.execute(&mut roster).unwrap_err();
    /// assert_eq!(error.to_string(), "The employee index provided is invalid");
    /// ```
    pub fn execute(&self, roster: &mut Roster) -> EngineResult<CommandResult> {
        let execution_id = Uuid::new_v4();
        info!(
            execution_id = %execution_id,
            command = self.word(),
            "Executing command"
        );

        let outcome = match self {
            Self::Add(command) => command.execute(roster),
            Self::Delete(command) => command.execute(roster),
            Self::Edit(command) => command.execute(roster),
            Self::AddLeave(command) => command.execute(roster),
            Self::MarkAttendance(command) => command.execute(roster),
            Self::Find(command) => command.execute(roster),
            Self::List(command) => command.execute(roster),
            Self::Clear(command) => command.execute(roster),
        };

        match &outcome {
            Ok(_) => info!(
                execution_id = %execution_id,
                command = self.word(),
                total = roster.len(),
                visible = roster.filtered_len(),
                "Command completed"
            ),
            Err(err) => warn!(
                execution_id = %execution_id,
                command = self.word(),
                error = %err,
                "Command failed"
            ),
        }

        outcome
    }
}

/// Returns a copy of the employee at `index` of the filtered view.
///
/// The bound is the filtered view's length; the full roster's size plays
/// no part.
fn employee_at(roster: &Roster, index: Index) -> EngineResult<Employee> {
    roster
        .filtered_get(index.zero_based())
        .cloned()
        .ok_or(EngineError::InvalidDisplayedIndex {
            index: index.zero_based(),
            visible: roster.filtered_len(),
        })
}

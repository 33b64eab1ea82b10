//! Deletes an employee from the roster.

use crate::error::EngineResult;
use crate::messages::format_employee;
use crate::roster::Roster;

use super::{CommandResult, Index, employee_at};

/// Removes the employee at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    /// Command word.
    pub const COMMAND_WORD: &'static str = "delete";

    /// Usage text.
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the employee identified by the \
         index number used in the displayed employee list.\n\
         Parameters: INDEX (must be a positive integer)\n\
         Example: delete 1";

    /// Success message prefix; followed by the deleted employee.
    pub const MESSAGE_SUCCESS: &'static str = "Deleted Employee: ";

    /// Creates a command deleting the employee at `index`.
    pub fn new(index: Index) -> Self {
        Self { index }
    }

    /// Executes the command against `roster`.
    pub fn execute(&self, roster: &mut Roster) -> EngineResult<CommandResult> {
        let target = employee_at(roster, self.index)?;
        roster.remove(&target)?;
        Ok(CommandResult::new(format!(
            "{}{}",
            Self::MESSAGE_SUCCESS,
            format_employee(&target)
        )))
    }
}

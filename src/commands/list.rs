//! Shows every employee.

use crate::error::EngineResult;
use crate::roster::{EmployeePredicate, Roster};

use super::CommandResult;

/// Clears any active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCommand;

impl ListCommand {
    /// Command word.
    pub const COMMAND_WORD: &'static str = "list";

    /// Success message.
    pub const MESSAGE_SUCCESS: &'static str = "Listed all employees";

    /// Executes the command against `roster`.
    pub fn execute(&self, roster: &mut Roster) -> EngineResult<CommandResult> {
        roster.set_filter(EmployeePredicate::ShowAll);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

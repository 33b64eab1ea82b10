//! Removes every employee.

use crate::error::EngineResult;
use crate::roster::Roster;

use super::CommandResult;

/// Empties the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearCommand;

impl ClearCommand {
    /// Command word.
    pub const COMMAND_WORD: &'static str = "clear";

    /// Success message.
    pub const MESSAGE_SUCCESS: &'static str = "Roster has been cleared!";

    /// Executes the command against `roster`.
    pub fn execute(&self, roster: &mut Roster) -> EngineResult<CommandResult> {
        roster.clear();
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

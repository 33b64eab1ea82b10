//! Filters the displayed employees by name.

use crate::error::EngineResult;
use crate::messages::employees_listed;
use crate::roster::{EmployeePredicate, Roster};

use super::CommandResult;

/// Shows only the employees matching a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: EmployeePredicate,
}

impl FindCommand {
    /// Command word.
    pub const COMMAND_WORD: &'static str = "find";

    /// Usage text.
    pub const MESSAGE_USAGE: &'static str = "find: Finds all employees whose names contain any \
         of the specified keywords (case-insensitive) and displays them as a list with index \
         numbers.\n\
         Parameters: KEYWORD [MORE_KEYWORDS]...\n\
         Example: find alice bob charlie";

    /// Creates a command applying `predicate`.
    pub fn new(predicate: EmployeePredicate) -> Self {
        Self { predicate }
    }

    /// Executes the command against `roster`.
    pub fn execute(&self, roster: &mut Roster) -> EngineResult<CommandResult> {
        roster.set_filter(self.predicate.clone());
        Ok(CommandResult::new(employees_listed(roster.filtered_len())))
    }
}

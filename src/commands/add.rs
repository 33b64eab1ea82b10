//! Adds an employee to the roster.

use crate::error::{EngineError, EngineResult};
use crate::messages::format_employee;
use crate::models::Employee;
use crate::roster::Roster;

use super::CommandResult;

/// Appends a new employee to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    employee: Employee,
}

impl AddCommand {
    /// Command word.
    pub const COMMAND_WORD: &'static str = "add";

    /// Usage text.
    pub const MESSAGE_USAGE: &'static str = "add: Adds an employee to the roster.\n\
         Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS b/BANK_ACCOUNT jd/JOIN_DATE s/SALARY \
         [al/ANNUAL_LEAVE]\n\
         Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
         b/1234567890 jd/12/02/2023 s/3500.00 al/14";

    /// Success message prefix; followed by the new employee.
    pub const MESSAGE_SUCCESS: &'static str = "New employee added: ";

    /// Creates a command adding `employee`.
    pub fn new(employee: Employee) -> Self {
        Self { employee }
    }

    /// Executes the command against `roster`.
    pub fn execute(&self, roster: &mut Roster) -> EngineResult<CommandResult> {
        if roster.contains_same_employee(&self.employee) {
            return Err(EngineError::DuplicateEmployee);
        }

        roster.add(self.employee.clone());
        Ok(CommandResult::new(format!(
            "{}{}",
            Self::MESSAGE_SUCCESS,
            format_employee(&self.employee)
        )))
    }
}

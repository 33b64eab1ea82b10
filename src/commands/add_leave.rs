//! Records annual leave for an employee.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::messages::{format_employee, leave_status};
use crate::roster::Roster;

use super::{CommandResult, Index, employee_at};

/// Adds one day, or an inclusive range of days, of leave to the employee at
/// a displayed index.
///
/// A single date and a range are the same command; a range is equivalent to
/// adding each of its days individually. Dates already recorded are not
/// counted twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLeaveCommand {
    index: Index,
    start: NaiveDate,
    end: Option<NaiveDate>,
}

impl AddLeaveCommand {
    /// Command word.
    pub const COMMAND_WORD: &'static str = "addleave";

    /// Usage text.
    pub const MESSAGE_USAGE: &'static str = "addleave: Adds annual leave for the employee \
         identified by the index number used in the displayed employee list.\n\
         Parameters: INDEX (must be a positive integer) from/START_DATE [to/END_DATE]\n\
         Example: addleave 1 from/03/11/2023 to/05/11/2023";

    /// Success message prefix; followed by the employee and leave status.
    pub const MESSAGE_SUCCESS: &'static str = "Leave added for employee: ";

    /// Creates a command adding leave on a single date.
    pub fn new(index: Index, date: NaiveDate) -> Self {
        Self {
            index,
            start: date,
            end: None,
        }
    }

    /// Creates a command adding leave on every date from `start` to `end`.
    pub fn range(index: Index, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            index,
            start,
            end: Some(end),
        }
    }

    /// Executes the command against `roster`.
    pub fn execute(&self, roster: &mut Roster) -> EngineResult<CommandResult> {
        let target = employee_at(roster, self.index)?;

        let mut updated = target.clone();
        match self.end {
            Some(end) => {
                updated.annual_leave.add_leave_range(self.start, end);
            }
            None => {
                updated.annual_leave.add_leave(self.start);
            }
        }

        let feedback = format!(
            "{}{}{}",
            Self::MESSAGE_SUCCESS,
            format_employee(&updated),
            leave_status(&updated.annual_leave)
        );
        roster.replace(&target, updated)?;
        Ok(CommandResult::new(feedback))
    }
}

//! Records attendance for an employee.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::messages::{attendance_status, format_employee};
use crate::models::AttendanceType;
use crate::roster::Roster;

use super::{CommandResult, Index, employee_at};

/// Appends an attendance entry to the employee at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkAttendanceCommand {
    index: Index,
    date: NaiveDate,
    status: AttendanceType,
}

impl MarkAttendanceCommand {
    /// Command word.
    pub const COMMAND_WORD: &'static str = "mark";

    /// Usage text.
    pub const MESSAGE_USAGE: &'static str = "mark: Marks the attendance of the employee \
         identified by the index number used in the displayed employee list.\n\
         Parameters: INDEX (must be a positive integer) at/ATTENDANCE_TYPE [d/DATE]\n\
         Example: mark 1 at/present d/03/11/2023";

    /// Success message prefix; followed by the employee and attendance status.
    pub const MESSAGE_SUCCESS: &'static str = "Attendance marked for employee: ";

    /// Creates a command recording `status` on `date`.
    pub fn new(index: Index, date: NaiveDate, status: AttendanceType) -> Self {
        Self {
            index,
            date,
            status,
        }
    }

    /// Executes the command against `roster`.
    pub fn execute(&self, roster: &mut Roster) -> EngineResult<CommandResult> {
        let target = employee_at(roster, self.index)?;

        let mut updated = target.clone();
        updated.attendance.mark(self.date, self.status);

        let feedback = format!(
            "{}{}{}",
            Self::MESSAGE_SUCCESS,
            format_employee(&updated),
            attendance_status(&updated.attendance)
        );
        roster.replace(&target, updated)?;
        Ok(CommandResult::new(feedback))
    }
}

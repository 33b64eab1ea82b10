//! User-facing message catalog and employee formatting.
//!
//! Failure messages are fixed strings; success messages are built by the
//! commands from these templates plus facts about the updated employee.

use crate::models::{AnnualLeave, Attendance, Employee};

/// Message for an unrecognised command word.
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

/// Prefix for malformed command arguments; followed by the command usage.
pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";

/// Message for an index outside the displayed employees.
pub const MESSAGE_INVALID_EMPLOYEE_DISPLAYED_INDEX: &str = "The employee index provided is invalid";

/// Prefix for repeated single-valued prefixes.
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";

/// Message for adding or renaming to an existing employee's name.
pub const MESSAGE_DUPLICATE_EMPLOYEE: &str = "This employee already exists in the roster";

/// Message for a replace or remove whose target is no longer on the roster.
pub const MESSAGE_EMPLOYEE_NOT_FOUND: &str = "The employee could not be found in the roster";

/// Date format used when displaying dates.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Formats the number of employees listed after filtering.
pub fn employees_listed(count: usize) -> String {
    format!("{count} employees listed!")
}

/// Formats an employee for display in command results.
///
/// # Example
///
/// ```
/// use roster_engine::messages::format_employee;
/// use roster_engine::models::{AnnualLeave, Attendance, Employee};
/// use chrono::NaiveDate;
///
/// let amy = Employee {
///     name: "Amy Bee".parse().unwrap(),
///     phone: "11111111".parse().unwrap(),
///     email: "amy@example.com".parse().unwrap(),
///     address: "Block 312, Amy Street 1".parse().unwrap(),
///     bank_account: "1234567890234".parse().unwrap(),
///     join_date: NaiveDate::from_ymd_opt(2003, 5, 10).unwrap(),
///     salary: "4000".parse().unwrap(),
///     annual_leave: AnnualLeave::new(4),
///     attendance: Attendance::new(),
/// };
///
/// assert_eq!(
///     format_employee(&amy),
///     "Amy Bee; Phone: 11111111; Email: amy@example.com; Address: Block 312, Amy Street 1; \
///      Bank Account: 1234567890234; Join Date: 10/05/2003; Salary: 4000.00; Annual Leave: 4"
/// );
/// ```
pub fn format_employee(employee: &Employee) -> String {
    format!(
        "{}; Phone: {}; Email: {}; Address: {}; Bank Account: {}; Join Date: {}; Salary: {}; \
         Annual Leave: {}",
        employee.name,
        employee.phone,
        employee.email,
        employee.address,
        employee.bank_account,
        employee.join_date.format(DISPLAY_DATE_FORMAT),
        employee.salary,
        employee.annual_leave.entitlement,
    )
}

/// Describes the cumulative leave status of an employee.
pub fn leave_status(annual_leave: &AnnualLeave) -> String {
    let dates: Vec<String> = annual_leave
        .taken_dates()
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
        .collect();
    let listed = if dates.is_empty() {
        "none".to_string()
    } else {
        dates.join(", ")
    };
    format!(
        "\nLeave used: {} of {} day(s), {} remaining\nDates on leave: {}",
        annual_leave.used_days(),
        annual_leave.entitlement,
        annual_leave.remaining_days(),
        listed
    )
}

/// Describes the cumulative attendance status of an employee.
pub fn attendance_status(attendance: &Attendance) -> String {
    let summary = attendance.summary();
    format!(
        "\nAttendance: {} present, {} absent, {} late",
        summary.present, summary.absent, summary.late
    )
}

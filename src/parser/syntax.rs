//! Argument prefixes of the command syntax.

use std::fmt;

/// A field prefix such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    /// Returns the prefix text.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Employee name.
pub const PREFIX_NAME: Prefix = Prefix("n/");
/// Phone number.
pub const PREFIX_PHONE: Prefix = Prefix("p/");
/// Email address.
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
/// Postal address.
pub const PREFIX_ADDRESS: Prefix = Prefix("a/");
/// Bank account number.
pub const PREFIX_BANK_ACCOUNT: Prefix = Prefix("b/");
/// Join date.
pub const PREFIX_JOIN_DATE: Prefix = Prefix("jd/");
/// Salary.
pub const PREFIX_SALARY: Prefix = Prefix("s/");
/// Annual leave entitlement.
pub const PREFIX_ANNUAL_LEAVE: Prefix = Prefix("al/");
/// Attendance type.
pub const PREFIX_ATTENDANCE_TYPE: Prefix = Prefix("at/");
/// Attendance date.
pub const PREFIX_DATE: Prefix = Prefix("d/");
/// First day of leave.
pub const PREFIX_FROM: Prefix = Prefix("from/");
/// Last day of leave.
pub const PREFIX_TO: Prefix = Prefix("to/");

/// Prefixes of the employee fields.
pub const EMPLOYEE_FIELD_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_BANK_ACCOUNT,
    PREFIX_JOIN_DATE,
    PREFIX_SALARY,
    PREFIX_ANNUAL_LEAVE,
];

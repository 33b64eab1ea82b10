//! Employee model.
//!
//! This module defines the [`Employee`] record held by the roster. An
//! employee has no surrogate key; its identity is its position in the
//! roster, and two employees are equal only when every field, including
//! leave and attendance state, is equal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Address, AnnualLeave, Attendance, BankAccount, Email, Name, Phone, Salary};

/// Represents an employee on the roster.
///
/// Commands never mutate an employee held by the roster. They clone the
/// current record, change the clone, and hand it to
/// [`Roster::replace`](crate::roster::Roster::replace).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's full name.
    pub name: Name,
    /// Contact phone number.
    pub phone: Phone,
    /// Contact email address.
    pub email: Email,
    /// Postal address.
    pub address: Address,
    /// Bank account number for salary payments.
    pub bank_account: BankAccount,
    /// The date the employee joined.
    pub join_date: NaiveDate,
    /// Monthly salary.
    pub salary: Salary,
    /// Leave entitlement and leave taken.
    pub annual_leave: AnnualLeave,
    /// Attendance log.
    #[serde(default)]
    pub attendance: Attendance,
}

impl Employee {
    /// Returns true if both employees have the same name.
    ///
    /// This is the identity used to reject duplicate employees; it is weaker
    /// than equality.
    ///
    /// # Examples
    ///
    /// ```
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
    ///     salary: "4000.00".parse().unwrap(),
    ///     annual_leave: AnnualLeave::new(4),
    ///     attendance: Attendance::new(),
    /// };
    ///
    /// let mut moved = amy.clone();
    /// moved.address = "Block 1, New Street".parse().unwrap();
    ///
    /// assert!(amy.is_same_employee(&moved));
    /// assert_ne!(amy, moved);
    /// ```
    pub fn is_same_employee(&self, other: &Employee) -> bool {
        self.name == other.name
    }
}

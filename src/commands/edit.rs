//! Edits selected fields of an employee.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::messages::format_employee;
use crate::models::{Address, BankAccount, Email, Employee, Name, Phone, Salary};
use crate::roster::Roster;

use super::{CommandResult, Index, employee_at};

/// Partial update naming only the fields to change.
///
/// Unset fields keep their current value. Setting `annual_leave` changes
/// the entitlement only; leave already taken is kept.
///
/// # Example
///
/// ```
/// use roster_engine::commands::EditEmployeeDescriptor;
///
/// let descriptor = EditEmployeeDescriptor {
///     phone: Some("91234567".parse().unwrap()),
///     ..Default::default()
/// };
/// assert!(descriptor.is_any_field_edited());
/// assert!(!EditEmployeeDescriptor::default().is_any_field_edited());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditEmployeeDescriptor {
    /// New name.
    pub name: Option<Name>,
    /// New phone number.
    pub phone: Option<Phone>,
    /// New email address.
    pub email: Option<Email>,
    /// New address.
    pub address: Option<Address>,
    /// New bank account.
    pub bank_account: Option<BankAccount>,
    /// New join date.
    pub join_date: Option<NaiveDate>,
    /// New salary.
    pub salary: Option<Salary>,
    /// New annual leave entitlement.
    pub annual_leave: Option<u32>,
}

impl EditEmployeeDescriptor {
    /// Returns true if at least one field is set.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.bank_account.is_some()
            || self.join_date.is_some()
            || self.salary.is_some()
            || self.annual_leave.is_some()
    }

    /// Returns a copy of `target` with the set fields overwritten.
    pub fn apply(&self, target: &Employee) -> Employee {
        let annual_leave = match self.annual_leave {
            Some(entitlement) => target.annual_leave.with_entitlement(entitlement),
            None => target.annual_leave.clone(),
        };

        Employee {
            name: self.name.clone().unwrap_or_else(|| target.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| target.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| target.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| target.address.clone()),
            bank_account: self
                .bank_account
                .clone()
                .unwrap_or_else(|| target.bank_account.clone()),
            join_date: self.join_date.unwrap_or(target.join_date),
            salary: self.salary.unwrap_or(target.salary),
            annual_leave,
            attendance: target.attendance.clone(),
        }
    }
}

/// Overwrites the fields named by a descriptor on the employee at a
/// displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditEmployeeDescriptor,
}

impl EditCommand {
    /// Command word.
    pub const COMMAND_WORD: &'static str = "edit";

    /// Usage text.
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the employee \
         identified by the index number used in the displayed employee list. \
         Existing values will be overwritten by the input values.\n\
         Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] \
         [a/ADDRESS] [b/BANK_ACCOUNT] [jd/JOIN_DATE] [s/SALARY] [al/ANNUAL_LEAVE]\n\
         Example: edit 1 p/91234567 e/johndoe@example.com";

    /// Success message prefix; followed by the edited employee.
    pub const MESSAGE_SUCCESS: &'static str = "Edited Employee: ";

    /// Message when no field was supplied.
    pub const MESSAGE_NOT_EDITED: &'static str = "At least one field to edit must be provided.";

    /// Creates an edit of the employee at `index`.
    pub fn new(index: Index, descriptor: EditEmployeeDescriptor) -> Self {
        Self { index, descriptor }
    }

    /// Executes the command against `roster`.
    pub fn execute(&self, roster: &mut Roster) -> EngineResult<CommandResult> {
        let target = employee_at(roster, self.index)?;
        let edited = self.descriptor.apply(&target);

        if !target.is_same_employee(&edited) && roster.contains_same_employee(&edited) {
            return Err(EngineError::DuplicateEmployee);
        }

        let feedback = format!("{}{}", Self::MESSAGE_SUCCESS, format_employee(&edited));
        roster.replace(&target, edited)?;
        Ok(CommandResult::new(feedback))
    }
}

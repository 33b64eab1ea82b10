//! The roster store: the full employee sequence and its filtered view.

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::EmployeePredicate;

/// Ordered collection of employees with a filtered view.
///
/// Insertion order is the canonical order. The filtered view holds the
/// positions of the employees matching the active predicate and is rebuilt
/// from scratch after every filter change and every structural mutation, so
/// it can never refer to a replaced or removed record.
///
/// Indices given to commands always address the filtered view.
///
/// # Example
///
/// ```
/// use roster_engine::models::{AnnualLeave, Attendance, Employee};
/// use roster_engine::roster::{EmployeePredicate, Roster};
/// use chrono::NaiveDate;
///
/// fn employee(name: &str) -> Employee {
///     Employee {
///         name: name.parse().unwrap(),
///         phone: "11111111".parse().unwrap(),
///         email: "someone@example.com".parse().unwrap(),
///         address: "Block 1, Some Street".parse().unwrap(),
///         bank_account: "12345678".parse().unwrap(),
///         join_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///         salary: "3000.00".parse().unwrap(),
///         annual_leave: AnnualLeave::new(14),
///         attendance: Attendance::new(),
///     }
/// }
///
/// let mut roster = Roster::from_employees(vec![employee("Amy Bee"), employee("Bob Choo")]);
/// roster.set_filter(EmployeePredicate::name_keywords("bob"));
///
/// assert_eq!(roster.all().len(), 2);
/// assert_eq!(roster.filtered_len(), 1);
/// assert_eq!(roster.filtered_get(0).unwrap().name.as_str(), "Bob Choo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    predicate: EmployeePredicate,
    visible: Vec<usize>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster holding `employees` in the given order, showing all.
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        let mut roster = Self {
            employees,
            predicate: EmployeePredicate::ShowAll,
            visible: Vec::new(),
        };
        roster.refresh();
        roster
    }

    /// Returns the full roster in canonical order.
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of employees in the full roster.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the full roster is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns the employees in the filtered view, in canonical order.
    pub fn filtered(&self) -> Vec<&Employee> {
        self.visible
            .iter()
            .filter_map(|&position| self.employees.get(position))
            .collect()
    }

    /// Number of employees in the filtered view.
    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    /// Returns the employee at `index` of the filtered view.
    pub fn filtered_get(&self, index: usize) -> Option<&Employee> {
        self.visible
            .get(index)
            .and_then(|&position| self.employees.get(position))
    }

    /// Returns the active predicate.
    pub fn predicate(&self) -> &EmployeePredicate {
        &self.predicate
    }

    /// Replaces the active predicate and rebuilds the filtered view.
    pub fn set_filter(&mut self, predicate: EmployeePredicate) {
        self.predicate = predicate;
        self.refresh();
    }

    /// Returns true if an employee equal to `employee` is on the roster.
    pub fn contains(&self, employee: &Employee) -> bool {
        self.employees.contains(employee)
    }

    /// Returns true if an employee with the same name is on the roster.
    pub fn contains_same_employee(&self, employee: &Employee) -> bool {
        self.employees
            .iter()
            .any(|existing| existing.is_same_employee(employee))
    }

    /// Appends `employee` to the end of the roster.
    pub fn add(&mut self, employee: Employee) {
        self.employees.push(employee);
        self.refresh();
    }

    /// Substitutes `edited` for the first employee equal to `target`.
    ///
    /// Fails with [`EngineError::EmployeeNotFound`] if no employee equals
    /// `target`; the roster is left unchanged in that case.
    pub fn replace(&mut self, target: &Employee, edited: Employee) -> EngineResult<()> {
        let position = self.position_of(target)?;
        if let Some(slot) = self.employees.get_mut(position) {
            *slot = edited;
        }
        self.refresh();
        Ok(())
    }

    /// Removes the first employee equal to `target`.
    pub fn remove(&mut self, target: &Employee) -> EngineResult<()> {
        let position = self.position_of(target)?;
        self.employees.remove(position);
        self.refresh();
        Ok(())
    }

    /// Removes every employee and resets the filter.
    pub fn clear(&mut self) {
        self.employees.clear();
        self.predicate = EmployeePredicate::ShowAll;
        self.refresh();
    }

    fn position_of(&self, target: &Employee) -> EngineResult<usize> {
        self.employees
            .iter()
            .position(|employee| employee == target)
            .ok_or_else(|| {
                warn!(name = %target.name, "Employee not found in roster");
                EngineError::EmployeeNotFound
            })
    }

    fn refresh(&mut self) {
        let predicate = &self.predicate;
        self.visible = self
            .employees
            .iter()
            .enumerate()
            .filter(|(_, employee)| predicate.matches(employee))
            .map(|(position, _)| position)
            .collect();
        debug!(
            total = self.employees.len(),
            visible = self.visible.len(),
            "Recomputed filtered view"
        );
    }
}

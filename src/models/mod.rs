//! Core data models for the Roster Engine.
//!
//! This module contains the employee record, its validated value fields,
//! and the annual leave and attendance sub-records.

mod annual_leave;
mod attendance;
mod employee;
mod fields;

pub use annual_leave::AnnualLeave;
pub use attendance::{
    ATTENDANCE_TYPE_CONSTRAINTS, Attendance, AttendanceRecord, AttendanceSummary, AttendanceType,
};
pub use employee::Employee;
pub use fields::{
    ADDRESS_CONSTRAINTS, Address, BANK_ACCOUNT_CONSTRAINTS, BankAccount, EMAIL_CONSTRAINTS, Email,
    NAME_CONSTRAINTS, Name, PHONE_CONSTRAINTS, Phone, SALARY_CONSTRAINTS, Salary,
};

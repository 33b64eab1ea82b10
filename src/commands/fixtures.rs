//! Employee fixtures and assertions shared by the command unit tests.

use chrono::NaiveDate;

use super::{Command, CommandResult};
use crate::error::EngineError;
use crate::models::{AnnualLeave, Attendance, Employee};
use crate::roster::Roster;

/// Builds an employee from every field value.
#[allow(clippy::too_many_arguments)]
pub(crate) fn employee(
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    bank_account: &str,
    join_date: NaiveDate,
    salary: &str,
    entitlement: u32,
) -> Employee {
    Employee {
        name: name.parse().unwrap(),
        phone: phone.parse().unwrap(),
        email: email.parse().unwrap(),
        address: address.parse().unwrap(),
        bank_account: bank_account.parse().unwrap(),
        join_date,
        salary: salary.parse().unwrap(),
        annual_leave: AnnualLeave::new(entitlement),
        attendance: Attendance::new(),
    }
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn amy() -> Employee {
    employee(
        "Amy Bee",
        "11111111",
        "amy@example.com",
        "Block 312, Amy Street 1",
        "1234567890234",
        date(2003, 5, 10),
        "4000.00",
        4,
    )
}

pub(crate) fn bob() -> Employee {
    employee(
        "Bob Choo",
        "22222222",
        "bob@example.com",
        "Block 123, Bobby Street 3",
        "01823819",
        date(2012, 8, 20),
        "2500.00",
        2,
    )
}

pub(crate) fn typical_roster() -> Roster {
    Roster::from_employees(vec![
        employee(
            "Alice Pauline",
            "94351253",
            "alice@example.com",
            "123, Jurong West Ave 6, #08-111",
            "1029384756",
            date(2019, 1, 7),
            "3500.00",
            14,
        ),
        employee(
            "Benson Meier",
            "98765432",
            "johnd@example.com",
            "311, Clementi Ave 2, #02-25",
            "2039485761",
            date(2020, 3, 2),
            "4200.00",
            14,
        ),
        employee(
            "Carl Kurz",
            "95352563",
            "heinz@example.com",
            "wall street",
            "3048576192",
            date(2021, 6, 15),
            "2800.00",
            7,
        ),
        employee(
            "Daniel Meier",
            "87652533",
            "cornelia@example.com",
            "10th street",
            "4059687213",
            date(2018, 11, 30),
            "5100.00",
            21,
        ),
    ])
}

/// Executes `command` and checks both the result and the resulting roster.
pub(crate) fn assert_command_success(
    command: &Command,
    actual: &mut Roster,
    expected_message: &str,
    expected: &Roster,
) {
    let result = command
        .execute(actual)
        .unwrap_or_else(|err| panic!("Execution of command should not fail: {err}"));
    assert_eq!(result, CommandResult::new(expected_message));
    assert_eq!(actual, expected);
}

/// Executes `command`, checks the error message, and checks the roster and
/// its filtered view are unchanged.
pub(crate) fn assert_command_failure(command: &Command, actual: &mut Roster, expected: &EngineError) {
    let before = actual.clone();
    let before_filtered: Vec<Employee> = actual.filtered().into_iter().cloned().collect();

    let err = command.execute(actual).unwrap_err();

    assert_eq!(&err, expected);
    assert_eq!(actual, &before);
    let after_filtered: Vec<Employee> = actual.filtered().into_iter().cloned().collect();
    assert_eq!(after_filtered, before_filtered);
}

//! Text command parser for the Roster Engine.
//!
//! Turns an input line of the form `<command word> <index?> <prefix value>*`
//! into a fully constructed [`Command`]. All field syntax is checked here;
//! commands receive validated values only.
//!
//! # Example
//!
//! ```
//! use roster_engine::config::EngineConfig;
//! use roster_engine::parser::parse_command;
//!
//! let config = EngineConfig::default();
//! let command = parse_command("addleave 1 from/01/01/2024 to/02/01/2024", &config).unwrap();
//! assert_eq!(command.word(), "addleave");
//!
//! let error = parse_command("addleave 1 from/2024-01-01", &config).unwrap_err();
//! assert!(error.to_string().starts_with("Invalid leave start date"));
//! ```

mod syntax;
mod tokenizer;
mod values;

pub use syntax::{
    EMPLOYEE_FIELD_PREFIXES, PREFIX_ADDRESS, PREFIX_ANNUAL_LEAVE, PREFIX_ATTENDANCE_TYPE,
    PREFIX_BANK_ACCOUNT, PREFIX_DATE, PREFIX_EMAIL, PREFIX_FROM, PREFIX_JOIN_DATE, PREFIX_NAME,
    PREFIX_PHONE, PREFIX_SALARY, PREFIX_TO, Prefix,
};
pub use tokenizer::{ArgumentMultimap, tokenize};
pub use values::{ANNUAL_LEAVE_CONSTRAINTS, parse_annual_leave, parse_date, parse_index};

use chrono::Local;
use tracing::debug;

use crate::commands::{
    AddCommand, AddLeaveCommand, ClearCommand, Command, DeleteCommand, EditCommand,
    EditEmployeeDescriptor, FindCommand, Index, ListCommand, MarkAttendanceCommand,
};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AnnualLeave, Attendance, Employee};
use crate::roster::EmployeePredicate;

/// Usage shown for blank input.
pub const MESSAGE_COMMAND_WORDS: &str =
    "Commands: add, delete, edit, addleave, mark, find, list, clear";

/// Parses one line of user input into a command.
pub fn parse_command(input: &str, config: &EngineConfig) -> EngineResult<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EngineError::invalid_format(MESSAGE_COMMAND_WORDS));
    }

    let (word, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    debug!(command = word, "Parsing command");

    match word {
        AddCommand::COMMAND_WORD => parse_add(args, config).map(Command::Add),
        DeleteCommand::COMMAND_WORD => parse_delete(args).map(Command::Delete),
        EditCommand::COMMAND_WORD => parse_edit(args, config).map(Command::Edit),
        AddLeaveCommand::COMMAND_WORD => parse_add_leave(args, config).map(Command::AddLeave),
        MarkAttendanceCommand::COMMAND_WORD => {
            parse_mark_attendance(args, config).map(Command::MarkAttendance)
        }
        FindCommand::COMMAND_WORD => parse_find(args).map(Command::Find),
        ListCommand::COMMAND_WORD => Ok(Command::List(ListCommand)),
        ClearCommand::COMMAND_WORD => Ok(Command::Clear(ClearCommand)),
        _ => Err(EngineError::UnknownCommand),
    }
}

fn require_index(preamble: &str, usage: &str) -> EngineResult<Index> {
    parse_index(preamble).ok_or_else(|| EngineError::invalid_format(usage))
}

fn parse_add(args: &str, config: &EngineConfig) -> EngineResult<AddCommand> {
    let map = tokenize(args, EMPLOYEE_FIELD_PREFIXES);
    let required = [
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_BANK_ACCOUNT,
        PREFIX_JOIN_DATE,
        PREFIX_SALARY,
    ];
    if !map.contains_all(&required) || !map.preamble().is_empty() {
        return Err(EngineError::invalid_format(AddCommand::MESSAGE_USAGE));
    }
    map.verify_no_duplicate_prefixes_for(EMPLOYEE_FIELD_PREFIXES)?;

    let value = |prefix: Prefix| map.value(prefix).unwrap_or_default();
    let entitlement = match map.value(PREFIX_ANNUAL_LEAVE) {
        Some(text) => parse_annual_leave(text)?,
        None => config.default_annual_leave,
    };

    let employee = Employee {
        name: value(PREFIX_NAME).parse()?,
        phone: value(PREFIX_PHONE).parse()?,
        email: value(PREFIX_EMAIL).parse()?,
        address: value(PREFIX_ADDRESS).parse()?,
        bank_account: value(PREFIX_BANK_ACCOUNT).parse()?,
        join_date: parse_date(value(PREFIX_JOIN_DATE), &config.date_format, "join date")?,
        salary: value(PREFIX_SALARY).parse()?,
        annual_leave: AnnualLeave::new(entitlement),
        attendance: Attendance::new(),
    };
    Ok(AddCommand::new(employee))
}

fn parse_delete(args: &str) -> EngineResult<DeleteCommand> {
    require_index(args, DeleteCommand::MESSAGE_USAGE).map(DeleteCommand::new)
}

fn parse_edit(args: &str, config: &EngineConfig) -> EngineResult<EditCommand> {
    let map = tokenize(args, EMPLOYEE_FIELD_PREFIXES);
    let index = require_index(map.preamble(), EditCommand::MESSAGE_USAGE)?;
    map.verify_no_duplicate_prefixes_for(EMPLOYEE_FIELD_PREFIXES)?;

    let descriptor = EditEmployeeDescriptor {
        name: map.value(PREFIX_NAME).map(str::parse).transpose()?,
        phone: map.value(PREFIX_PHONE).map(str::parse).transpose()?,
        email: map.value(PREFIX_EMAIL).map(str::parse).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(str::parse).transpose()?,
        bank_account: map.value(PREFIX_BANK_ACCOUNT).map(str::parse).transpose()?,
        join_date: map
            .value(PREFIX_JOIN_DATE)
            .map(|text| parse_date(text, &config.date_format, "join date"))
            .transpose()?,
        salary: map.value(PREFIX_SALARY).map(str::parse).transpose()?,
        annual_leave: map
            .value(PREFIX_ANNUAL_LEAVE)
            .map(parse_annual_leave)
            .transpose()?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(EngineError::invalid_format(EditCommand::MESSAGE_NOT_EDITED));
    }
    Ok(EditCommand::new(index, descriptor))
}

fn parse_add_leave(args: &str, config: &EngineConfig) -> EngineResult<AddLeaveCommand> {
    let map = tokenize(args, &[PREFIX_FROM, PREFIX_TO]);
    let index = require_index(map.preamble(), AddLeaveCommand::MESSAGE_USAGE)?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_FROM, PREFIX_TO])?;

    let start_text = map
        .value(PREFIX_FROM)
        .ok_or_else(|| EngineError::invalid_format(AddLeaveCommand::MESSAGE_USAGE))?;
    let start = parse_date(start_text, &config.date_format, "leave start date")?;

    match map.value(PREFIX_TO) {
        Some(end_text) => {
            let end = parse_date(end_text, &config.date_format, "leave end date")?;
            if end < start {
                return Err(EngineError::invalid_field(
                    "leave range",
                    "the end date must not be before the start date",
                ));
            }
            Ok(AddLeaveCommand::range(index, start, end))
        }
        None => Ok(AddLeaveCommand::new(index, start)),
    }
}

fn parse_mark_attendance(args: &str, config: &EngineConfig) -> EngineResult<MarkAttendanceCommand> {
    let map = tokenize(args, &[PREFIX_ATTENDANCE_TYPE, PREFIX_DATE]);
    let index = require_index(map.preamble(), MarkAttendanceCommand::MESSAGE_USAGE)?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_ATTENDANCE_TYPE, PREFIX_DATE])?;

    let status = map
        .value(PREFIX_ATTENDANCE_TYPE)
        .ok_or_else(|| EngineError::invalid_format(MarkAttendanceCommand::MESSAGE_USAGE))?
        .parse()?;
    let date = match map.value(PREFIX_DATE) {
        Some(text) => parse_date(text, &config.date_format, "attendance date")?,
        None => Local::now().date_naive(),
    };

    Ok(MarkAttendanceCommand::new(index, date, status))
}

fn parse_find(args: &str) -> EngineResult<FindCommand> {
    if args.trim().is_empty() {
        return Err(EngineError::invalid_format(FindCommand::MESSAGE_USAGE));
    }
    Ok(FindCommand::new(EmployeePredicate::name_keywords(args)))
}

//! Roster Engine for in-memory employee records
//!
//! This crate parses text commands and executes them against an employee
//! roster: adding, editing and deleting employees, recording annual leave
//! and attendance, and filtering the displayed list by name.

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod parser;
pub mod roster;

//! Roster store for the Roster Engine.
//!
//! This module contains the [`Roster`] store and the [`EmployeePredicate`]
//! used to compute its filtered view.

mod predicate;
mod store;

pub use predicate::EmployeePredicate;
pub use store::Roster;

//! Annual leave entitlement and taken-leave bookkeeping.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Annual leave allotted to an employee and the dates already taken.
///
/// Taken dates form a set: adding a date that is already recorded has no
/// effect. The entitlement is informational and is not enforced as a cap,
/// so [`remaining_days`](Self::remaining_days) can become negative.
///
/// # Example
///
/// ```
/// use roster_engine::models::AnnualLeave;
/// use chrono::NaiveDate;
///
/// let mut leave = AnnualLeave::new(14);
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
///
/// leave.add_leave_range(start, end);
/// leave.add_leave(start);
///
/// assert_eq!(leave.used_days(), 3);
/// assert_eq!(leave.remaining_days(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnnualLeave {
    /// Number of leave days allotted.
    pub entitlement: u32,
    #[serde(default)]
    taken: BTreeSet<NaiveDate>,
}

impl AnnualLeave {
    /// Creates an annual leave record with no leave taken.
    pub fn new(entitlement: u32) -> Self {
        Self {
            entitlement,
            taken: BTreeSet::new(),
        }
    }

    /// Records a single day of leave.
    ///
    /// Returns `true` if the date was not already recorded.
    pub fn add_leave(&mut self, date: NaiveDate) -> bool {
        self.taken.insert(date)
    }

    /// Records every day from `start` to `end` inclusive.
    ///
    /// A range whose end precedes its start records nothing. Returns the
    /// number of dates that were newly recorded.
    pub fn add_leave_range(&mut self, start: NaiveDate, end: NaiveDate) -> usize {
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .filter(|date| self.taken.insert(*date))
            .count()
    }

    /// Returns the taken dates in calendar order.
    pub fn taken_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.taken.iter().copied()
    }

    /// Returns true if leave has been recorded for `date`.
    pub fn is_on_leave(&self, date: NaiveDate) -> bool {
        self.taken.contains(&date)
    }

    /// Number of distinct leave days taken.
    pub fn used_days(&self) -> usize {
        self.taken.len()
    }

    /// Entitlement minus days used; negative when leave exceeds the entitlement.
    pub fn remaining_days(&self) -> i64 {
        i64::from(self.entitlement) - self.used_days() as i64
    }

    /// Returns a copy with a different entitlement and the same taken dates.
    pub fn with_entitlement(&self, entitlement: u32) -> Self {
        Self {
            entitlement,
            taken: self.taken.clone(),
        }
    }
}

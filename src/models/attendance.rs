//! Attendance log and attendance status types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Attendance status recorded for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceType {
    /// The employee was present.
    Present,
    /// The employee was absent.
    Absent,
    /// The employee arrived late.
    Late,
}

/// Constraint message for [`AttendanceType`].
pub const ATTENDANCE_TYPE_CONSTRAINTS: &str =
    "attendance type should be one of: present, absent, late";

impl FromStr for AttendanceType {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "late" => Ok(Self::Late),
            _ => Err(EngineError::invalid_field(
                "attendance type",
                ATTENDANCE_TYPE_CONSTRAINTS,
            )),
        }
    }
}

impl fmt::Display for AttendanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
        };
        f.write_str(label)
    }
}

/// A single attendance entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The day the entry applies to.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceType,
}

/// Counts of each attendance status in a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceSummary {
    /// Days marked present.
    pub present: usize,
    /// Days marked absent.
    pub absent: usize,
    /// Days marked late.
    pub late: usize,
}

/// Insertion-ordered attendance log.
///
/// Entries for the same date are kept as separate records; the log does not
/// deduplicate or overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attendance {
    records: Vec<AttendanceRecord>,
}

impl Attendance {
    /// Creates an empty attendance log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry for `date`.
    pub fn mark(&mut self, date: NaiveDate, status: AttendanceType) {
        self.records.push(AttendanceRecord { date, status });
    }

    /// Returns the entries in insertion order.
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    /// Returns the most recently recorded status for `date`, if any.
    pub fn status_on(&self, date: NaiveDate) -> Option<AttendanceType> {
        self.records
            .iter()
            .rev()
            .find(|record| record.date == date)
            .map(|record| record.status)
    }

    /// Tallies entries by status.
    pub fn summary(&self) -> AttendanceSummary {
        self.records
            .iter()
            .fold(AttendanceSummary::default(), |mut summary, record| {
                match record.status {
                    AttendanceType::Present => summary.present += 1,
                    AttendanceType::Absent => summary.absent += 1,
                    AttendanceType::Late => summary.late += 1,
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, day).unwrap()
    }

    #[test]
    fn test_parse_attendance_type_case_insensitive() {
        assert_eq!(
            "present".parse::<AttendanceType>().unwrap(),
            AttendanceType::Present
        );
        assert_eq!(
            "ABSENT".parse::<AttendanceType>().unwrap(),
            AttendanceType::Absent
        );
        assert_eq!(
            " Late ".parse::<AttendanceType>().unwrap(),
            AttendanceType::Late
        );
    }

    #[test]
    fn test_parse_attendance_type_rejects_unknown() {
        let err = "sick".parse::<AttendanceType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Invalid attendance type: {ATTENDANCE_TYPE_CONSTRAINTS}")
        );
    }

    #[test]
    fn test_mark_preserves_insertion_order() {
        let mut attendance = Attendance::new();
        attendance.mark(date(3), AttendanceType::Late);
        attendance.mark(date(1), AttendanceType::Present);
        let dates: Vec<NaiveDate> = attendance.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(3), date(1)]);
    }

    #[test]
    fn test_duplicate_dates_are_kept() {
        // The log records every mark, including repeats for the same day.
        let mut attendance = Attendance::new();
        attendance.mark(date(3), AttendanceType::Absent);
        attendance.mark(date(3), AttendanceType::Present);
        assert_eq!(attendance.records().len(), 2);
        assert_eq!(attendance.status_on(date(3)), Some(AttendanceType::Present));
    }

    #[test]
    fn test_summary_counts_each_status() {
        let mut attendance = Attendance::new();
        attendance.mark(date(1), AttendanceType::Present);
        attendance.mark(date(2), AttendanceType::Present);
        attendance.mark(date(3), AttendanceType::Late);
        assert_eq!(
            attendance.summary(),
            AttendanceSummary {
                present: 2,
                absent: 0,
                late: 1
            }
        );
    }

    #[test]
    fn test_status_on_unmarked_date_is_none() {
        assert_eq!(Attendance::new().status_on(date(1)), None);
    }

    #[test]
    fn test_attendance_type_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceType::Late).unwrap(),
            "\"late\""
        );
    }

    #[test]
    fn test_serialize_attendance_as_list() {
        let mut attendance = Attendance::new();
        attendance.mark(date(3), AttendanceType::Present);
        let json = serde_json::to_string(&attendance).unwrap();
        assert_eq!(json, r#"[{"date":"2023-11-03","status":"present"}]"#);
    }
}

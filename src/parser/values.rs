//! Parsing of individual argument values.

use chrono::NaiveDate;

use crate::commands::Index;
use crate::error::{EngineError, EngineResult};

/// Constraint message for annual leave entitlements.
pub const ANNUAL_LEAVE_CONSTRAINTS: &str =
    "annual leave should be a non-negative whole number of days";

/// Parses a one-based index made of digits only.
///
/// Returns `None` for zero, signs, blanks and anything non-numeric.
pub fn parse_index(text: &str) -> Option<Index> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
}

/// Parses a date in `format`, naming `field` in the error.
pub fn parse_date(text: &str, format: &str, field: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), format).map_err(|_| {
        EngineError::invalid_field(
            field,
            format!("dates should be valid calendar dates in the format {format}"),
        )
    })
}

/// Parses an annual leave entitlement.
pub fn parse_annual_leave(text: &str) -> EngineResult<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(EngineError::invalid_field(
            "annual leave",
            ANNUAL_LEAVE_CONSTRAINTS,
        ));
    }
    trimmed
        .parse()
        .map_err(|_| EngineError::invalid_field("annual leave", ANNUAL_LEAVE_CONSTRAINTS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_valid() {
        assert_eq!(parse_index(" 1 "), Index::from_one_based(1));
        assert_eq!(parse_index("10"), Index::from_one_based(10));
    }

    #[test]
    fn test_parse_index_invalid() {
        for text in ["", "0", "-1", "+1", "a", "1 a", "99999999999999999999999"] {
            assert_eq!(parse_index(text), None, "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_date_day_month_year() {
        assert_eq!(
            parse_date("03/11/2023", "%d/%m/%Y", "date").unwrap(),
            NaiveDate::from_ymd_opt(2023, 11, 3).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_wrong_format() {
        let err = parse_date("10-923-10", "%d/%m/%Y", "join date").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid join date: dates should be valid calendar dates in the format %d/%m/%Y"
        );
        assert!(parse_date("31/02/2023", "%d/%m/%Y", "date").is_err());
    }

    #[test]
    fn test_parse_annual_leave() {
        assert_eq!(parse_annual_leave("4"), Ok(4));
        assert!(parse_annual_leave("a19").is_err());
        assert!(parse_annual_leave("-2").is_err());
        assert!(parse_annual_leave("").is_err());
    }
}

//! Date-of-birth parsing.
//!
//! A date of birth must be written as `dd/mm/yyyy` and name a day that exists
//! on the proleptic Gregorian calendar.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

/// Exactly two digits, slash, two digits, slash, four digits. ASCII digits
/// only: `\d` would also admit other Unicode decimal digits.
const DOB_PATTERN: &str = r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$";

static DOB_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(DOB_PATTERN).expect("valid regex"));

/// A date of birth split into its numeric components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateOfBirth {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl DateOfBirth {
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Parse a `dd/mm/yyyy` string into a calendar-checked [`DateOfBirth`].
///
/// Fails with [`CoreError::InvalidDateFormat`] when the shape is wrong and
/// with [`CoreError::NotACalendarDate`] when the components do not name a real
/// day (e.g. `31/04/2020`, or `29/02/2021`).
///
/// # Examples
///
/// ```
/// use signup_core::registration::parse_date_of_birth;
///
/// let dob = parse_date_of_birth("29/02/2024").unwrap();
/// assert_eq!((dob.day, dob.month, dob.year), (29, 2, 2024));
/// assert!(parse_date_of_birth("29/02/2021").is_err());
/// assert!(parse_date_of_birth("1/1/2000").is_err());
/// ```
pub fn parse_date_of_birth(input: &str) -> Result<DateOfBirth, CoreError> {
    if !DOB_RE.is_match(input) {
        return Err(CoreError::InvalidDateFormat(input.to_string()));
    }

    // Shape is fixed by the pattern: bytes 0..2, 3..5 and 6..10 are ASCII digits.
    let component = |range: std::ops::Range<usize>| -> Result<u32, CoreError> {
        input[range]
            .parse()
            .map_err(|_| CoreError::InvalidDateFormat(input.to_string()))
    };
    let day = component(0..2)?;
    let month = component(3..5)?;
    let year = component(6..10)? as i32;

    let dob = DateOfBirth { day, month, year };

    // Build the date, then require the components to come back unchanged.
    match dob.to_naive_date() {
        Some(date) if date.day() == day && date.month() == month && date.year() == year => {
            Ok(dob)
        }
        _ => Err(CoreError::NotACalendarDate { day, month, year }),
    }
}

/// Whether `input` passes both the format and the calendar check.
pub fn is_valid_date_of_birth(input: &str) -> bool {
    parse_date_of_birth(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // -----------------------------------------------------------------------
    // Format stage
    // -----------------------------------------------------------------------

    #[test]
    fn accepts_well_formed_date() {
        assert_eq!(
            parse_date_of_birth("01/01/2000"),
            Ok(DateOfBirth {
                day: 1,
                month: 1,
                year: 2000
            })
        );
    }

    #[test]
    fn rejects_missing_leading_zeros() {
        assert_matches!(
            parse_date_of_birth("1/1/2000"),
            Err(CoreError::InvalidDateFormat(s)) if s == "1/1/2000"
        );
    }

    #[test]
    fn rejects_wrong_delimiter() {
        assert_matches!(
            parse_date_of_birth("01-01-2000"),
            Err(CoreError::InvalidDateFormat(_))
        );
        assert_matches!(
            parse_date_of_birth("01.01.2000"),
            Err(CoreError::InvalidDateFormat(_))
        );
    }

    #[test]
    fn rejects_extra_characters() {
        for input in [
            " 01/01/2000",
            "01/01/2000 ",
            "01/01/2000\n",
            "01/01/20000",
            "001/01/2000",
            "x01/01/2000",
        ] {
            assert_matches!(
                parse_date_of_birth(input),
                Err(CoreError::InvalidDateFormat(_)),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn rejects_empty_and_short_year() {
        assert_matches!(parse_date_of_birth(""), Err(CoreError::InvalidDateFormat(_)));
        assert_matches!(
            parse_date_of_birth("01/01/00"),
            Err(CoreError::InvalidDateFormat(_))
        );
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode decimal digits but not ASCII.
        assert_matches!(
            parse_date_of_birth("٠١/٠١/٢٠٠٠"),
            Err(CoreError::InvalidDateFormat(_))
        );
    }

    // -----------------------------------------------------------------------
    // Calendar stage
    // -----------------------------------------------------------------------

    #[test]
    fn rejects_day_31_in_thirty_day_months() {
        for month in ["04", "06", "09", "11"] {
            let input = format!("31/{month}/2020");
            assert_matches!(
                parse_date_of_birth(&input),
                Err(CoreError::NotACalendarDate { day: 31, .. }),
                "input {input}"
            );
        }
    }

    #[test]
    fn leap_day_depends_on_year() {
        assert!(is_valid_date_of_birth("29/02/2024"));
        assert!(is_valid_date_of_birth("29/02/2000"));
        assert_matches!(
            parse_date_of_birth("29/02/2021"),
            Err(CoreError::NotACalendarDate {
                day: 29,
                month: 2,
                year: 2021
            })
        );
        // Century years are leap years only when divisible by 400.
        assert!(!is_valid_date_of_birth("29/02/1900"));
    }

    #[test]
    fn rejects_zero_and_out_of_range_components() {
        for input in ["00/01/2000", "01/00/2000", "01/13/2000", "32/01/2000", "30/02/2024"] {
            assert_matches!(
                parse_date_of_birth(input),
                Err(CoreError::NotACalendarDate { .. }),
                "input {input}"
            );
        }
    }

    #[test]
    fn every_day_of_a_leap_year_is_accepted() {
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        while date.year() == 2024 {
            let input = date.format("%d/%m/%Y").to_string();
            assert!(is_valid_date_of_birth(&input), "input {input}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn every_day_of_a_common_year_is_accepted() {
        let mut date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        while date.year() == 2021 {
            let input = date.format("%d/%m/%Y").to_string();
            assert!(is_valid_date_of_birth(&input), "input {input}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn to_naive_date_matches_components() {
        let dob = parse_date_of_birth("15/08/1990").unwrap();
        assert_eq!(dob.to_naive_date(), NaiveDate::from_ymd_opt(1990, 8, 15));
    }
}

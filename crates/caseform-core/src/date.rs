//! Date recognition and display formatting
//!
//! Form contexts carry dates either as parsed [`NaiveDate`] values or as
//! ISO-formatted strings coming straight out of stored form state. Both
//! must render as `MM/DD/YYYY` in display templates.

use chrono::NaiveDate;
use lazy_regex::regex_captures;

/// Parse an ISO-date-shaped string (`YYYY-MM-DD`, with an optional time
/// suffix such as `T10:30:00Z`) into a [`NaiveDate`].
///
/// Returns `None` for strings that are not date-shaped at all, and for
/// date-shaped strings that name an invalid calendar date (the latter is
/// logged, since it indicates corrupt stored form state).
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let (_, year, month, day) = regex_captures!(r"^(\d{4})-(\d{2})-(\d{2})(?:[T ].*)?$", text)?;

    // The pattern guarantees all-digit captures of fixed width.
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => Some(date),
        None => {
            log::warn!("date-shaped value {text:?} is not a valid calendar date");
            None
        }
    }
}

/// Format a date as `MM/DD/YYYY` (zero-padded, 4-digit year)
pub fn format_mdy(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_date() {
        assert_eq!(
            parse_iso_date("2020-12-04"),
            NaiveDate::from_ymd_opt(2020, 12, 4)
        );
    }

    #[test]
    fn test_parse_datetime() {
        assert_eq!(
            parse_iso_date("2020-12-04T10:30:00Z"),
            NaiveDate::from_ymd_opt(2020, 12, 4)
        );
        assert_eq!(
            parse_iso_date("2020-12-04 10:30:00"),
            NaiveDate::from_ymd_opt(2020, 12, 4)
        );
    }

    #[test]
    fn test_reject_non_dates() {
        assert_eq!(parse_iso_date("hello"), None);
        assert_eq!(parse_iso_date("130"), None);
        assert_eq!(parse_iso_date("2020-12"), None);
        // Date-shaped but not a real calendar date
        assert_eq!(parse_iso_date("2020-13-40"), None);
    }

    #[test]
    fn test_format_mdy() {
        let date = NaiveDate::from_ymd_opt(2020, 12, 4).unwrap();
        assert_eq!(format_mdy(date), "12/04/2020");

        let date = NaiveDate::from_ymd_opt(1999, 1, 31).unwrap();
        assert_eq!(format_mdy(date), "01/31/1999");
    }
}

//! Duration formatting

use crate::error::{FormulaError, FormulaResult};
use caseform_core::FieldValue;

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// FORMAT_DURATION(minutes)
///
/// Renders a non-negative count of minutes as a human-readable string:
/// `0` → `"0 minutes"`, `45` → `"45 minutes"`, `60` → `"1 hour"`,
/// `61` → `"1 hour and 1 minute"`, `130` → `"2 hours and 10 minutes"`.
/// The hours clause is omitted when there are no whole hours and the
/// minutes clause when the remainder is zero.
pub fn fn_format_duration(args: &[FieldValue]) -> FormulaResult<FieldValue> {
    let value = match args.first() {
        Some(v) => v,
        None => {
            return Err(FormulaError::Argument(
                "FORMAT_DURATION: missing argument".into(),
            ))
        }
    };

    // Context values often carry numbers as text ("130"); coerce first.
    let minutes = match value.as_number() {
        Some(n) => n.trunc() as i64,
        None => {
            return Err(FormulaError::Argument(format!(
                "FORMAT_DURATION: expected a minute count, got {value:?}"
            )))
        }
    };

    if minutes < 0 {
        return Err(FormulaError::Argument(format!(
            "FORMAT_DURATION: minute count must be non-negative, got {minutes}"
        )));
    }

    if minutes == 0 {
        return Ok(FieldValue::Text("0 minutes".into()));
    }

    let hours = minutes / 60;
    let remainder = minutes % 60;

    let mut parts = Vec::with_capacity(2);
    if hours > 0 {
        parts.push(pluralize(hours, "hour"));
    }
    if remainder > 0 {
        parts.push(pluralize(remainder, "minute"));
    }

    Ok(FieldValue::Text(parts.join(" and ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(minutes: f64) -> String {
        match fn_format_duration(&[FieldValue::Number(minutes)]).unwrap() {
            FieldValue::Text(s) => s,
            other => panic!("Expected Text, got {other:?}"),
        }
    }

    #[test]
    fn test_zero() {
        assert_eq!(fmt(0.0), "0 minutes");
    }

    #[test]
    fn test_minutes_only() {
        assert_eq!(fmt(1.0), "1 minute");
        assert_eq!(fmt(45.0), "45 minutes");
        assert_eq!(fmt(59.0), "59 minutes");
    }

    #[test]
    fn test_whole_hours() {
        assert_eq!(fmt(60.0), "1 hour");
        assert_eq!(fmt(120.0), "2 hours");
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(fmt(61.0), "1 hour and 1 minute");
        assert_eq!(fmt(125.0), "2 hours and 5 minutes");
        assert_eq!(fmt(130.0), "2 hours and 10 minutes");
    }

    #[test]
    fn test_coerces_text_minutes() {
        assert_eq!(
            fn_format_duration(&[FieldValue::Text("130".into())]).unwrap(),
            FieldValue::Text("2 hours and 10 minutes".into())
        );
    }

    #[test]
    fn test_rejects_negative() {
        assert!(fn_format_duration(&[FieldValue::Number(-5.0)]).is_err());
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(fn_format_duration(&[FieldValue::Text("soon".into())]).is_err());
    }
}

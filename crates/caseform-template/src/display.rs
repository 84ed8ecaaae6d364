//! Display conversion for evaluated segment values

use caseform_core::{format_mdy, parse_iso_date, FieldValue};

/// Convert a segment's evaluated value to its display string.
///
/// Dates (parsed or ISO-formatted text) render as `MM/DD/YYYY`. Unknown
/// and empty-text values render as `"N/A"`. Zero is a valid value and
/// renders as `"0"`. Everything else renders in its natural string form.
pub fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Unknown => "N/A".to_string(),
        FieldValue::Date(d) => format_mdy(*d),
        FieldValue::Text(s) => {
            if s.is_empty() {
                "N/A".to_string()
            } else if let Some(date) = parse_iso_date(s) {
                format_mdy(date)
            } else {
                s.clone()
            }
        }
        other => other.as_text(),
    }
}

//! Form field value types

use chrono::NaiveDate;

/// A value held by a form field, as seen by the expression engine.
///
/// `Unknown` represents "not yet collected" and is distinct from `0`,
/// `""`, and `false`. Arithmetic over `Unknown` yields `Unknown` rather
/// than silently treating the missing value as zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldValue {
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Calendar date
    Date(NaiveDate),
    /// No value collected yet
    Unknown,
}

impl FieldValue {
    /// Convert to a number, if possible.
    ///
    /// `Unknown` never converts; a missing answer must not collapse to zero.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Bool(true) => Some(1.0),
            FieldValue::Bool(false) => Some(0.0),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Date(_) | FieldValue::Unknown => None,
        }
    }

    /// Convert to a boolean, if possible.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            FieldValue::Number(n) => Some(*n != 0.0),
            FieldValue::Text(s) => {
                if s.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
            FieldValue::Date(_) | FieldValue::Unknown => None,
        }
    }

    /// Natural string form of the value.
    ///
    /// Integral numbers render without a decimal tail (`3`, not `3.0`).
    /// Display rules such as `"N/A"` substitution and `MM/DD/YYYY` date
    /// formatting live in the template layer, not here.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            FieldValue::Text(s) => s.clone(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FieldValue::Unknown => String::new(),
        }
    }

    /// Check whether this is the `Unknown` value.
    pub fn is_unknown(&self) -> bool {
        matches!(self, FieldValue::Unknown)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => FieldValue::Unknown,
        }
    }
}

//! Numeric functions

use crate::error::{FormulaError, FormulaResult};
use caseform_core::FieldValue;

/// ABS(x)
pub fn fn_abs(args: &[FieldValue]) -> FormulaResult<FieldValue> {
    let value = match args.first() {
        Some(v) => v,
        None => return Err(FormulaError::Argument("ABS: missing argument".into())),
    };

    match value.as_number() {
        Some(n) => Ok(FieldValue::Number(n.abs())),
        None => Err(FormulaError::Argument(format!(
            "ABS: expected a numeric argument, got {value:?}"
        ))),
    }
}

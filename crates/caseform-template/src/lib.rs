//! # caseform-template
//!
//! Display-template evaluator for caseform dynamic forms.
//!
//! A template is a string containing zero or more `${expression}`
//! segments interleaved with literal text. Each segment is evaluated with
//! the caseform-formula engine against the caller's context and converted
//! to a display string; literal text passes through unchanged.
//!
//! ## Example
//!
//! ```rust
//! use caseform_core::EvalContext;
//! use caseform_template::evaluate_template;
//!
//! let ctx = EvalContext::new().with("first", "Jane").with("last", "Smith");
//! let out = evaluate_template("${last}, ${first}", &ctx).unwrap();
//! assert_eq!(out, "Smith, Jane");
//! ```

pub mod display;
pub mod segment;

use caseform_core::EvalContext;
use caseform_formula::{evaluate_expression, FormulaResult};

pub use display::render_value;
pub use segment::{split_segments, Segment};

/// Evaluate a display template against a context.
///
/// Literal runs and substituted segments are concatenated in document
/// order. Errors from an embedded expression (parse errors, unknown
/// functions) propagate unchanged; there is no template-level error kind.
pub fn evaluate_template(template: &str, ctx: &EvalContext) -> FormulaResult<String> {
    let mut out = String::new();

    for segment in split_segments(template) {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Expr(source) => {
                let value = evaluate_expression(&source, ctx)?;
                out.push_str(&render_value(&value));
            }
        }
    }

    Ok(out)
}

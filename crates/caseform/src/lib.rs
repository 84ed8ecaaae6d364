//! # caseform
//!
//! Dynamic-form expression and template engine for HMIS case-management
//! applications.
//!
//! Assessment forms are JSON-described documents whose items can carry
//! spreadsheet-like formulas (computed totals, durations) and `${...}`
//! display templates (summary strings). This crate evaluates both against
//! a per-call variable context supplied by the form-rendering layer.
//!
//! ## Features
//!
//! - Formula evaluation with unknown-propagation ("not yet answered"
//!   flows through as "cannot compute yet", never as zero)
//! - `${...}` template rendering with `MM/DD/YYYY` date formatting and
//!   `"N/A"` substitution for missing values
//! - Referenced-variable extraction for recomputation tracking
//! - Built-in display/computation functions (`ABS`, `FORMAT_DURATION`)
//!
//! ## Example
//!
//! ```rust
//! use caseform::prelude::*;
//!
//! let ctx = EvalContext::new()
//!     .with("earned", 1200.0)
//!     .with("benefits", 300.0);
//!
//! // Computed numeric field
//! let total = evaluate_formula("earned + benefits", &ctx).unwrap();
//! assert_eq!(total, Some(1500.0));
//!
//! // Display template
//! let ctx = ctx.with("first", "Jane").with("last", "Smith");
//! let summary = evaluate_template("${last}, ${first}", &ctx).unwrap();
//! assert_eq!(summary, "Smith, Jane");
//!
//! // Fields to watch for recomputation
//! let watched = expression_variables("earned + benefits").unwrap();
//! assert_eq!(watched, vec!["earned", "benefits"]);
//! ```

pub mod prelude;

// Re-export core types
pub use caseform_core::{format_mdy, parse_iso_date, EvalContext, FieldValue};

// Re-export the expression engine
pub use caseform_formula::{
    collect_variables,
    evaluate,
    evaluate_expression,
    evaluate_formula,
    expression_variables,
    parse_expression,
    // AST types
    BinaryOperator,
    Expr,
    // Error types
    FormulaError,
    FormulaResult,
    UnaryOperator,
};
pub use caseform_formula::functions::{FunctionDef, FunctionImpl, FunctionRegistry};

// Re-export the template engine
pub use caseform_template::{evaluate_template, render_value, Segment};

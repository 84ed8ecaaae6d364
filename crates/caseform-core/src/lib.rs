//! # caseform-core
//!
//! Core data structures for the caseform dynamic-form engine.
//!
//! This crate provides the fundamental types shared by the formula and
//! template evaluators:
//! - [`FieldValue`] - A form field value (number, text, boolean, date, or unknown)
//! - [`EvalContext`] - The name→value lookup an expression is evaluated against
//! - Date helpers for recognizing and display-formatting ISO dates
//!
//! ## Example
//!
//! ```rust
//! use caseform_core::{EvalContext, FieldValue};
//!
//! let ctx = EvalContext::new()
//!     .with("first", "Jane")
//!     .with("visits", 3.0);
//!
//! assert_eq!(ctx.get("visits"), FieldValue::Number(3.0));
//! // A field that has not been collected yet resolves to Unknown, not an error.
//! assert_eq!(ctx.get("last"), FieldValue::Unknown);
//! ```

pub mod context;
pub mod date;
pub mod value;

pub use context::EvalContext;
pub use date::{format_mdy, parse_iso_date};
pub use value::FieldValue;

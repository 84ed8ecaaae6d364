//! Prelude module - common imports for caseform users
//!
//! ```rust
//! use caseform::prelude::*;
//! ```

pub use crate::{
    // Context types
    EvalContext,
    // Value types
    FieldValue,
    // Error types
    FormulaError,
    FormulaResult,

    // Expression engine
    evaluate_formula,
    expression_variables,
    // Template engine
    evaluate_template,
};

//! Referenced-variable extraction
//!
//! The surrounding form engine watches the fields an expression reads so
//! it can recompute when any of them changes. This module reports those
//! names from a parsed expression without evaluating anything.

use crate::ast::Expr;
use crate::error::FormulaResult;
use crate::parser::parse_expression;

/// Collect every variable name referenced by an expression string.
///
/// Returns an insertion-ordered, deduplicated list. Purely syntactic; no
/// context is needed.
///
/// # Example
/// ```rust
/// use caseform_formula::expression_variables;
///
/// let vars = expression_variables("a + FORMAT_DURATION(b)").unwrap();
/// assert_eq!(vars, vec!["a", "b"]);
/// ```
pub fn expression_variables(source: &str) -> FormulaResult<Vec<String>> {
    let ast = parse_expression(source)?;
    let mut names = Vec::new();
    collect_variables(&ast, &mut names);
    Ok(names)
}

/// Collect variable names from a parsed expression into `names`,
/// preserving first-seen order and skipping duplicates.
pub fn collect_variables(expr: &Expr, names: &mut Vec<String>) {
    match expr {
        // Literals contribute nothing
        Expr::Number(_) | Expr::String(_) => {}

        Expr::Ident(name) => {
            if !names.iter().any(|n| n == name) {
                names.push(name.clone());
            }
        }

        Expr::UnaryOp { operand, .. } => collect_variables(operand, names),

        Expr::BinaryOp { left, right, .. } => {
            collect_variables(left, names);
            collect_variables(right, names);
        }

        Expr::Call { args, .. } => {
            for arg in args {
                collect_variables(arg, names);
            }
        }
    }
}

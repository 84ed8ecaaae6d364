//! Expression evaluator
//!
//! Evaluates expression ASTs against a variable context to produce values.
//!
//! The central rule is unknown-propagation: any operation with a
//! not-yet-collected operand yields [`FieldValue::Unknown`] instead of
//! defaulting the missing value to zero. Zero is a fully defined result
//! and stays distinguishable from unknown throughout.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::FunctionRegistry;
use crate::parser::parse_expression;
use caseform_core::{EvalContext, FieldValue};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Global function registry (lazily initialized)
static FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

fn get_function_registry() -> &'static FunctionRegistry {
    FUNCTION_REGISTRY.get_or_init(FunctionRegistry::new)
}

/// Evaluate an expression string to a numeric result.
///
/// Returns `Ok(None)` when the expression cannot be computed yet because a
/// referenced variable has no value. Parse and unknown-function errors
/// propagate; a missing variable never does.
///
/// # Example
/// ```rust
/// use caseform_core::EvalContext;
/// use caseform_formula::evaluate_formula;
///
/// let ctx = EvalContext::new().with("a", 2.0).with("b", 3.0);
/// assert_eq!(evaluate_formula("a + b", &ctx).unwrap(), Some(5.0));
/// assert_eq!(evaluate_formula("a + missing", &ctx).unwrap(), None);
/// ```
pub fn evaluate_formula(source: &str, ctx: &EvalContext) -> FormulaResult<Option<f64>> {
    let value = evaluate_expression(source, ctx)?;
    Ok(value.as_number())
}

/// Parse and evaluate an expression string to a [`FieldValue`].
///
/// The template evaluator uses this form, where results may be text or
/// dates rather than numbers.
pub fn evaluate_expression(source: &str, ctx: &EvalContext) -> FormulaResult<FieldValue> {
    let ast = parse_expression(source)?;
    evaluate(&ast, ctx)
}

/// Evaluate a parsed expression
pub fn evaluate(expr: &Expr, ctx: &EvalContext) -> FormulaResult<FieldValue> {
    match expr {
        // === Literals ===
        Expr::Number(n) => Ok(FieldValue::Number(*n)),
        Expr::String(s) => Ok(FieldValue::Text(s.clone())),

        // === References ===
        // Absent names resolve to Unknown, never an error: most formulas
        // reference optional fields that may not be answered yet.
        Expr::Ident(name) => Ok(ctx.get(name)),

        // === Operators ===
        Expr::BinaryOp { op, left, right } => evaluate_binary_op(*op, left, right, ctx),

        Expr::UnaryOp { op, operand } => evaluate_unary_op(*op, operand, ctx),

        // === Functions ===
        Expr::Call { name, args } => evaluate_call(name, args, ctx),
    }
}

/// Evaluate a binary operation
fn evaluate_binary_op(
    op: BinaryOperator,
    left: &Expr,
    right: &Expr,
    ctx: &EvalContext,
) -> FormulaResult<FieldValue> {
    let left_val = evaluate(left, ctx)?;
    let right_val = evaluate(right, ctx)?;

    // Unknown propagation: either side missing means the whole operation
    // cannot be computed yet.
    if left_val.is_unknown() || right_val.is_unknown() {
        return Ok(FieldValue::Unknown);
    }

    match op {
        // Arithmetic operators: IEEE-754 double arithmetic throughout.
        // A defined but numerically incoercible operand also yields
        // Unknown; only parse and unknown-function conditions are errors.
        BinaryOperator::Add
        | BinaryOperator::Subtract
        | BinaryOperator::Multiply
        | BinaryOperator::Divide => {
            let (l, r) = match (left_val.as_number(), right_val.as_number()) {
                (Some(l), Some(r)) => (l, r),
                _ => return Ok(FieldValue::Unknown),
            };
            let result = match op {
                BinaryOperator::Add => l + r,
                BinaryOperator::Subtract => l - r,
                BinaryOperator::Multiply => l * r,
                BinaryOperator::Divide => l / r,
                _ => unreachable!(),
            };
            Ok(FieldValue::Number(result))
        }

        // Comparison operators
        BinaryOperator::Equal => Ok(FieldValue::Bool(
            compare_values(&left_val, &right_val) == Ordering::Equal,
        )),
        BinaryOperator::NotEqual => Ok(FieldValue::Bool(
            compare_values(&left_val, &right_val) != Ordering::Equal,
        )),
        BinaryOperator::LessThan => Ok(FieldValue::Bool(
            compare_values(&left_val, &right_val) == Ordering::Less,
        )),
        BinaryOperator::LessEqual => Ok(FieldValue::Bool(
            compare_values(&left_val, &right_val) != Ordering::Greater,
        )),
        BinaryOperator::GreaterThan => Ok(FieldValue::Bool(
            compare_values(&left_val, &right_val) == Ordering::Greater,
        )),
        BinaryOperator::GreaterEqual => Ok(FieldValue::Bool(
            compare_values(&left_val, &right_val) != Ordering::Less,
        )),

        // Logical operators
        BinaryOperator::And => match (left_val.as_bool(), right_val.as_bool()) {
            (Some(l), Some(r)) => Ok(FieldValue::Bool(l && r)),
            _ => Ok(FieldValue::Unknown),
        },
        BinaryOperator::Or => match (left_val.as_bool(), right_val.as_bool()) {
            (Some(l), Some(r)) => Ok(FieldValue::Bool(l || r)),
            _ => Ok(FieldValue::Unknown),
        },
    }
}

/// Compare two defined values for ordering.
///
/// Numeric comparison when both sides coerce to numbers (so `"130" > 60`
/// works on string-typed numeric form state), lexicographic on the natural
/// string forms otherwise.
fn compare_values(left: &FieldValue, right: &FieldValue) -> Ordering {
    if let (Some(l), Some(r)) = (left.as_number(), right.as_number()) {
        return l.partial_cmp(&r).unwrap_or(Ordering::Equal);
    }
    left.as_text().cmp(&right.as_text())
}

/// Evaluate a unary operation
fn evaluate_unary_op(
    op: UnaryOperator,
    operand: &Expr,
    ctx: &EvalContext,
) -> FormulaResult<FieldValue> {
    let val = evaluate(operand, ctx)?;

    if val.is_unknown() {
        return Ok(FieldValue::Unknown);
    }

    match op {
        UnaryOperator::Negate => match val.as_number() {
            Some(n) => Ok(FieldValue::Number(-n)),
            None => Ok(FieldValue::Unknown),
        },
        UnaryOperator::Not => match val.as_bool() {
            Some(b) => Ok(FieldValue::Bool(!b)),
            None => Ok(FieldValue::Unknown),
        },
    }
}

/// Evaluate a function call
fn evaluate_call(name: &str, args: &[Expr], ctx: &EvalContext) -> FormulaResult<FieldValue> {
    // Evaluate arguments first: any unknown argument makes the whole call
    // unknown, without resolving or invoking the function. Implementations
    // never observe unknown arguments.
    let mut evaluated_args = Vec::with_capacity(args.len());
    for arg in args {
        let val = evaluate(arg, ctx)?;
        if val.is_unknown() {
            return Ok(FieldValue::Unknown);
        }
        evaluated_args.push(val);
    }

    let registry = get_function_registry();

    let func = registry
        .get(name)
        .ok_or_else(|| FormulaError::UnknownFunction(name.to_string()))?;

    // Check argument count
    if evaluated_args.len() < func.min_args {
        return Err(FormulaError::ArgumentCount {
            function: name.to_string(),
            expected: format!("at least {}", func.min_args),
            actual: evaluated_args.len(),
        });
    }

    if let Some(max) = func.max_args {
        if evaluated_args.len() > max {
            return Err(FormulaError::ArgumentCount {
                function: name.to_string(),
                expected: format!("at most {}", max),
                actual: evaluated_args.len(),
            });
        }
    }

    (func.implementation)(&evaluated_args)
}

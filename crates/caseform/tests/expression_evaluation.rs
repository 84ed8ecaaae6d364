//! Tests for formula evaluation against form field contexts

use caseform::prelude::*;

/// A variable resolves to its context value
#[test]
fn test_identity() {
    let ctx = EvalContext::new().with("a", 5.0);
    assert_eq!(evaluate_formula("a", &ctx).unwrap(), Some(5.0));
}

/// Zero is a legitimate, fully-defined result
#[test]
fn test_zero_is_defined() {
    let ctx = EvalContext::new().with("a", 0.0).with("b", 0.0);
    assert_eq!(evaluate_formula("a + b", &ctx).unwrap(), Some(0.0));
}

/// An unknown operand makes the whole expression unknown
#[test]
fn test_undefined_propagation() {
    let ctx = EvalContext::new()
        .with("a", 1.0)
        .with("b", FieldValue::Unknown);
    assert_eq!(evaluate_formula("ABS(a - b)", &ctx).unwrap(), None);
}

/// A variable absent from the context behaves like an unknown value
#[test]
fn test_absent_variable_is_unknown() {
    let ctx = EvalContext::new().with("a", 1.0);
    assert_eq!(evaluate_formula("ABS(a - b)", &ctx).unwrap(), None);
    assert_eq!(evaluate_formula("a * c", &ctx).unwrap(), None);
}

/// Function dispatch through the registry
#[test]
fn test_function_dispatch() {
    let ctx = EvalContext::new();
    assert_eq!(evaluate_formula("ABS(-2)", &ctx).unwrap(), Some(2.0));
}

/// Income-total style formula over several fields
#[test]
fn test_income_total() {
    let ctx = EvalContext::new()
        .with("earned", 1200.0)
        .with("unemployment", 0.0)
        .with("ssi", 350.0);
    assert_eq!(
        evaluate_formula("earned + unemployment + ssi", &ctx).unwrap(),
        Some(1550.0)
    );

    // One answer still pending: no total yet
    let ctx = EvalContext::new().with("earned", 1200.0).with("ssi", 350.0);
    assert_eq!(
        evaluate_formula("earned + unemployment + ssi", &ctx).unwrap(),
        None
    );
}

/// Operator precedence follows the usual rules
#[test]
fn test_precedence() {
    let ctx = EvalContext::new();
    assert_eq!(evaluate_formula("1 + 2 * 3", &ctx).unwrap(), Some(7.0));
    assert_eq!(evaluate_formula("(1 + 2) * 3", &ctx).unwrap(), Some(9.0));
    assert_eq!(evaluate_formula("-2 * 3", &ctx).unwrap(), Some(-6.0));
}

/// Conditional-visibility style expressions evaluate to booleans,
/// surfaced as 1/0 through the numeric entry point
#[test]
fn test_conditional_expressions() {
    let ctx = EvalContext::new().with("age", 17.0).with("veteran", false);
    assert_eq!(
        evaluate_formula("age >= 18 || veteran", &ctx).unwrap(),
        Some(0.0)
    );

    let ctx = EvalContext::new().with("age", 17.0).with("veteran", true);
    assert_eq!(
        evaluate_formula("age >= 18 || veteran", &ctx).unwrap(),
        Some(1.0)
    );
}

/// Missing variables never raise; only parse and unknown-function do
#[test]
fn test_error_taxonomy() {
    let ctx = EvalContext::new();

    assert!(matches!(
        evaluate_formula("1 +", &ctx),
        Err(FormulaError::Parse { .. })
    ));
    assert!(matches!(
        evaluate_formula("MYSTERY(1)", &ctx),
        Err(FormulaError::UnknownFunction(_))
    ));
    assert_eq!(evaluate_formula("nowhere", &ctx).unwrap(), None);
}

/// Variable collection sees through call arguments and both operands
#[test]
fn test_expression_variables() {
    let vars = expression_variables("a + FORMAT_DURATION(b)").unwrap();
    assert_eq!(vars, vec!["a", "b"]);

    let vars = expression_variables("ABS(x - y) * x").unwrap();
    assert_eq!(vars, vec!["x", "y"]);
}

/// Repeated evaluation with fresh contexts has no carry-over state
#[test]
fn test_stateless_across_calls() {
    let ctx = EvalContext::new().with("a", 1.0);
    assert_eq!(evaluate_formula("a", &ctx).unwrap(), Some(1.0));

    let ctx = EvalContext::new().with("a", 2.0);
    assert_eq!(evaluate_formula("a", &ctx).unwrap(), Some(2.0));

    let ctx = EvalContext::new();
    assert_eq!(evaluate_formula("a", &ctx).unwrap(), None);
}

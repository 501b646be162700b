//! Binary operation evaluation

use std::cmp::Ordering;

use crate::ast::{Expression, InfixOp};
use crate::error::type_name;
use crate::{EvalError, Interpreter, Scope, Value};

use super::Evaluate;

/// Evaluate an infix operation.
///
/// The left operand is evaluated first; an error there skips the right one.
/// `&&` and `||` short-circuit on truthiness.
///
/// # Errors
///
/// Returns errors from the operands, or from applying the operator.
pub fn eval_infix(
    left: &Expression,
    op: InfixOp,
    right: &Expression,
    interp: &mut Interpreter,
    scope: &Scope,
) -> Result<Value, EvalError> {
    match op {
        InfixOp::And => eval_and(left, right, interp, scope),
        InfixOp::Or => eval_or(left, right, interp, scope),
        _ => {
            let left_val = left.eval(interp, scope)?;
            let right_val = right.eval(interp, scope)?;
            apply_infix(op, left_val, right_val)
        }
    }
}

/// Apply an infix operator to two evaluated operands.
///
/// # Errors
///
/// Returns `DivisionByZero`, `IntegerOverflow`, or `UnsupportedOperator`
/// for operand kinds the operator does not accept.
pub fn apply_infix(op: InfixOp, left: Value, right: Value) -> Result<Value, EvalError> {
    match (op, &left, &right) {
        (InfixOp::Eq, _, _) => Ok(Value::Bool(left == right)),
        (InfixOp::NotEq, _, _) => Ok(Value::Bool(left != right)),
        (InfixOp::And, _, _) => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        (InfixOp::Or, _, _) => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        (_, Value::Integer(a), Value::Integer(b)) => eval_integer(op, *a, *b),
        (_, Value::String(a), Value::String(b)) => eval_string(op, a, b, &left, &right),
        _ => Err(unsupported(op, &left, &right)),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Short-Circuit Logical Operators
// ═══════════════════════════════════════════════════════════════════════

fn eval_and(
    left: &Expression,
    right: &Expression,
    interp: &mut Interpreter,
    scope: &Scope,
) -> Result<Value, EvalError> {
    if !left.eval(interp, scope)?.is_truthy() {
        return Ok(Value::Bool(false)); // Short-circuit
    }
    Ok(Value::Bool(right.eval(interp, scope)?.is_truthy()))
}

fn eval_or(
    left: &Expression,
    right: &Expression,
    interp: &mut Interpreter,
    scope: &Scope,
) -> Result<Value, EvalError> {
    if left.eval(interp, scope)?.is_truthy() {
        return Ok(Value::Bool(true)); // Short-circuit
    }
    Ok(Value::Bool(right.eval(interp, scope)?.is_truthy()))
}

// ═══════════════════════════════════════════════════════════════════════
// Operand Kinds
// ═══════════════════════════════════════════════════════════════════════

fn eval_integer(op: InfixOp, a: i64, b: i64) -> Result<Value, EvalError> {
    let overflow = || EvalError::IntegerOverflow { op: op.as_str() };

    match op {
        InfixOp::Add => a.checked_add(b).map(Value::Integer).ok_or_else(overflow),
        InfixOp::Sub => a.checked_sub(b).map(Value::Integer).ok_or_else(overflow),
        InfixOp::Mul => a.checked_mul(b).map(Value::Integer).ok_or_else(overflow),
        InfixOp::Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            // Truncates toward zero; only i64::MIN / -1 overflows.
            a.checked_div(b).map(Value::Integer).ok_or_else(overflow)
        }
        _ => compare(op, a.cmp(&b))
            .map(Value::Bool)
            .ok_or_else(|| unsupported(op, &Value::Integer(a), &Value::Integer(b))),
    }
}

fn eval_string(
    op: InfixOp,
    a: &str,
    b: &str,
    left: &Value,
    right: &Value,
) -> Result<Value, EvalError> {
    match op {
        InfixOp::Add => Ok(Value::string(format!("{}{}", a, b))),
        _ => compare(op, a.cmp(b))
            .map(Value::Bool)
            .ok_or_else(|| unsupported(op, left, right)),
    }
}

/// Result of an ordering operator, `None` for any other operator.
fn compare(op: InfixOp, ordering: Ordering) -> Option<bool> {
    match op {
        InfixOp::Lt => Some(ordering == Ordering::Less),
        InfixOp::Gt => Some(ordering == Ordering::Greater),
        InfixOp::Le => Some(ordering != Ordering::Greater),
        InfixOp::Ge => Some(ordering != Ordering::Less),
        _ => None,
    }
}

fn unsupported(op: InfixOp, left: &Value, right: &Value) -> EvalError {
    EvalError::UnsupportedInfix {
        op: op.as_str(),
        left: type_name(left),
        right: type_name(right),
    }
}

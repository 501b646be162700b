//! Unary operation evaluation

use crate::ast::{Expression, PrefixOp};
use crate::error::type_name;
use crate::{EvalError, Interpreter, Scope, Value};

use super::Evaluate;

/// Evaluate a prefix operation.
///
/// # Errors
///
/// Returns errors from the operand, or from applying the operator.
pub fn eval_prefix(
    op: PrefixOp,
    right: &Expression,
    interp: &mut Interpreter,
    scope: &Scope,
) -> Result<Value, EvalError> {
    let operand = right.eval(interp, scope)?;
    apply_prefix(op, operand)
}

/// Apply a prefix operator to an evaluated operand.
///
/// # Errors
///
/// `-` accepts Integers only (`UnsupportedOperator` otherwise) and fails
/// with `IntegerOverflow` on `i64::MIN`.
pub fn apply_prefix(op: PrefixOp, operand: Value) -> Result<Value, EvalError> {
    match op {
        PrefixOp::Not => Ok(Value::Bool(!operand.is_truthy())),
        PrefixOp::Neg => eval_neg(operand),
    }
}

/// Evaluate unary negation (`-x`).
fn eval_neg(operand: Value) -> Result<Value, EvalError> {
    match operand {
        Value::Integer(n) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or(EvalError::IntegerOverflow { op: "-" }),
        other => Err(EvalError::UnsupportedPrefix {
            op: PrefixOp::Neg.as_str(),
            operand: type_name(&other),
        }),
    }
}

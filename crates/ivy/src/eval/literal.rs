//! Literal evaluation

use crate::ast::Expression;
use crate::{EvalError, Interpreter, Scope, Value};

use super::Evaluate;

/// Evaluate an array literal into a fresh array.
///
/// Elements are evaluated left to right; the first error wins.
///
/// # Errors
///
/// Returns the first error raised by an element.
pub fn eval_array(
    elements: &[Expression],
    interp: &mut Interpreter,
    scope: &Scope,
) -> Result<Value, EvalError> {
    let items = elements
        .iter()
        .map(|elem| elem.eval(interp, scope))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::array(items))
}

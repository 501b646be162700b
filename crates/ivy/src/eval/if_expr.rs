//! If expression evaluation

use crate::ast::{BlockStatement, Expression};
use crate::{EvalError, Interpreter, Scope, Value};

use super::Evaluate;

/// Evaluate `if`/`else`. A missing else branch yields `nil`.
///
/// # Errors
///
/// Returns errors from the condition or the taken branch.
pub fn eval_if(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    interp: &mut Interpreter,
    scope: &Scope,
) -> Result<Value, EvalError> {
    let cond = condition.eval(interp, scope)?;

    if cond.is_truthy() {
        consequence.eval(interp, scope)
    } else if let Some(alternative) = alternative {
        alternative.eval(interp, scope)
    } else {
        Ok(Value::Null)
    }
}

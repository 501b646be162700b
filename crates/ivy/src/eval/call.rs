//! Method call evaluation

use crate::ast::{CallExpression, Expression};
use crate::value::ClosureValue;
use crate::{EvalError, Interpreter, Scope, Value};

use super::Evaluate;

impl Evaluate for CallExpression {
    fn eval(&self, interp: &mut Interpreter, scope: &Scope) -> Result<Value, EvalError> {
        let receiver = self.receiver.eval(interp, scope)?;
        let args = eval_arguments(&self.arguments, interp, scope)?;
        let block = self
            .block
            .as_ref()
            .map(|literal| ClosureValue::new(literal, scope.clone()));

        interp.send(receiver, &self.method, args, block)
    }
}

/// Evaluate call arguments left to right, stopping at the first error.
///
/// # Errors
///
/// Returns the first error raised by an argument.
pub fn eval_arguments(
    arguments: &[Expression],
    interp: &mut Interpreter,
    scope: &Scope,
) -> Result<Vec<Value>, EvalError> {
    arguments
        .iter()
        .map(|arg| arg.eval(interp, scope))
        .collect()
}

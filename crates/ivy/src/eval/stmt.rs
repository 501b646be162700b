//! Statement evaluation

use crate::ast::{AssignTarget, BlockStatement, Expression, Program, Statement};
use crate::{EvalError, Interpreter, Scope, Value};

use super::item::{eval_class, eval_def};
use super::{ControlFlow, Evaluate};

impl Evaluate for Program {
    /// A top-level `return` ends the program with its value.
    fn eval(&self, interp: &mut Interpreter, scope: &Scope) -> Result<Value, EvalError> {
        match eval_statements(&self.statements, interp, scope) {
            Err(EvalError::ControlFlow(flow)) => Ok(flow.into_value()),
            other => other,
        }
    }
}

impl Evaluate for BlockStatement {
    fn eval(&self, interp: &mut Interpreter, scope: &Scope) -> Result<Value, EvalError> {
        eval_statements(&self.statements, interp, scope)
    }
}

impl Evaluate for Statement {
    fn eval(&self, interp: &mut Interpreter, scope: &Scope) -> Result<Value, EvalError> {
        match self {
            Statement::Expression(expr) => expr.eval(interp, scope),
            Statement::Return(expr) => {
                let value = expr.eval(interp, scope)?;
                Err(EvalError::ControlFlow(ControlFlow::return_value(value)))
            }
            Statement::Let { target, value } => eval_let(target, value, interp, scope),
            Statement::Class(class) => eval_class(class, interp, scope),
            Statement::Def(def) => eval_def(def, interp, scope),
        }
    }
}

/// Evaluate statements in order, in the same scope.
///
/// Yields the value of the last statement, or `nil` when there are none.
/// The first error or `return` stops evaluation.
///
/// # Errors
///
/// Returns errors from statement evaluation.
pub fn eval_statements(
    statements: &[Statement],
    interp: &mut Interpreter,
    scope: &Scope,
) -> Result<Value, EvalError> {
    let mut last_value = Value::Null;

    for stmt in statements {
        // Check for interruption
        interp.check_interrupt()?;

        last_value = stmt.eval(interp, scope)?;
    }

    Ok(last_value)
}

/// Evaluate an assignment, yielding the assigned value.
fn eval_let(
    target: &AssignTarget,
    value: &Expression,
    interp: &mut Interpreter,
    scope: &Scope,
) -> Result<Value, EvalError> {
    let value = value.eval(interp, scope)?;

    match target {
        AssignTarget::Local(name) => scope.env.set(name, value.clone()),
        AssignTarget::InstanceVariable(name) => match &scope.self_value {
            Value::Instance(obj) => obj.set_ivar(name.as_str(), value.clone()),
            other => {
                return Err(EvalError::InvalidReceiver {
                    receiver: other.inspect(),
                })
            }
        },
    }

    Ok(value)
}

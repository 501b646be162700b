//! Name lookup: locals, constants and instance variables

use crate::{EvalError, Scope, Value};

/// Look up a local variable.
///
/// # Errors
///
/// Returns `UndefinedVariable` if the name is not bound.
pub fn eval_identifier(name: &str, scope: &Scope) -> Result<Value, EvalError> {
    scope
        .env
        .get(name)
        .ok_or_else(|| EvalError::UndefinedVariable {
            name: name.to_string(),
        })
}

/// Look up a constant.
///
/// # Errors
///
/// Returns `UndefinedConstant` if the name is not bound.
pub fn eval_constant(name: &str, scope: &Scope) -> Result<Value, EvalError> {
    scope
        .env
        .get(name)
        .ok_or_else(|| EvalError::UndefinedConstant {
            name: name.to_string(),
        })
}

/// Read an instance variable of `self`; `nil` when unset or when `self` is
/// not an instance.
pub fn eval_ivar(name: &str, scope: &Scope) -> Value {
    match &scope.self_value {
        Value::Instance(obj) => obj.get_ivar(name).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

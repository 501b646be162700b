//! Class and method definitions

use std::rc::Rc;

use crate::ast::{ClassStatement, DefStatement};
use crate::value::{Callable, Class, MethodValue};
use crate::{EvalError, Interpreter, Scope, Value};

use super::Evaluate;

/// Evaluate a class definition, yielding the class.
///
/// If the constant is already bound to a class, that class is reopened; a
/// superclass given on reopening replaces the current one after a cycle
/// check. A new class without a superclass inherits from `Object`.
///
/// # Errors
///
/// Returns `UndefinedConstant` or `InvalidSuperclass` when the superclass
/// cannot be resolved, `SuperclassCycle` when it descends from the class,
/// and any error raised by the body.
pub fn eval_class(
    stmt: &ClassStatement,
    interp: &mut Interpreter,
    scope: &Scope,
) -> Result<Value, EvalError> {
    let superclass = match &stmt.superclass {
        Some(name) => Some(lookup_class(name, scope)?),
        None => None,
    };

    let class = match scope.env.get(&stmt.name) {
        Some(Value::Class(existing)) => {
            if let Some(superclass) = superclass {
                existing.set_superclass(superclass)?;
            }
            tracing::debug!(class = %stmt.name, "reopened class");
            existing
        }
        _ => {
            let superclass = superclass.unwrap_or_else(|| Rc::clone(interp.object_class()));
            tracing::debug!(class = %stmt.name, superclass = %superclass.name(), "defined class");
            let class = Rc::new(Class::new(stmt.name.as_str(), Some(superclass)));
            scope.env.set(&stmt.name, Value::Class(Rc::clone(&class)));
            interp.register_class(&class);
            class
        }
    };

    let body_scope = Scope::new(Value::Class(Rc::clone(&class)), scope.env.child());
    stmt.body.eval(interp, &body_scope)?;

    Ok(Value::Class(class))
}

/// Resolve a superclass constant.
fn lookup_class(name: &str, scope: &Scope) -> Result<Rc<Class>, EvalError> {
    match scope.env.get(name) {
        Some(Value::Class(class)) => Ok(class),
        Some(other) => Err(EvalError::InvalidSuperclass {
            got: other.inspect(),
        }),
        None => Err(EvalError::UndefinedConstant {
            name: name.to_string(),
        }),
    }
}

/// Evaluate a method definition, yielding the method.
///
/// The method captures the current scope. It is installed on `self` when
/// `self` is a class, otherwise on `self`'s class; `def self.x` installs a
/// class method and requires `self` to be a class.
///
/// # Errors
///
/// Returns `InvalidReceiver` when there is no class to install into.
pub fn eval_def(
    def: &DefStatement,
    interp: &mut Interpreter,
    scope: &Scope,
) -> Result<Value, EvalError> {
    let method = Rc::new(MethodValue {
        name: def.name.clone(),
        params: def.params.clone(),
        body: Rc::clone(&def.body),
        scope: scope.clone(),
    });
    let callable = Callable::Method(Rc::clone(&method));

    match (&scope.self_value, def.singleton) {
        (Value::Class(class), true) => {
            tracing::debug!(class = %class.name(), method = %def.name, "defined class method");
            class.define_class_method(def.name.as_str(), callable);
        }
        (Value::Class(class), false) => {
            tracing::debug!(class = %class.name(), method = %def.name, "defined method");
            class.define_method(def.name.as_str(), callable);
        }
        (receiver, false) => match interp.class_of(receiver) {
            Some(class) => {
                tracing::debug!(class = %class.name(), method = %def.name, "defined method");
                class.define_method(def.name.as_str(), callable);
            }
            None => {
                return Err(EvalError::InvalidReceiver {
                    receiver: receiver.inspect(),
                })
            }
        },
        (receiver, true) => {
            return Err(EvalError::InvalidReceiver {
                receiver: receiver.inspect(),
            })
        }
    }

    Ok(Value::Method(method))
}

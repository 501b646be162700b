//! Method resolution and dispatch
//!
//! Every method call ends up in [`Interpreter::send`]. Resolution depends on
//! the receiver kind:
//!
//! - a class receiver searches class methods up the superclass chain,
//! - an instance searches instance methods, most-derived class first,
//! - an array searches the built-in `Array` class.
//!
//! Any other value cannot receive calls.

use std::rc::Rc;

use crate::eval::{ControlFlow, Evaluate};
use crate::interpreter::CallFrame;
use crate::value::{Callable, Class, ClosureValue, MethodValue, Value};
use crate::{EvalError, Interpreter, Scope};

impl Interpreter {
    /// Call `method` on `receiver`.
    ///
    /// A frame is pushed once the method is resolved. It is popped when the
    /// call returns a value, and left in place when the call fails.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReceiver` or `UndefinedMethod` when resolution fails,
    /// `ArityMismatch` for a user method called with the wrong number of
    /// arguments, and any error raised by the method itself.
    #[tracing::instrument(
        level = "debug",
        skip(self, receiver, args, block),
        fields(argc = args.len())
    )]
    pub fn send(
        &mut self,
        receiver: Value,
        method: &str,
        args: Vec<Value>,
        block: Option<ClosureValue>,
    ) -> Result<Value, EvalError> {
        let (callable, class) = self.resolve(&receiver, method)?;
        self.enter_call(CallFrame::new(method, class.name()))?;

        let result = match &callable {
            Callable::Method(m) => self.invoke_method(m, receiver, args),
            Callable::Builtin(b) => (b.func)(self, &receiver, &args, block.as_ref()),
        };

        self.exit_call(&result);
        result
    }

    /// Find the method `name` for `receiver`, returning it with the class
    /// lookup started from.
    pub fn resolve(
        &self,
        receiver: &Value,
        name: &str,
    ) -> Result<(Callable, Rc<Class>), EvalError> {
        let (class, found) = match receiver {
            Value::Class(class) => (Rc::clone(class), class.find_class_method(name)),
            Value::Instance(obj) => (Rc::clone(obj.class()), obj.class().find_method(name)),
            Value::Array(_) => (
                Rc::clone(self.array_class()),
                self.array_class().find_method(name),
            ),
            other => {
                return Err(EvalError::InvalidReceiver {
                    receiver: other.inspect(),
                })
            }
        };

        match found {
            Some(callable) => Ok((callable, class)),
            None => Err(EvalError::UndefinedMethod {
                method: name.to_string(),
                class: class.name().to_string(),
            }),
        }
    }

    /// Run a user-defined method body with `receiver` as `self`.
    fn invoke_method(
        &mut self,
        method: &MethodValue,
        receiver: Value,
        args: Vec<Value>,
    ) -> Result<Value, EvalError> {
        if args.len() != method.arity() {
            return Err(EvalError::ArityMismatch {
                expected: method.arity(),
                got: args.len(),
            });
        }

        // Free variables resolve against the defining scope, not the caller's.
        let env = method.scope.env.child();
        for (param, arg) in method.params.iter().zip(args) {
            env.define(param.as_str(), arg);
        }
        let scope = Scope::new(receiver, env);

        match method.body.eval(self, &scope) {
            Err(EvalError::ControlFlow(ControlFlow::Return { value })) => Ok(value),
            other => other,
        }
    }
}

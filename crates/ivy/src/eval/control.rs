//! Control flow mechanism for `return`

use crate::Value;

/// Control flow signal for non-local jumps.
///
/// When `return` is evaluated, it doesn't produce a normal
/// `Result<Value, EvalError>`. Instead, it returns an
/// `Err(EvalError::ControlFlow(...))` that propagates up until caught by the
/// enclosing user method call (or the program, for a top-level `return`).
///
/// Built-in methods never catch it, so a `return` inside a block passed to
/// `each` leaves the method that contains the block.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlFlow {
    /// Return from a method with a value.
    Return {
        /// Value to return from the method
        value: Value,
    },
}

impl ControlFlow {
    /// Create a return.
    pub fn return_value(value: Value) -> Self {
        ControlFlow::Return { value }
    }

    /// The value carried by the signal.
    pub fn into_value(self) -> Value {
        match self {
            ControlFlow::Return { value } => value,
        }
    }
}

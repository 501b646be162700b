//! Built-in classes and their native methods

pub mod array;
pub mod object;

use crate::value::{BuiltinFnPtr, BuiltinMethod, Callable, Value};
use crate::EvalError;

/// Wrap a native function as a method-table entry.
pub(crate) fn builtin(name: &'static str, func: BuiltinFnPtr) -> Callable {
    Callable::Builtin(BuiltinMethod::new(name, func))
}

/// Require exactly `expected` arguments.
pub(crate) fn check_argc(args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() != expected {
        return Err(EvalError::argument_count(expected, args.len()));
    }
    Ok(())
}

/// Require at most `max` arguments.
pub(crate) fn check_max_argc(args: &[Value], max: usize) -> Result<(), EvalError> {
    if args.len() > max {
        return Err(EvalError::argument_count(max, args.len()));
    }
    Ok(())
}

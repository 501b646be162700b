//! # Ivy
//!
//! The execution core of a small class-based scripting language with
//! Ruby-flavoured semantics.
//!
//! Ivy walks an already-built syntax tree. Tokenizing and parsing happen
//! elsewhere; a frontend hands the core an [`ast::Program`] and gets back a
//! [`Value`] or an [`EvalError`].
//!
//! ## Architecture
//!
//! - **Syntax tree** ([`ast`]): closed set of node kinds, matched exhaustively
//! - **Values** ([`value`]): primitives, shared arrays and instances, classes
//! - **Scope** ([`environment`]): chained environments plus the current `self`
//! - **Dispatch** ([`Interpreter::send`]): method lookup along the superclass
//!   chain, call frames, depth limit
//! - **Evaluator** ([`eval`]): one [`Evaluate`] impl per node kind
//! - **Built-ins** ([`builtins`]): the `Object` root class and `Array`
//!
//! Errors and `return` travel on the `Err` side of every evaluation result,
//! so `?` gives the short-circuit behaviour of the language for free.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod builtins;
pub mod context;
mod dispatch;
pub mod environment;
pub mod error;
pub mod eval;
pub mod interpreter;
mod stack;
pub mod value;

// Re-export main types
pub use context::EvalContext;
pub use environment::{Environment, Scope};
pub use error::{ErrorKind, EvalError, Result};
pub use eval::{ControlFlow, Evaluate};
pub use interpreter::{CallFrame, Interpreter};
pub use value::{
    ArrayRef, BuiltinFnPtr, BuiltinMethod, Callable, Class, ClosureValue, Instance, MethodValue,
    Value,
};

/// Ivy version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

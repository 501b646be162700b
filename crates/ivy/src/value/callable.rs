//! Callable value types: methods, builtins, and blocks

use std::fmt;
use std::rc::Rc;

use super::Value;
use crate::ast::{BlockLiteral, BlockStatement};
use crate::{EvalError, Interpreter, Scope};

/// Signature of a native method.
///
/// Receives the interpreter (to call back into blocks or other methods), the
/// receiver, the evaluated arguments and the block attached to the call.
/// Builtins validate their own arguments; dispatch does no arity check.
pub type BuiltinFnPtr =
    fn(&mut Interpreter, &Value, &[Value], Option<&ClosureValue>) -> Result<Value, EvalError>;

/// A user-defined method created by a `def` statement.
///
/// Stores the AST body directly for interpretation, together with the scope
/// active where the method was defined. Free variables in the body resolve
/// against that scope, never against the caller's.
#[derive(Clone)]
pub struct MethodValue {
    /// Method name
    pub name: String,

    /// Parameter names in declaration order
    pub params: Vec<String>,

    /// The method body (shared with the defining AST node)
    pub body: Rc<BlockStatement>,

    /// Scope captured at the definition site
    pub scope: Scope,
}

impl MethodValue {
    /// Number of required arguments.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Debug for MethodValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodValue")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// A built-in native method.
#[derive(Clone, Copy)]
pub struct BuiltinMethod {
    /// Method name (for display/debugging)
    pub name: &'static str,

    /// The native implementation
    pub func: BuiltinFnPtr,
}

impl BuiltinMethod {
    /// Create a builtin from a name and function.
    pub fn new(name: &'static str, func: BuiltinFnPtr) -> Self {
        Self { name, func }
    }
}

impl fmt::Debug for BuiltinMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinMethod({})", self.name)
    }
}

/// A block attached to a method call, closed over the call-site scope.
#[derive(Clone)]
pub struct ClosureValue {
    /// Block parameter names
    pub params: Vec<String>,

    /// The block body
    pub body: Rc<BlockStatement>,

    /// Scope captured at the call site (`self` and environment)
    pub scope: Scope,
}

impl ClosureValue {
    /// Close a block literal over the given scope.
    pub fn new(literal: &BlockLiteral, scope: Scope) -> Self {
        Self {
            params: literal.params.clone(),
            body: Rc::clone(&literal.body),
            scope,
        }
    }
}

impl fmt::Debug for ClosureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureValue")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// An entry in a class's method table.
#[derive(Debug, Clone)]
pub enum Callable {
    /// Interpreted method
    Method(Rc<MethodValue>),
    /// Native method
    Builtin(BuiltinMethod),
}

impl Callable {
    /// The method name.
    pub fn name(&self) -> &str {
        match self {
            Callable::Method(m) => &m.name,
            Callable::Builtin(b) => b.name,
        }
    }

    /// Wrap the callable as a runtime value.
    pub fn to_value(&self) -> Value {
        match self {
            Callable::Method(m) => Value::Method(Rc::clone(m)),
            Callable::Builtin(b) => Value::BuiltinMethod(*b),
        }
    }
}

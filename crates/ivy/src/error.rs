//! Error types for Ivy evaluation

use thiserror::Error;

use crate::eval::ControlFlow;
use crate::value::Value;

/// Classification of language-level errors.
///
/// Every [`EvalError`] except the internal [`EvalError::ControlFlow`]
/// signal maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No method with the requested name along the receiver's class chain.
    UndefinedMethod,
    /// The receiver kind cannot receive method calls.
    InvalidReceiver,
    /// A user method was called with the wrong number of arguments.
    ArityMismatch,
    /// A built-in method received an argument of the wrong kind.
    WrongArgumentType,
    /// A built-in method received the wrong number of arguments.
    WrongArgumentCount,
    /// An operator was applied to operands it does not support.
    UnsupportedOperator,
    /// A variable or constant lookup failed.
    UndefinedName,
    /// An array write or size argument fell outside the valid range.
    IndexOutOfRange,
    /// A block-iterating method was called without a block.
    MissingBlock,
    /// Integer division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    IntegerOverflow,
    /// The class hierarchy would become invalid (cycle or non-class parent).
    ClassHierarchy,
    /// The call stack exceeded the configured depth.
    StackOverflow,
    /// Evaluation was interrupted from outside.
    Interrupted,
}

/// Evaluation error.
///
/// Language-level errors are ordinary values of this type: they travel up
/// through `?` exactly like a successful result would, stopping every
/// enclosing statement sequence, argument list and operand evaluation.
#[derive(Error, Debug, Clone)]
pub enum EvalError {
    /// Method lookup missed on the whole superclass chain.
    #[error("undefined method `{method}` for class `{class}`")]
    UndefinedMethod {
        /// The method name that was looked up
        method: String,
        /// The most-derived class of the receiver
        class: String,
    },

    /// Method call on a value that has no class to dispatch through.
    #[error("not a valid receiver: `{receiver}`")]
    InvalidReceiver {
        /// Inspect form of the receiver
        receiver: String,
    },

    /// Wrong argument count for a user-defined method.
    #[error("wrong arguments: expect={expected}, got={got}")]
    ArityMismatch {
        /// Number of declared parameters
        expected: usize,
        /// Number of arguments supplied
        got: usize,
    },

    /// A built-in method received an argument of the wrong kind.
    #[error("Expect {argument} to be {expected}. got={got}")]
    WrongArgumentType {
        /// Which argument is wrong ("argument", "index argument")
        argument: &'static str,
        /// The kind that was expected
        expected: &'static str,
        /// The kind that was observed
        got: String,
    },

    /// A built-in method received the wrong number of arguments.
    #[error("Expect {} argument. got={got}", count_word(.expected))]
    WrongArgumentCount {
        /// Maximum number of arguments accepted
        expected: usize,
        /// Number of arguments supplied
        got: usize,
    },

    /// Binary operator applied to unsupported operand kinds.
    #[error("unsupported operator `{op}` for {left} and {right}")]
    UnsupportedInfix {
        /// The operator
        op: &'static str,
        /// Kind of the left operand
        left: String,
        /// Kind of the right operand
        right: String,
    },

    /// Prefix operator applied to an unsupported operand kind.
    #[error("unsupported operator `{op}` for {operand}")]
    UnsupportedPrefix {
        /// The operator
        op: &'static str,
        /// Kind of the operand
        operand: String,
    },

    /// Variable lookup failed.
    #[error("undefined local variable `{name}`")]
    UndefinedVariable {
        /// The variable name
        name: String,
    },

    /// Constant lookup failed.
    #[error("uninitialized constant `{name}`")]
    UndefinedConstant {
        /// The constant name
        name: String,
    },

    /// Array write or size argument out of range.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// The offending index
        index: i64,
        /// Array length at the time of the call
        len: usize,
    },

    /// A block-iterating built-in was called without a block.
    #[error("`{method}` requires a block")]
    MissingBlock {
        /// The method name
        method: String,
    },

    /// Integer division by zero.
    #[error("divided by 0")]
    DivisionByZero,

    /// Checked integer arithmetic overflowed.
    #[error("integer overflow in `{op}`")]
    IntegerOverflow {
        /// The operator
        op: &'static str,
    },

    /// Reopening a class would make it its own ancestor.
    #[error("superclass cycle: `{class}` cannot inherit from `{superclass}`")]
    SuperclassCycle {
        /// The class being (re)defined
        class: String,
        /// The requested superclass
        superclass: String,
    },

    /// The superclass expression did not name a class.
    #[error("superclass must be a class, got `{got}`")]
    InvalidSuperclass {
        /// Inspect form of the value found instead
        got: String,
    },

    /// Call depth exceeded `EvalContext::max_call_depth`.
    #[error("stack level too deep (depth {depth}, max {max})")]
    StackOverflow {
        /// Depth at the failing call
        depth: usize,
        /// Configured limit
        max: usize,
    },

    /// Evaluation was interrupted.
    #[error("evaluation interrupted")]
    Interrupted,

    /// Internal non-local exit (`return`). Consumed at the method boundary.
    #[error("control flow signal escaped its method: {0:?}")]
    ControlFlow(ControlFlow),
}

impl EvalError {
    /// The language-level kind of this error, or `None` for a control-flow
    /// signal.
    pub fn kind(&self) -> Option<ErrorKind> {
        let kind = match self {
            EvalError::UndefinedMethod { .. } => ErrorKind::UndefinedMethod,
            EvalError::InvalidReceiver { .. } => ErrorKind::InvalidReceiver,
            EvalError::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            EvalError::WrongArgumentType { .. } => ErrorKind::WrongArgumentType,
            EvalError::WrongArgumentCount { .. } => ErrorKind::WrongArgumentCount,
            EvalError::UnsupportedInfix { .. } | EvalError::UnsupportedPrefix { .. } => {
                ErrorKind::UnsupportedOperator
            }
            EvalError::UndefinedVariable { .. } | EvalError::UndefinedConstant { .. } => {
                ErrorKind::UndefinedName
            }
            EvalError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            EvalError::MissingBlock { .. } => ErrorKind::MissingBlock,
            EvalError::DivisionByZero => ErrorKind::DivisionByZero,
            EvalError::IntegerOverflow { .. } => ErrorKind::IntegerOverflow,
            EvalError::SuperclassCycle { .. } | EvalError::InvalidSuperclass { .. } => {
                ErrorKind::ClassHierarchy
            }
            EvalError::StackOverflow { .. } => ErrorKind::StackOverflow,
            EvalError::Interrupted => ErrorKind::Interrupted,
            EvalError::ControlFlow(_) => return None,
        };
        Some(kind)
    }

    /// True for every error a program can observe; false for `return`.
    pub fn is_language_error(&self) -> bool {
        self.kind().is_some()
    }

    /// Wrong argument count shorthand used by the built-ins.
    pub(crate) fn argument_count(expected: usize, got: usize) -> Self {
        EvalError::WrongArgumentCount { expected, got }
    }

    /// "Expect index argument to be Integer" shorthand.
    pub(crate) fn index_type(got: &Value) -> Self {
        EvalError::WrongArgumentType {
            argument: "index argument",
            expected: "Integer",
            got: type_name(got),
        }
    }
}

/// Get the runtime kind name of a value, as used in error messages.
///
/// Instances report their class name.
pub fn type_name(value: &Value) -> String {
    match value {
        Value::Null => "Null".to_string(),
        Value::Bool(_) => "Boolean".to_string(),
        Value::Integer(_) => "Integer".to_string(),
        Value::String(_) => "String".to_string(),
        Value::Array(_) => "Array".to_string(),
        Value::Instance(obj) => obj.class().name().to_string(),
        Value::Class(_) => "Class".to_string(),
        Value::Method(_) => "Method".to_string(),
        Value::BuiltinMethod(_) => "BuiltinMethod".to_string(),
    }
}

/// `1` is spelled out in argument-count messages.
fn count_word(count: &usize) -> String {
    match count {
        1 => "one".to_string(),
        n => n.to_string(),
    }
}

/// Result type alias for evaluation.
pub type Result<T> = std::result::Result<T, EvalError>;

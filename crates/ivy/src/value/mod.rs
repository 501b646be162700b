//! Value representation for runtime values

mod callable;
mod class;
mod display;
mod impls;

pub use callable::{BuiltinFnPtr, BuiltinMethod, Callable, ClosureValue, MethodValue};
pub use class::{Ancestors, Class, Instance};

use std::cell::RefCell;
use std::rc::Rc;

/// Shared, mutable array storage.
///
/// Arrays have reference semantics: every copy of a `Value::Array` aliases
/// the same elements.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Runtime value representation for the Ivy interpreter.
///
/// Values are organized into three tiers:
/// - Tier 1: Inline immutable primitives
/// - Tier 2: Shared mutable objects (arrays and instances)
/// - Tier 3: Classes and callables, created once by definitions
///
/// Errors and `return` signals are not values here; they travel on the
/// `Err` side of evaluation results (see [`EvalError`](crate::EvalError)).
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Inline Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// `nil`
    Null,

    /// `true` / `false`
    Bool(bool),

    /// 64-bit signed integer
    Integer(i64),

    /// Immutable string
    String(Rc<String>),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Shared Mutable Objects
    // ═══════════════════════════════════════════════════════════════════
    /// Built-in growable array
    Array(ArrayRef),

    /// Instance of a user-defined class
    Instance(Rc<Instance>),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 3: Classes and Callables
    // ═══════════════════════════════════════════════════════════════════
    /// A class
    Class(Rc<Class>),

    /// A user-defined method
    Method(Rc<MethodValue>),

    /// A native method
    BuiltinMethod(BuiltinMethod),
}

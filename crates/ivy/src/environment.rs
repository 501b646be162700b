//! Runtime environment managing variable bindings

mod prelude;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::value::Value;

/// One frame of bindings plus the link to its enclosing frame.
struct Frame {
    bindings: IndexMap<String, Value>,
    outer: Option<Environment>,
}

/// The runtime environment: a shared handle to a chain of binding frames.
///
/// Cloning an `Environment` clones the handle, not the bindings. Method
/// definitions and blocks capture the handle, which keeps the frame alive
/// for as long as the longest holder.
///
/// # Example
///
/// ```
/// use ivy::{Environment, Value};
///
/// let global = Environment::new();
/// global.define("x", Value::Integer(1));
///
/// let inner = global.child();
/// inner.define("y", Value::Integer(2));
///
/// // `set` updates the nearest existing binding...
/// inner.set("x", Value::Integer(10));
/// assert_eq!(global.get("x"), Some(Value::Integer(10)));
///
/// // ...and creates a local one otherwise.
/// inner.set("z", Value::Integer(3));
/// assert!(!global.contains("z"));
/// assert_eq!(global.get("y"), None);
/// ```
#[derive(Clone)]
pub struct Environment(Rc<RefCell<Frame>>);

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create an empty environment with no outer link.
    pub fn new() -> Self {
        Self::with_outer(None)
    }

    fn with_outer(outer: Option<Environment>) -> Self {
        Environment(Rc::new(RefCell::new(Frame {
            bindings: IndexMap::new(),
            outer,
        })))
    }

    /// Create an empty environment whose outer link is `self`.
    pub fn child(&self) -> Self {
        Self::with_outer(Some(self.clone()))
    }

    /// The enclosing environment, if any.
    pub fn outer(&self) -> Option<Environment> {
        self.0.borrow().outer.clone()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Management
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a name here, then outward.
    pub fn get(&self, name: &str) -> Option<Value> {
        let frame = self.0.borrow();
        match frame.bindings.get(name) {
            Some(value) => Some(value.clone()),
            None => frame.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Assign a name.
    ///
    /// Updates the nearest existing binding along the chain; if the name is
    /// not bound anywhere, binds it in this environment.
    pub fn set(&self, name: &str, value: Value) {
        if let Err(value) = self.assign_existing(name, value) {
            self.define(name, value);
        }
    }

    /// Overwrite an existing binding, handing the value back if there is none.
    fn assign_existing(&self, name: &str, value: Value) -> Result<(), Value> {
        let mut frame = self.0.borrow_mut();
        if let Some(slot) = frame.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match &frame.outer {
            Some(outer) => outer.assign_existing(name, value),
            None => Err(value),
        }
    }

    /// Bind a name in this environment, shadowing any outer binding.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Drop every binding in this environment.
    pub(crate) fn clear(&self) {
        let bindings = std::mem::take(&mut self.0.borrow_mut().bindings);
        drop(bindings);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Introspection
    // ═══════════════════════════════════════════════════════════════════

    /// Check if a name is bound here or in any enclosing environment.
    pub fn contains(&self, name: &str) -> bool {
        let frame = self.0.borrow();
        frame.bindings.contains_key(name)
            || frame.outer.as_ref().is_some_and(|outer| outer.contains(name))
    }

    /// Check if a name is bound in this environment itself.
    pub fn contains_in_current_scope(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(name)
    }

    /// Names bound in this environment, in binding order.
    pub fn names_in_current_scope(&self) -> Vec<String> {
        self.0.borrow().bindings.keys().cloned().collect()
    }

    /// Number of environments in the chain, counting this one.
    pub fn depth(&self) -> usize {
        1 + self.outer().map_or(0, |outer| outer.depth())
    }

    /// Check if two handles refer to the same environment.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values can point back at this environment; print names only.
        f.debug_struct("Environment")
            .field("names", &self.names_in_current_scope())
            .field("depth", &self.depth())
            .finish()
    }
}

/// The evaluation scope: the current `self` and the current environment.
#[derive(Clone)]
pub struct Scope {
    /// The receiver `self` refers to
    pub self_value: Value,

    /// Variable bindings
    pub env: Environment,
}

impl Scope {
    /// Create a scope.
    pub fn new(self_value: Value, env: Environment) -> Self {
        Self { self_value, env }
    }

    /// Same `self`, fresh child environment.
    pub fn child(&self) -> Self {
        Self::new(self.self_value.clone(), self.env.child())
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("self", &self.self_value)
            .field("env", &self.env)
            .finish()
    }
}

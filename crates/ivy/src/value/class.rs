//! Classes, instances, and the superclass chain

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::{Callable, Value};
use crate::EvalError;

/// A class: a name, an optional superclass and two method tables.
///
/// Classes are shared by every instance created from them and live for the
/// rest of the session once defined. Method tables and the superclass link
/// use interior mutability because classes can be reopened.
///
/// Invariant: the superclass chain is finite and acyclic. It is checked
/// whenever the superclass is (re)assigned, see [`Class::set_superclass`].
pub struct Class {
    name: String,
    superclass: RefCell<Option<Rc<Class>>>,
    instance_methods: RefCell<IndexMap<String, Callable>>,
    class_methods: RefCell<IndexMap<String, Callable>>,
}

impl Class {
    /// Create a class with no methods.
    pub fn new(name: impl Into<String>, superclass: Option<Rc<Class>>) -> Self {
        Self {
            name: name.into(),
            superclass: RefCell::new(superclass),
            instance_methods: RefCell::new(IndexMap::new()),
            class_methods: RefCell::new(IndexMap::new()),
        }
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The direct superclass, if any.
    pub fn superclass(&self) -> Option<Rc<Class>> {
        self.superclass.borrow().clone()
    }

    /// Iterate over this class and its ancestors, most-derived first.
    pub fn ancestors(self: &Rc<Self>) -> Ancestors {
        Ancestors {
            next: Some(Rc::clone(self)),
        }
    }

    /// True if `other` is this class or one of its ancestors.
    pub fn inherits_from(self: &Rc<Self>, other: &Rc<Class>) -> bool {
        self.ancestors().any(|class| Rc::ptr_eq(&class, other))
    }

    /// Replace the superclass.
    ///
    /// # Errors
    ///
    /// Returns `SuperclassCycle` (and leaves the hierarchy untouched) if
    /// `superclass` is this class or descends from it.
    pub fn set_superclass(self: &Rc<Self>, superclass: Rc<Class>) -> Result<(), EvalError> {
        if superclass.inherits_from(self) {
            return Err(EvalError::SuperclassCycle {
                class: self.name.clone(),
                superclass: superclass.name.clone(),
            });
        }
        *self.superclass.borrow_mut() = Some(superclass);
        Ok(())
    }

    /// Add or replace an instance method.
    pub fn define_method(&self, name: impl Into<String>, method: Callable) {
        self.instance_methods.borrow_mut().insert(name.into(), method);
    }

    /// Add or replace a class method.
    pub fn define_class_method(&self, name: impl Into<String>, method: Callable) {
        self.class_methods.borrow_mut().insert(name.into(), method);
    }

    /// Look up an instance method on this class and then up the chain.
    pub fn find_method(self: &Rc<Self>, name: &str) -> Option<Callable> {
        self.ancestors()
            .find_map(|class| class.instance_methods.borrow().get(name).cloned())
    }

    /// Look up a class method on this class and then up the chain.
    pub fn find_class_method(self: &Rc<Self>, name: &str) -> Option<Callable> {
        self.ancestors()
            .find_map(|class| class.class_methods.borrow().get(name).cloned())
    }

    /// Remove every method defined directly on this class.
    pub(crate) fn clear_methods(&self) {
        let instance = std::mem::take(&mut *self.instance_methods.borrow_mut());
        let class = std::mem::take(&mut *self.class_methods.borrow_mut());
        drop((instance, class));
    }

    /// Names of the instance methods defined directly on this class.
    pub fn instance_method_names(&self) -> Vec<String> {
        self.instance_methods.borrow().keys().cloned().collect()
    }

    /// Names of the class methods defined directly on this class.
    pub fn class_method_names(&self) -> Vec<String> {
        self.class_methods.borrow().keys().cloned().collect()
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let superclass = self.superclass();
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("superclass", &superclass.as_ref().map(|s| s.name()))
            .finish_non_exhaustive()
    }
}

/// Iterator over a class and its ancestors.
pub struct Ancestors {
    next: Option<Rc<Class>>,
}

impl Iterator for Ancestors {
    type Item = Rc<Class>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.superclass();
        Some(current)
    }
}

/// An instance of a class.
///
/// Instance variables keep insertion order for predictable inspection.
pub struct Instance {
    class: Rc<Class>,
    ivars: RefCell<IndexMap<String, Value>>,
}

impl Instance {
    /// Create an instance with no instance variables.
    pub fn new(class: Rc<Class>) -> Self {
        Self {
            class,
            ivars: RefCell::new(IndexMap::new()),
        }
    }

    /// The instance's class.
    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Read an instance variable.
    pub fn get_ivar(&self, name: &str) -> Option<Value> {
        self.ivars.borrow().get(name).cloned()
    }

    /// Write an instance variable.
    pub fn set_ivar(&self, name: impl Into<String>, value: Value) {
        self.ivars.borrow_mut().insert(name.into(), value);
    }

    /// Names of the instance variables set so far.
    pub fn ivar_names(&self) -> Vec<String> {
        self.ivars.borrow().keys().cloned().collect()
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.class.name())
            .field("ivars", &self.ivar_names())
            .finish()
    }
}

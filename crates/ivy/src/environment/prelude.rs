//! Standard prelude with the built-in classes

use std::rc::Rc;

use super::Environment;
use crate::value::{Class, Value};

impl Environment {
    /// Create a global environment with the built-in classes bound.
    pub fn with_prelude(object: &Rc<Class>, array: &Rc<Class>) -> Self {
        let env = Self::new();
        env.load_prelude(object, array);
        env
    }

    /// Bind the built-in class constants in this environment.
    pub fn load_prelude(&self, object: &Rc<Class>, array: &Rc<Class>) {
        for class in [object, array] {
            self.define(class.name(), Value::Class(Rc::clone(class)));
        }
    }
}

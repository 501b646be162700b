//! Value trait implementations: constructors, predicates, extractors, From traits, PartialEq

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Rc::new(s.into()))
    }

    /// Create a fresh array value
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items)))
    }

    /// Create a fresh instance of `class`
    pub fn instance(class: Rc<Class>) -> Self {
        Value::Instance(Rc::new(Instance::new(class)))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is `nil`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Truthiness: everything except `nil` and `false` is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    /// Check if value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Extract a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract the shared array storage
    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Snapshot of an array's elements
    pub fn to_vec(&self) -> Option<Vec<Value>> {
        self.as_array().map(|items| items.borrow().clone())
    }

    /// Extract an instance
    pub fn as_instance(&self) -> Option<&Rc<Instance>> {
        match self {
            Value::Instance(obj) => Some(obj),
            _ => None,
        }
    }

    /// Extract a class
    pub fn as_class(&self) -> Option<&Rc<Class>> {
        match self {
            Value::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Source-like representation (`"a"`, `[1, nil]`, `#<Foo>`).
    pub fn inspect(&self) -> String {
        format!("{:?}", self)
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

impl PartialEq for Value {
    /// Primitives and arrays compare structurally; objects, classes and
    /// methods compare by identity. Values of different kinds are unequal.
    fn eq(&self, other: &Self) -> bool {
        values_eq(self, other, &mut Vec::new())
    }
}

/// Array pairs already under comparison. Meeting one again means the
/// arrays are equal so far along that path.
type Comparing = Vec<(*const RefCell<Vec<Value>>, *const RefCell<Vec<Value>>)>;

fn values_eq(left: &Value, right: &Value, comparing: &mut Comparing) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(a), Value::Array(b)) => arrays_eq(a, b, comparing),
        (Value::Instance(a), Value::Instance(b)) => Rc::ptr_eq(a, b),

        (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
        (Value::Method(a), Value::Method(b)) => Rc::ptr_eq(a, b),
        (Value::BuiltinMethod(a), Value::BuiltinMethod(b)) => a.name == b.name,

        _ => false,
    }
}

fn arrays_eq(a: &ArrayRef, b: &ArrayRef, comparing: &mut Comparing) -> bool {
    if Rc::ptr_eq(a, b) {
        return true;
    }
    let pair = (Rc::as_ptr(a), Rc::as_ptr(b));
    if comparing.contains(&pair) {
        return true;
    }
    let (Ok(left), Ok(right)) = (a.try_borrow(), b.try_borrow()) else {
        return false;
    };
    if left.len() != right.len() {
        return false;
    }

    comparing.push(pair);
    let equal = crate::stack::ensure_sufficient_stack(|| {
        left.iter()
            .zip(right.iter())
            .all(|(x, y)| values_eq(x, y, comparing))
    });
    comparing.pop();
    equal
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::new(s))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

//! Display and Debug implementations for Value

use std::fmt;

use super::*;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f, &mut Vec::new())
    }
}

/// Arrays currently being printed, outermost first.
type Printing = Vec<*const RefCell<Vec<Value>>>;

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>, printing: &mut Printing) -> fmt::Result {
    match value {
        Value::Null => write!(f, "nil"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Integer(n) => write!(f, "{}", n),
        Value::String(s) => write!(f, "{:?}", s.as_str()),
        Value::Array(items) => write_array(items, f, printing),
        Value::Instance(obj) => write!(f, "#<{}>", obj.class().name()),
        Value::Class(class) => write!(f, "{}", class.name()),
        Value::Method(m) => write!(f, "#<Method {}>", m.name),
        Value::BuiltinMethod(b) => write!(f, "#<BuiltinMethod {}>", b.name),
    }
}

/// An array that contains itself prints the inner occurrence as `[...]`.
fn write_array(
    items: &ArrayRef,
    f: &mut fmt::Formatter<'_>,
    printing: &mut Printing,
) -> fmt::Result {
    let ptr = Rc::as_ptr(items);
    if printing.contains(&ptr) {
        return write!(f, "[...]");
    }
    let Ok(borrowed) = items.try_borrow() else {
        return write!(f, "[...]");
    };

    printing.push(ptr);
    let result = crate::stack::ensure_sufficient_stack(|| {
        write!(f, "[")?;
        for (i, item) in borrowed.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_value(item, f, printing)?;
        }
        write!(f, "]")
    });
    printing.pop();
    result
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s.as_str()), // No quotes for Display
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

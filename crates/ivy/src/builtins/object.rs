//! The built-in `Object` root class

use std::rc::Rc;

use super::builtin;
use crate::value::{Class, ClosureValue, Value};
use crate::{EvalError, Interpreter};

/// Create the `Object` class.
///
/// Class methods: `new`, `superclass`, `name`.
/// Instance methods: `class`, `inspect`, `to_s`.
pub fn object_class() -> Rc<Class> {
    let class = Rc::new(Class::new("Object", None));

    class.define_class_method("new", builtin("new", object_new));
    class.define_class_method("superclass", builtin("superclass", class_superclass));
    class.define_class_method("name", builtin("name", class_name));

    class.define_method("class", builtin("class", object_class_of));
    class.define_method("inspect", builtin("inspect", object_inspect));
    class.define_method("to_s", builtin("to_s", object_inspect));
    class
}

fn receiver_class(receiver: &Value) -> Result<&Rc<Class>, EvalError> {
    receiver.as_class().ok_or_else(|| EvalError::InvalidReceiver {
        receiver: receiver.inspect(),
    })
}

/// `Foo.new(args...)`: allocate an instance and run `initialize` if defined.
fn object_new(
    interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    let class = receiver_class(receiver)?;
    let instance = Value::instance(Rc::clone(class));

    if class.find_method("initialize").is_some() {
        interp.send(instance.clone(), "initialize", args.to_vec(), block.cloned())?;
    } else if !args.is_empty() {
        return Err(EvalError::ArityMismatch {
            expected: 0,
            got: args.len(),
        });
    }

    Ok(instance)
}

fn class_superclass(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    super::check_argc(args, 0)?;
    Ok(receiver_class(receiver)?
        .superclass()
        .map_or(Value::Null, Value::Class))
}

fn class_name(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    super::check_argc(args, 0)?;
    Ok(Value::string(receiver_class(receiver)?.name()))
}

fn object_class_of(
    interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    super::check_argc(args, 0)?;
    interp
        .class_of(receiver)
        .map(Value::Class)
        .ok_or_else(|| EvalError::InvalidReceiver {
            receiver: receiver.inspect(),
        })
}

fn object_inspect(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    super::check_argc(args, 0)?;
    Ok(Value::string(receiver.inspect()))
}

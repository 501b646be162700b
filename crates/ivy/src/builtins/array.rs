//! The built-in `Array` class
//!
//! Reads never fail on range: an index outside `-len..len` yields `nil`.
//! Writes past the end grow the array, filling the gap with `nil`.
//!
//! Iterating methods re-read the array on every step instead of holding a
//! borrow across block calls, so a block may freely read or mutate the
//! array it is iterating over.

use std::rc::Rc;

use super::{builtin, check_argc, check_max_argc};
use crate::error::type_name;
use crate::value::{ArrayRef, BuiltinFnPtr, Class, ClosureValue, Value};
use crate::{EvalError, Interpreter};

/// Largest length a write past the end may grow an array to.
pub const MAX_LENGTH: usize = 1 << 24;

const METHODS: &[(&str, BuiltinFnPtr)] = &[
    ("[]", array_get),
    ("[]=", array_set),
    ("at", array_get),
    ("push", array_push),
    ("pop", array_pop),
    ("shift", array_shift),
    ("clear", array_clear),
    ("length", array_length),
    ("count", array_count),
    ("first", array_first),
    ("last", array_last),
    ("rotate", array_rotate),
    ("each", array_each),
    ("each_index", array_each_index),
    ("map", array_map),
    ("select", array_select),
    ("concat", array_concat),
];

/// Create the `Array` class, a subclass of `object`.
pub fn array_class(object: &Rc<Class>) -> Rc<Class> {
    let class = Rc::new(Class::new("Array", Some(Rc::clone(object))));
    for &(name, func) in METHODS {
        class.define_method(name, builtin(name, func));
    }
    class.define_class_method("new", builtin("new", array_new));
    class
}

// ═══════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════

/// Map a possibly negative index onto `0..len`.
fn normalize_index(index: i64, len: usize) -> Option<usize> {
    if index >= 0 {
        let i = usize::try_from(index).ok()?;
        (i < len).then_some(i)
    } else {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}

fn receiver_items(receiver: &Value) -> Result<&ArrayRef, EvalError> {
    receiver.as_array().ok_or_else(|| EvalError::InvalidReceiver {
        receiver: receiver.inspect(),
    })
}

fn index_arg(arg: &Value) -> Result<i64, EvalError> {
    arg.as_i64().ok_or_else(|| EvalError::index_type(arg))
}

/// A non-negative element count argument.
fn count_arg(arg: &Value, len: usize) -> Result<usize, EvalError> {
    let n = index_arg(arg)?;
    usize::try_from(n).map_err(|_| EvalError::IndexOutOfRange { index: n, len })
}

fn element_at(items: &ArrayRef, index: usize) -> Option<Value> {
    items.borrow().get(index).cloned()
}

fn require_block<'a>(
    block: Option<&'a ClosureValue>,
    method: &str,
) -> Result<&'a ClosureValue, EvalError> {
    block.ok_or_else(|| EvalError::MissingBlock {
        method: method.to_string(),
    })
}

// ═══════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════

fn array_new(
    _interp: &mut Interpreter,
    _receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_argc(args, 0)?;
    Ok(Value::array(Vec::new()))
}

// ═══════════════════════════════════════════════════════════════════════
// Element Access
// ═══════════════════════════════════════════════════════════════════════

/// `a[i]`, `a.at(i)`
fn array_get(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_argc(args, 1)?;
    let index = index_arg(&args[0])?;
    let items = receiver_items(receiver)?.borrow();

    Ok(normalize_index(index, items.len())
        .map(|i| items[i].clone())
        .unwrap_or(Value::Null))
}

/// `a[i] = v`
fn array_set(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_argc(args, 2)?;
    let index = index_arg(&args[0])?;
    let value = args[1].clone();
    let mut items = receiver_items(receiver)?.borrow_mut();
    let len = items.len();
    let out_of_range = EvalError::IndexOutOfRange { index, len };

    let slot = if index >= 0 {
        let i = usize::try_from(index).map_err(|_| out_of_range.clone())?;
        if i >= MAX_LENGTH {
            return Err(out_of_range);
        }
        if i >= len {
            items.resize(i + 1, Value::Null);
        }
        i
    } else {
        normalize_index(index, len).ok_or(out_of_range)?
    };

    items[slot] = value.clone();
    Ok(value)
}

/// `a.first`, `a.first(n)`
fn array_first(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_max_argc(args, 1)?;
    let items = receiver_items(receiver)?.borrow();

    match args.first() {
        None => Ok(items.first().cloned().unwrap_or(Value::Null)),
        Some(arg) => {
            let n = count_arg(arg, items.len())?.min(items.len());
            Ok(Value::array(items[..n].to_vec()))
        }
    }
}

/// `a.last`, `a.last(n)`
fn array_last(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_max_argc(args, 1)?;
    let items = receiver_items(receiver)?.borrow();

    match args.first() {
        None => Ok(items.last().cloned().unwrap_or(Value::Null)),
        Some(arg) => {
            let n = count_arg(arg, items.len())?.min(items.len());
            Ok(Value::array(items[items.len() - n..].to_vec()))
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Mutation
// ═══════════════════════════════════════════════════════════════════════

fn array_push(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    receiver_items(receiver)?
        .borrow_mut()
        .extend(args.iter().cloned());
    Ok(receiver.clone())
}

fn array_pop(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_argc(args, 0)?;
    Ok(receiver_items(receiver)?
        .borrow_mut()
        .pop()
        .unwrap_or(Value::Null))
}

fn array_shift(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_argc(args, 0)?;
    let mut items = receiver_items(receiver)?.borrow_mut();
    if items.is_empty() {
        return Ok(Value::Null);
    }
    Ok(items.remove(0))
}

fn array_clear(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_argc(args, 0)?;
    receiver_items(receiver)?.borrow_mut().clear();
    Ok(receiver.clone())
}

/// `a.concat(b, c, ...)`: every argument is checked before `a` changes.
fn array_concat(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    let items = receiver_items(receiver)?;

    let mut appended = Vec::new();
    for arg in args {
        let other = arg.as_array().ok_or_else(|| EvalError::WrongArgumentType {
            argument: "argument",
            expected: "Array",
            got: type_name(arg),
        })?;
        // Copy first: `arg` may alias the receiver.
        appended.extend(other.borrow().iter().cloned());
    }

    items.borrow_mut().extend(appended);
    Ok(receiver.clone())
}

// ═══════════════════════════════════════════════════════════════════════
// Size and Order
// ═══════════════════════════════════════════════════════════════════════

fn len_value(len: usize) -> Value {
    Value::Integer(i64::try_from(len).unwrap_or(i64::MAX))
}

fn array_length(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_argc(args, 0)?;
    Ok(len_value(receiver_items(receiver)?.borrow().len()))
}

/// `a.count`, `a.count(v)`, `a.count { |x| ... }`
fn array_count(
    interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_max_argc(args, 1)?;
    let items = receiver_items(receiver)?;

    let count = match (args.first(), block) {
        (Some(target), _) => items.borrow().iter().filter(|item| *item == target).count(),
        (None, Some(block)) => {
            let mut count = 0;
            let mut i = 0;
            while let Some(item) = element_at(items, i) {
                if interp.call_block(block, vec![item])?.is_truthy() {
                    count += 1;
                }
                i += 1;
            }
            count
        }
        (None, None) => items.borrow().len(),
    };

    Ok(len_value(count))
}

/// `a.rotate`, `a.rotate(n)`: a new array rotated left by `n`.
fn array_rotate(
    _interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    _block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_max_argc(args, 1)?;
    let n = match args.first() {
        Some(arg) => index_arg(arg)?,
        None => 1,
    };
    let mut rotated = receiver_items(receiver)?.borrow().clone();

    if let Ok(len) = i64::try_from(rotated.len()) {
        if len > 0 {
            // rem_euclid keeps the shift in 0..len; negative n rotates right.
            let shift = n.rem_euclid(len) as usize;
            rotated.rotate_left(shift);
        }
    }

    Ok(Value::array(rotated))
}

// ═══════════════════════════════════════════════════════════════════════
// Iteration
// ═══════════════════════════════════════════════════════════════════════

/// `a.each { |x| ... }`: yields the last block value, `nil` if empty.
fn array_each(
    interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_argc(args, 0)?;
    let block = require_block(block, "each")?;
    let items = receiver_items(receiver)?;

    let mut last = Value::Null;
    let mut i = 0;
    while let Some(item) = element_at(items, i) {
        last = interp.call_block(block, vec![item])?;
        i += 1;
    }
    Ok(last)
}

/// `a.each_index { |i| ... }`
fn array_each_index(
    interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_argc(args, 0)?;
    let block = require_block(block, "each_index")?;
    let items = receiver_items(receiver)?;

    let mut last = Value::Null;
    let mut i = 0;
    while i < items.borrow().len() {
        last = interp.call_block(block, vec![len_value(i)])?;
        i += 1;
    }
    Ok(last)
}

fn array_map(
    interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_argc(args, 0)?;
    let block = require_block(block, "map")?;
    let items = receiver_items(receiver)?;

    let mut mapped = Vec::new();
    let mut i = 0;
    while let Some(item) = element_at(items, i) {
        mapped.push(interp.call_block(block, vec![item])?);
        i += 1;
    }
    Ok(Value::array(mapped))
}

fn array_select(
    interp: &mut Interpreter,
    receiver: &Value,
    args: &[Value],
    block: Option<&ClosureValue>,
) -> Result<Value, EvalError> {
    check_argc(args, 0)?;
    let block = require_block(block, "select")?;
    let items = receiver_items(receiver)?;

    let mut selected = Vec::new();
    let mut i = 0;
    while let Some(item) = element_at(items, i) {
        if interp.call_block(block, vec![item.clone()])?.is_truthy() {
            selected.push(item);
        }
        i += 1;
    }
    Ok(Value::array(selected))
}

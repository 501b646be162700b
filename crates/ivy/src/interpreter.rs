//! Interpreter session: built-in classes, global scope and call frames

use std::fmt;
use std::rc::{Rc, Weak};

use crate::ast::Program;
use crate::builtins;
use crate::eval::Evaluate;
use crate::value::{Class, ClosureValue, Value};
use crate::{Environment, EvalContext, EvalError, Scope};

/// One entry of the call-frame stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// The method being executed
    pub method: String,

    /// Name of the class the method was resolved through
    pub class: String,
}

impl CallFrame {
    /// Create a frame.
    pub fn new(method: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            class: class.into(),
        }
    }
}

impl fmt::Display for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.class, self.method)
    }
}

/// An interpreter session.
///
/// Owns the built-in classes, the global scope and the call-frame stack.
/// Definitions made by one [`run`](Interpreter::run) stay visible to the
/// next, so a session can evaluate a program piece by piece.
///
/// # Example
///
/// ```
/// use ivy::ast::{Expression, InfixOp, Program, Statement};
/// use ivy::{Interpreter, Value};
///
/// let mut interp = Interpreter::new();
/// let program = Program::new(vec![Statement::expr(Expression::infix(
///     Expression::int(40),
///     InfixOp::Add,
///     Expression::int(2),
/// ))]);
///
/// assert_eq!(interp.run(&program).unwrap(), Value::Integer(42));
/// assert_eq!(interp.call_depth(), 0);
/// ```
pub struct Interpreter {
    ctx: EvalContext,
    frames: Vec<CallFrame>,
    object_class: Rc<Class>,
    array_class: Rc<Class>,
    globals: Scope,
    /// Classes defined by programs, released on drop.
    classes: Vec<Weak<Class>>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Create a session with default settings.
    pub fn new() -> Self {
        Self::with_context(EvalContext::default())
    }

    /// Create a session with the given configuration.
    pub fn with_context(ctx: EvalContext) -> Self {
        let object_class = builtins::object::object_class();
        let array_class = builtins::array::array_class(&object_class);
        let env = Environment::with_prelude(&object_class, &array_class);
        let main = Value::instance(Rc::clone(&object_class));

        Self {
            ctx,
            frames: Vec::new(),
            object_class,
            array_class,
            globals: Scope::new(main, env),
            classes: Vec::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════

    /// The evaluation configuration.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// The top-level scope (`self` is `main`).
    pub fn global_scope(&self) -> &Scope {
        &self.globals
    }

    /// The built-in `Object` class.
    pub fn object_class(&self) -> &Rc<Class> {
        &self.object_class
    }

    /// The built-in `Array` class.
    pub fn array_class(&self) -> &Rc<Class> {
        &self.array_class
    }

    /// The class a value dispatches instance methods through, if any.
    pub fn class_of(&self, value: &Value) -> Option<Rc<Class>> {
        match value {
            Value::Instance(obj) => Some(Rc::clone(obj.class())),
            Value::Array(_) => Some(Rc::clone(&self.array_class)),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Running Programs
    // ═══════════════════════════════════════════════════════════════════

    /// Evaluate a program in the global scope.
    ///
    /// The call-frame stack is cleared first. After an error it holds the
    /// frames of the failing call path, innermost last.
    ///
    /// # Errors
    ///
    /// Returns the first language error raised by the program.
    pub fn run(&mut self, program: &Program) -> Result<Value, EvalError> {
        self.frames.clear();
        let scope = self.globals.clone();
        program.eval(self, &scope)
    }

    /// Invoke a block with the given arguments.
    ///
    /// The block body runs in a fresh child of its captured environment.
    /// Missing arguments bind `nil`; extra arguments are dropped. A `return`
    /// inside the block propagates to the enclosing method call.
    ///
    /// # Errors
    ///
    /// Returns errors from the block body.
    pub fn call_block(
        &mut self,
        block: &ClosureValue,
        args: Vec<Value>,
    ) -> Result<Value, EvalError> {
        let env = block.scope.env.child();
        let mut args = args.into_iter();
        for param in &block.params {
            env.define(param.as_str(), args.next().unwrap_or(Value::Null));
        }
        let scope = Scope::new(block.scope.self_value.clone(), env);
        block.body.eval(self, &scope)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Call Frames
    // ═══════════════════════════════════════════════════════════════════

    /// Number of frames currently on the stack.
    pub fn call_depth(&self) -> usize {
        self.frames.len()
    }

    /// The current frame stack, outermost first.
    pub fn backtrace(&self) -> &[CallFrame] {
        &self.frames
    }

    pub(crate) fn check_interrupt(&self) -> Result<(), EvalError> {
        if self.ctx.is_interrupted() {
            return Err(EvalError::Interrupted);
        }
        Ok(())
    }

    /// Push a frame, enforcing the depth limit.
    pub(crate) fn enter_call(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        let max = self.ctx.max_call_depth;
        if self.frames.len() >= max {
            return Err(EvalError::StackOverflow {
                depth: self.frames.len() + 1,
                max,
            });
        }
        self.frames.push(frame);
        Ok(())
    }

    pub(crate) fn register_class(&mut self, class: &Rc<Class>) {
        self.classes.retain(|weak| weak.strong_count() > 0);
        self.classes.push(Rc::downgrade(class));
    }

    /// Pop the innermost frame unless the call failed with a language error.
    pub(crate) fn exit_call(&mut self, result: &Result<Value, EvalError>) {
        match result {
            Err(err) if err.is_language_error() => {
                if let Some(frame) = self.frames.last() {
                    tracing::trace!(%frame, error = %err, "call failed");
                }
            }
            _ => {
                self.frames.pop();
            }
        }
    }
}

/// Methods capture the scope they were defined in, and that scope binds the
/// class holding them. Emptying the method tables and the global frame
/// breaks those reference cycles so the session's objects are freed.
impl Drop for Interpreter {
    fn drop(&mut self) {
        let builtins = [Rc::clone(&self.object_class), Rc::clone(&self.array_class)];
        let defined = self.classes.drain(..).filter_map(|weak| weak.upgrade());
        for class in builtins.into_iter().chain(defined) {
            class.clear_methods();
        }
        self.globals.env.clear();
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("ctx", &self.ctx)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

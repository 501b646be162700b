//! Expression evaluation

pub mod binary;
pub mod call;
pub mod control;
pub mod if_expr;
pub mod item;
pub mod literal;
pub mod path;
pub mod stmt;
pub mod unary;

pub use control::ControlFlow;

use crate::ast::Expression;
use crate::{EvalError, Interpreter, Scope, Value};

/// Trait for evaluating AST nodes to values.
///
/// This is the core abstraction for the tree-walking interpreter.
/// Each node type of [`crate::ast`] implements this trait.
pub trait Evaluate {
    /// Evaluate this AST node in the given scope.
    fn eval(&self, interp: &mut Interpreter, scope: &Scope) -> Result<Value, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expression {
    fn eval(&self, interp: &mut Interpreter, scope: &Scope) -> Result<Value, EvalError> {
        // Check for interruption before each expression
        interp.check_interrupt()?;

        crate::stack::ensure_sufficient_stack(|| match self {
            // Literals
            Expression::Integer(n) => Ok(Value::Integer(*n)),
            Expression::String(s) => Ok(Value::string(s.as_str())),
            Expression::Boolean(b) => Ok(Value::Bool(*b)),
            Expression::Nil => Ok(Value::Null),
            Expression::Array(elements) => literal::eval_array(elements, interp, scope),

            // Names
            Expression::Identifier(name) => path::eval_identifier(name, scope),
            Expression::Constant(name) => path::eval_constant(name, scope),
            Expression::InstanceVariable(name) => Ok(path::eval_ivar(name, scope)),
            Expression::SelfRef => Ok(scope.self_value.clone()),

            // Control flow
            Expression::If {
                condition,
                consequence,
                alternative,
            } => if_expr::eval_if(condition, consequence, alternative.as_ref(), interp, scope),

            // Calls and operators
            Expression::Call(call) => call.eval(interp, scope),
            Expression::Prefix { op, right } => unary::eval_prefix(*op, right, interp, scope),
            Expression::Infix { left, op, right } => {
                binary::eval_infix(left, *op, right, interp, scope)
            }
        })
    }
}

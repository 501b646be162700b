//! Syntax tree consumed by the evaluator
//!
//! The tree is produced by an external parser. Its node set is closed: the
//! evaluator matches every variant exhaustively, so an unhandled node kind is
//! a compile error rather than a runtime condition.
//!
//! Method and block bodies are reference-counted so that every `Method` value
//! created from a `def` shares the same read-only body.
//!
//! The constructors below are what a parser (or a test) uses to build trees:
//!
//! ```
//! use ivy::ast::{Expression, InfixOp, Program, Statement};
//!
//! // sum = 1 + 2
//! let program = Program::new(vec![Statement::assign(
//!     "sum",
//!     Expression::infix(Expression::int(1), InfixOp::Add, Expression::int(2)),
//! )]);
//! assert_eq!(program.statements.len(), 1);
//! ```

use std::fmt;
use std::rc::Rc;

/// A whole program: the root of every tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level statements in source order
    pub statements: Vec<Statement>,
}

impl Program {
    /// Create a program from its statements.
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// A statement sequence used as a class, method, block or branch body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    /// Statements in source order
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    /// Create a block from its statements.
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// Statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its value
    Expression(Expression),

    /// `return <expr>`
    Return(Expression),

    /// `<target> = <expr>`
    Let {
        /// Where the value is stored
        target: AssignTarget,
        /// The right-hand side
        value: Expression,
    },

    /// `class Name < Super ... end`
    Class(ClassStatement),

    /// `def name(params) ... end`
    Def(DefStatement),
}

/// Assignment target of a `Let` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignTarget {
    /// A local variable
    Local(String),
    /// An instance variable of `self` (name includes the `@`)
    InstanceVariable(String),
}

/// Class definition (or reopening).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStatement {
    /// Constant the class is bound to
    pub name: String,
    /// Constant naming the superclass, if given
    pub superclass: Option<String>,
    /// Class body, evaluated with `self` bound to the class
    pub body: BlockStatement,
}

/// Method definition.
#[derive(Debug, Clone, PartialEq)]
pub struct DefStatement {
    /// Method name
    pub name: String,
    /// Parameter names in declaration order
    pub params: Vec<String>,
    /// Method body
    pub body: Rc<BlockStatement>,
    /// `def self.name` - defines a class method
    pub singleton: bool,
}

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Integer literal
    Integer(i64),
    /// String literal
    String(String),
    /// `true` / `false`
    Boolean(bool),
    /// `nil`
    Nil,
    /// `[a, b, c]`
    Array(Vec<Expression>),
    /// Local variable reference
    Identifier(String),
    /// Constant reference (class names)
    Constant(String),
    /// `@name`
    InstanceVariable(String),
    /// `self`
    SelfRef,
    /// `if cond ... else ... end`
    If {
        /// Condition (truthiness)
        condition: Box<Expression>,
        /// Taken when the condition is truthy
        consequence: BlockStatement,
        /// Taken otherwise
        alternative: Option<BlockStatement>,
    },
    /// `receiver.method(args) { |params| ... }`
    Call(CallExpression),
    /// `!x`, `-x`
    Prefix {
        /// Operator
        op: PrefixOp,
        /// Operand
        right: Box<Expression>,
    },
    /// `a + b`, `a == b`, ...
    Infix {
        /// Left operand
        left: Box<Expression>,
        /// Operator
        op: InfixOp,
        /// Right operand
        right: Box<Expression>,
    },
}

/// A method call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    /// The receiver expression
    pub receiver: Box<Expression>,
    /// Method name
    pub method: String,
    /// Positional arguments
    pub arguments: Vec<Expression>,
    /// Block literal passed to the call
    pub block: Option<BlockLiteral>,
}

/// A `{ |params| body }` / `do |params| body end` literal.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLiteral {
    /// Block parameter names
    pub params: Vec<String>,
    /// Block body
    pub body: Rc<BlockStatement>,
}

impl BlockLiteral {
    /// Create a block literal.
    pub fn new(params: &[&str], body: Vec<Statement>) -> Self {
        Self {
            params: params.iter().map(|p| p.to_string()).collect(),
            body: Rc::new(BlockStatement::new(body)),
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    /// `!`
    Not,
    /// `-`
    Neg,
}

impl PrefixOp {
    /// Source form of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            PrefixOp::Not => "!",
            PrefixOp::Neg => "-",
        }
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl InfixOp {
    /// Source form of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
            InfixOp::Le => "<=",
            InfixOp::Ge => ">=",
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
            InfixOp::And => "&&",
            InfixOp::Or => "||",
        }
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Builders
// ═══════════════════════════════════════════════════════════════════════

impl Statement {
    /// Expression statement.
    pub fn expr(expr: Expression) -> Self {
        Statement::Expression(expr)
    }

    /// `name = value`
    pub fn assign(name: impl Into<String>, value: Expression) -> Self {
        Statement::Let {
            target: AssignTarget::Local(name.into()),
            value,
        }
    }

    /// `@name = value`
    pub fn assign_ivar(name: impl Into<String>, value: Expression) -> Self {
        Statement::Let {
            target: AssignTarget::InstanceVariable(name.into()),
            value,
        }
    }

    /// `return value`
    pub fn ret(value: Expression) -> Self {
        Statement::Return(value)
    }

    /// `class name < superclass; body; end`
    pub fn class(name: impl Into<String>, superclass: Option<&str>, body: Vec<Statement>) -> Self {
        Statement::Class(ClassStatement {
            name: name.into(),
            superclass: superclass.map(str::to_string),
            body: BlockStatement::new(body),
        })
    }

    /// `def name(params); body; end`
    pub fn def(name: impl Into<String>, params: &[&str], body: Vec<Statement>) -> Self {
        Statement::Def(DefStatement {
            name: name.into(),
            params: params.iter().map(|p| p.to_string()).collect(),
            body: Rc::new(BlockStatement::new(body)),
            singleton: false,
        })
    }

    /// `def self.name(params); body; end`
    pub fn def_singleton(name: impl Into<String>, params: &[&str], body: Vec<Statement>) -> Self {
        Statement::Def(DefStatement {
            name: name.into(),
            params: params.iter().map(|p| p.to_string()).collect(),
            body: Rc::new(BlockStatement::new(body)),
            singleton: true,
        })
    }
}

impl Expression {
    /// Integer literal.
    pub fn int(value: i64) -> Self {
        Expression::Integer(value)
    }

    /// String literal.
    pub fn string(value: impl Into<String>) -> Self {
        Expression::String(value.into())
    }

    /// Boolean literal.
    pub fn boolean(value: bool) -> Self {
        Expression::Boolean(value)
    }

    /// `nil`
    pub fn nil() -> Self {
        Expression::Nil
    }

    /// Array literal.
    pub fn array(elements: Vec<Expression>) -> Self {
        Expression::Array(elements)
    }

    /// Local variable reference.
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    /// Constant reference.
    pub fn constant(name: impl Into<String>) -> Self {
        Expression::Constant(name.into())
    }

    /// Instance variable reference.
    pub fn ivar(name: impl Into<String>) -> Self {
        Expression::InstanceVariable(name.into())
    }

    /// `self`
    pub fn self_ref() -> Self {
        Expression::SelfRef
    }

    /// `receiver.method(args)`
    pub fn call(
        receiver: Expression,
        method: impl Into<String>,
        arguments: Vec<Expression>,
    ) -> Self {
        Expression::Call(CallExpression {
            receiver: Box::new(receiver),
            method: method.into(),
            arguments,
            block: None,
        })
    }

    /// `receiver.method(args) { |params| body }`
    pub fn call_with_block(
        receiver: Expression,
        method: impl Into<String>,
        arguments: Vec<Expression>,
        block: BlockLiteral,
    ) -> Self {
        Expression::Call(CallExpression {
            receiver: Box::new(receiver),
            method: method.into(),
            arguments,
            block: Some(block),
        })
    }

    /// `receiver[index]`, sugar for `receiver.[](index)`
    pub fn index(receiver: Expression, index: Expression) -> Self {
        Expression::call(receiver, "[]", vec![index])
    }

    /// `receiver[index] = value`, sugar for `receiver.[]=(index, value)`
    pub fn index_assign(receiver: Expression, index: Expression, value: Expression) -> Self {
        Expression::call(receiver, "[]=", vec![index, value])
    }

    /// Prefix operation.
    pub fn prefix(op: PrefixOp, right: Expression) -> Self {
        Expression::Prefix {
            op,
            right: Box::new(right),
        }
    }

    /// Infix operation.
    pub fn infix(left: Expression, op: InfixOp, right: Expression) -> Self {
        Expression::Infix {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// `if condition; consequence; else; alternative; end`
    pub fn if_else(
        condition: Expression,
        consequence: Vec<Statement>,
        alternative: Option<Vec<Statement>>,
    ) -> Self {
        Expression::If {
            condition: Box::new(condition),
            consequence: BlockStatement::new(consequence),
            alternative: alternative.map(BlockStatement::new),
        }
    }
}

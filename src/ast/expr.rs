//! Expression AST nodes.

use crate::token::Token;
use crate::value::Value;

/// An expression node.
///
/// Expressions always produce a [`Value`] when evaluated; statements never
/// do (see [`crate::ast::Stmt`]).
#[derive(Debug, Clone)]
pub enum Expr {
    /// `left op right`, where `op.kind` is one of the binary operator kinds.
    Binary {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },
    /// A parenthesised sub-expression: `( inner )`.
    Grouping { inner: Box<Expr> },
    /// A literal value baked in at parse time: `nil`, `true`, `false`, a
    /// number, or a string. Never holds a callable.
    Literal { value: Value },
    /// A prefix unary operator applied to `right`.
    Unary { op: Token, right: Box<Expr> },
    /// A reference to a variable by name.
    Variable { name: Token },
    /// `name = value`.
    Assign { name: Token, value: Box<Expr> },
    /// Short-circuiting `&&`/`||`.
    Logical {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },
    /// A function call. `paren` is the closing `)`, kept for diagnostics.
    Call {
        callee: Box<Expr>,
        paren: Token,
        arguments: Vec<Expr>,
    },
}

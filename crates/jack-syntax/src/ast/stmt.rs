//! Statement AST nodes for Jack.

use crate::ast::expr::Expr;

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stmt<'ast> {
    /// `do call(...);`
    Do(DoStmt<'ast>),
    /// `let target = value;` or `let target[index] = value;`
    Let(LetStmt<'ast>),
    /// `return;` or `return expr;`
    Return(ReturnStmt<'ast>),
}

/// A subroutine call.
///
/// Examples:
/// - `draw()`
/// - `Output.printInt(x)`
/// - `ball.move(dx, dy)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubroutineCall<'ast> {
    /// Class or variable name before the dot, if any
    pub receiver: Option<&'ast str>,
    /// Subroutine name
    pub name: &'ast str,
    /// Arguments in source order
    pub args: &'ast [Expr<'ast>],
}

/// A `do` statement: a call whose result is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoStmt<'ast> {
    pub call: SubroutineCall<'ast>,
}

/// A `let` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetStmt<'ast> {
    /// Variable being assigned
    pub target: &'ast str,
    /// Array index, for `let a[i] = ...`
    pub index: Option<&'ast Expr<'ast>>,
    /// Right-hand side
    pub value: Expr<'ast>,
}

/// A return statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnStmt<'ast> {
    /// Optional return value
    pub value: Option<Expr<'ast>>,
}

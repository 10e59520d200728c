//! Declaration AST nodes for Jack.
//!
//! A compilation unit is one [`ClassDecl`]: class-scope variables followed
//! by subroutines.

use crate::ast::stmt::Stmt;

/// A class declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDecl<'ast> {
    /// Class name
    pub name: &'ast str,
    /// `static` and `field` declarations in source order
    pub vars: &'ast [ClassVarDecl<'ast>],
    /// Subroutines in source order
    pub subroutines: &'ast [SubroutineDecl<'ast>],
}

/// Storage kind of a class-scope variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassVarKind {
    /// `static`: one per class
    Static,
    /// `field`: one per instance
    Field,
}

/// A class-scope variable declaration.
///
/// Example: `field int x, y;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassVarDecl<'ast> {
    pub kind: ClassVarKind,
    pub ty: TypeName<'ast>,
    pub names: &'ast [&'ast str],
}

/// A variable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName<'ast> {
    Int,
    Char,
    Boolean,
    /// A class name, e.g. `Array`
    Class(&'ast str),
}

/// A subroutine's return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnType<'ast> {
    Void,
    Type(TypeName<'ast>),
}

/// The kind of subroutine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubroutineKind {
    /// `constructor`: allocates and returns a new instance
    Constructor,
    /// `function`: no receiver
    Function,
    /// `method`: called on an instance
    Method,
}

/// A subroutine declaration.
///
/// Examples:
/// - `constructor Point new(int ax, int ay) { ... }`
/// - `function void main() { var int i; ... }`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubroutineDecl<'ast> {
    pub kind: SubroutineKind,
    pub return_type: ReturnType<'ast>,
    pub name: &'ast str,
    /// Parameters in source order
    pub params: &'ast [Param<'ast>],
    /// `var` declarations at the top of the body
    pub locals: &'ast [VarDecl<'ast>],
    /// Statements in the body
    pub body: &'ast [Stmt<'ast>],
}

impl<'ast> SubroutineDecl<'ast> {
    /// Number of local variables, one per declared name.
    pub fn local_count(&self) -> usize {
        self.locals.iter().map(|decl| decl.names.len()).sum()
    }
}

/// A subroutine parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'ast> {
    pub ty: TypeName<'ast>,
    pub name: &'ast str,
}

/// A local variable declaration.
///
/// Example: `var int i, j;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarDecl<'ast> {
    pub ty: TypeName<'ast>,
    pub names: &'ast [&'ast str],
}

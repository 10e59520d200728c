//! Error types for the Jack front-end.
//!
//! ## Error Hierarchy
//!
//! ```text
//! JackError (top-level wrapper)
//! ├── AstError          - malformed flattened expression sequences
//! └── CompilationError  - symbol resolution and code generation errors
//! ```
//!
//! Lexing is total over its input and has no error type.

use thiserror::Error;

use crate::QualifiedName;

// ============================================================================
// Tree Construction Errors
// ============================================================================

/// Errors raised when a flattened `term (op term)*` sequence is turned
/// into an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// The sequence has no elements.
    #[error("expression has no elements")]
    EmptyExpression,

    /// The sequence ends with an operator.
    #[error("expression has an even number of elements ({len})")]
    EvenLength { len: usize },

    /// An operator sits where a term belongs.
    #[error("expected a term at element {position}")]
    ExpectedTerm { position: usize },

    /// A term sits where an operator belongs.
    #[error("expected an operator at element {position}")]
    ExpectedOperator { position: usize },
}

// ============================================================================
// Compilation Errors
// ============================================================================

/// Input shapes the generator does not translate.
///
/// Under the default policy these produce no instructions; under the
/// rejecting policy they surface as [`CompilationError::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedConstruct {
    /// `let a[i] = ...`
    IndexedAssignment,
    /// `let` into a class-scope (static) variable.
    StaticAssignment,
    /// Reading a class-scope (static) variable.
    StaticReference,
    /// `return <expr>` where `<expr>` is anything but `this`.
    ReturnExpression,
    /// A string constant term.
    StringConstant,
    /// A keyword constant term (`true`, `false`, `null`, `this` outside a return).
    KeywordConstant,
    /// A unary prefix term (`-x`, `~x`).
    UnaryTerm,
    /// A comparison or logical operator.
    Operator,
}

impl UnsupportedConstruct {
    /// Returns a human-readable name for this construct.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnsupportedConstruct::IndexedAssignment => "indexed assignment",
            UnsupportedConstruct::StaticAssignment => "static assignment",
            UnsupportedConstruct::StaticReference => "static reference",
            UnsupportedConstruct::ReturnExpression => "return expression",
            UnsupportedConstruct::StringConstant => "string constant",
            UnsupportedConstruct::KeywordConstant => "keyword constant",
            UnsupportedConstruct::UnaryTerm => "unary term",
            UnsupportedConstruct::Operator => "comparison or logical operator",
        }
    }
}

impl std::fmt::Display for UnsupportedConstruct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that occur while generating VM code for a class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilationError {
    /// A name resolved in neither the subroutine nor the class scope.
    #[error("unresolved symbol '{name}' in {subroutine}")]
    UnresolvedSymbol {
        name: String,
        subroutine: QualifiedName,
    },

    /// A name was declared twice in the same scope.
    #[error("'{name}' is already declared in {scope}")]
    Redeclaration { name: String, scope: String },

    /// A construct the generator does not translate, under the rejecting policy.
    #[error("unsupported {construct} in {subroutine}")]
    Unsupported {
        construct: UnsupportedConstruct,
        subroutine: QualifiedName,
    },
}

// ============================================================================
// Top-level
// ============================================================================

/// Any error produced by the Jack front-end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JackError {
    #[error(transparent)]
    Ast(#[from] AstError),

    #[error(transparent)]
    Compilation(#[from] CompilationError),
}

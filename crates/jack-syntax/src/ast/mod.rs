//! Abstract Syntax Tree (AST) for Jack.
//!
//! Nodes are `Copy` and arena-allocated: child slices and boxed
//! sub-expressions live in a [`bumpalo::Bump`] for the `'ast` lifetime.
//!
//! # Example
//!
//! ```
//! use jack_syntax::ast::{BinaryOp, Expr, ExprElement, Term};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let expr = Expr::from_elements(
//!     &arena,
//!     &[
//!         ExprElement::Term(Term::IntConst(1)),
//!         ExprElement::Op(BinaryOp::Add),
//!         ExprElement::Term(Term::Var("x")),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(expr.to_string(), "1 + x");
//! ```

pub mod decl;
pub mod expr;
pub mod ops;
pub mod stmt;

// Re-export error types from core
pub use jack_core::AstError;

pub use decl::*;
pub use expr::*;
pub use ops::*;
pub use stmt::*;

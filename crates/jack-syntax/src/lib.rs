//! Jack syntax crate.
//!
//! This crate provides the lexer for Jack source code and the tree types
//! the code generator walks. It includes:
//! - Comment stripping and tokenization
//! - Keyword classification against a configurable [`KeywordSet`]
//! - Class, subroutine, statement and expression node definitions
//!
//! Turning tokens into a tree is left to whichever parser feeds the
//! generator; tests and tools build trees directly in a [`bumpalo::Bump`].
//!
//! # Example
//!
//! ```
//! use jack_syntax::{tokenize, Token};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let tokens = tokenize("let x = 2 // two", &arena);
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Keyword("let"),
//!         Token::Identifier("x"),
//!         Token::Operator("="),
//!         Token::Number("2"),
//!     ]
//! );
//! ```

// Lexer module
pub mod lexer;

// AST module
pub mod ast;

// Re-export commonly used types at crate root
pub use jack_core::KeywordSet;
pub use lexer::{Lexeme, Lexer, Token, classify, strip_comments, tokenize, tokenize_with};

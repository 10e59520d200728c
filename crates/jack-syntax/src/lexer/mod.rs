//! Lexical analysis for Jack.
//!
//! The pipeline runs in three passes: [`strip_comments`], segmentation by
//! the [`Lexer`], and [`classify`] which splits names into keywords and
//! identifiers.

mod comments;
mod cursor;
mod lexer;
mod token;

use bumpalo::Bump;
use jack_core::KeywordSet;

pub use comments::strip_comments;
pub use lexer::{Lexeme, Lexer, classify};
pub use token::Token;

/// Tokenize `source` with the Jack reserved words.
///
/// Never fails: malformed input only yields fewer tokens.
pub fn tokenize<'ast>(source: &str, arena: &'ast Bump) -> Vec<Token<'ast>> {
    tokenize_with(source, &KeywordSet::jack(), arena)
}

/// Tokenize `source`, classifying names against `keywords`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn tokenize_with<'ast>(source: &str, keywords: &KeywordSet, arena: &'ast Bump) -> Vec<Token<'ast>> {
    classify(Lexer::new(source, arena), keywords)
}

//! Token types produced by the Jack lexer.

use std::fmt;

/// A classified token.
///
/// The `'ast` lifetime refers to the arena holding the comment-free copy of
/// the source; every lexeme is a slice of that copy. Tokens carry no
/// position information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'ast> {
    /// Integer literal digits: `42`
    Number(&'ast str),
    /// String literal contents, quotes removed: `"hi"` -> `hi`
    StringConstant(&'ast str),
    /// Reserved word: `let`, `class`
    Keyword(&'ast str),
    /// Any other name: `x`, `let3`
    Identifier(&'ast str),
    /// `+ - * / = ==`
    Operator(&'ast str),
    /// `(` or `)`
    Bracket(&'ast str),
}

impl<'ast> Token<'ast> {
    /// The lexeme. String constants come back without their quotes.
    pub fn text(&self) -> &'ast str {
        match self {
            Token::Number(s)
            | Token::StringConstant(s)
            | Token::Keyword(s)
            | Token::Identifier(s)
            | Token::Operator(s)
            | Token::Bracket(s) => s,
        }
    }

    /// Whether this is a reserved word.
    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Keyword(_))
    }
}

/// Renders the token as it would appear in source.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::StringConstant(s) => write!(f, "\"{s}\""),
            other => f.write_str(other.text()),
        }
    }
}

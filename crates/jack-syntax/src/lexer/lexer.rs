//! Segmentation and keyword classification.
//!
//! The [`Lexer`] walks comment-free text left to right without backtracking
//! and yields unclassified [`Lexeme`]s. [`classify`] then turns names into
//! keywords or identifiers.
//!
//! The comment-free text is copied into the arena once, so every lexeme is a
//! slice of that copy and the original source can be dropped after lexing.

use bumpalo::Bump;
use jack_core::KeywordSet;

use super::comments::strip_comments;
use super::cursor::{Cursor, is_digit, is_name_continue, is_name_start};
use super::token::Token;

/// A lexeme before keyword classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme<'ast> {
    Number(&'ast str),
    StringConstant(&'ast str),
    /// A run of letters and digits, keyword or identifier.
    Name(&'ast str),
    Operator(&'ast str),
    Bracket(&'ast str),
}

/// Segmenter for Jack source code.
///
/// Yields lexemes in source order. Characters it does not recognise are
/// skipped, and an unterminated string loses only its opening quote.
pub struct Lexer<'ast> {
    /// Cursor over the arena copy of the comment-free source.
    cursor: Cursor<'ast>,
}

impl<'ast> Lexer<'ast> {
    /// Strip comments from `source` and prepare to segment the result.
    pub fn new(source: &str, arena: &'ast Bump) -> Self {
        let text = arena.alloc_str(&strip_comments(source));
        Self {
            cursor: Cursor::new(text),
        }
    }

    // =========================================
    // Internal: Lexeme scanning
    // =========================================

    /// Scan the next lexeme, skipping anything unrecognised.
    fn scan(&mut self) -> Option<Lexeme<'ast>> {
        loop {
            let start = self.cursor.offset();
            let ch = self.cursor.advance()?;

            let lexeme = match ch {
                '+' | '-' | '*' | '/' => Lexeme::Operator(self.cursor.slice_from(start)),
                '(' | ')' => Lexeme::Bracket(self.cursor.slice_from(start)),
                '=' => {
                    self.cursor.eat('=');
                    Lexeme::Operator(self.cursor.slice_from(start))
                }
                '"' => match self.scan_string() {
                    Some(contents) => Lexeme::StringConstant(contents),
                    None => continue,
                },
                c if is_digit(c) => {
                    self.cursor.eat_while(is_digit);
                    Lexeme::Number(self.cursor.slice_from(start))
                }
                c if is_name_start(c) => {
                    self.cursor.eat_while(is_name_continue);
                    Lexeme::Name(self.cursor.slice_from(start))
                }
                // Whitespace and everything else
                _ => continue,
            };
            return Some(lexeme);
        }
    }

    /// Scan string contents after the opening quote.
    ///
    /// Returns `None` and leaves the cursor just past the opening quote when
    /// there is no closing quote.
    fn scan_string(&mut self) -> Option<&'ast str> {
        let len = self.cursor.find('"')?;
        let start = self.cursor.offset();
        self.cursor.advance_bytes(len);
        let contents = self.cursor.slice_from(start);
        self.cursor.advance();
        Some(contents)
    }
}

impl<'ast> Iterator for Lexer<'ast> {
    type Item = Lexeme<'ast>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan()
    }
}

/// Split names into keywords and identifiers. Order-preserving and pure.
pub fn classify<'ast, I>(lexemes: I, keywords: &KeywordSet) -> Vec<Token<'ast>>
where
    I: IntoIterator<Item = Lexeme<'ast>>,
{
    lexemes
        .into_iter()
        .map(|lexeme| match lexeme {
            Lexeme::Number(s) => Token::Number(s),
            Lexeme::StringConstant(s) => Token::StringConstant(s),
            Lexeme::Name(s) if keywords.contains(s) => Token::Keyword(s),
            Lexeme::Name(s) => Token::Identifier(s),
            Lexeme::Operator(s) => Token::Operator(s),
            Lexeme::Bracket(s) => Token::Bracket(s),
        })
        .collect()
}

//! Reserved words recognised by the lexer.
//!
//! The set is plain configuration data handed to the lexer; nothing here is
//! global or mutable after construction.

use rustc_hash::FxHashSet;

/// The reserved words of the Jack language.
pub const JACK_KEYWORDS: [&str; 21] = [
    "class",
    "constructor",
    "function",
    "method",
    "field",
    "static",
    "var",
    "int",
    "char",
    "boolean",
    "void",
    "true",
    "false",
    "null",
    "this",
    "let",
    "do",
    "if",
    "else",
    "while",
    "return",
];

/// An immutable set of reserved words.
///
/// # Examples
///
/// ```
/// use jack_core::KeywordSet;
///
/// let jack = KeywordSet::jack();
/// assert!(jack.contains("let"));
/// assert!(!jack.contains("let3"));
///
/// let tiny = KeywordSet::new(["let", "class", "var"]);
/// assert!(!tiny.contains("return"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: FxHashSet<String>,
}

impl KeywordSet {
    /// Build a set from any collection of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The Jack reserved words.
    pub fn jack() -> Self {
        Self::new(JACK_KEYWORDS)
    }

    /// Whether `word` is reserved. Matching is case-sensitive.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::jack()
    }
}

/// A cursor over comment-free source text.
///
/// Provides low-level character access with peek/advance semantics.
/// Tokens carry no positions, so only the byte offset is tracked.
pub struct Cursor<'src> {
    /// The source text being scanned.
    source: &'src str,
    /// Remaining source text (slice starting at current position).
    rest: &'src str,
}

impl<'src> Cursor<'src> {
    /// Create a new cursor at the start of the source.
    pub fn new(source: &'src str) -> Self {
        Self { source, rest: source }
    }

    /// Current byte offset from start of source.
    #[inline]
    pub fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }

    /// Peek at the current character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Consume the current character and advance.
    ///
    /// Returns the consumed character, or `None` if at EOF.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.rest = &self.rest[ch.len_utf8()..];
        Some(ch)
    }

    /// Advance by n bytes.
    ///
    /// Caller must ensure `n` lands on a valid UTF-8 boundary.
    pub fn advance_bytes(&mut self, n: usize) {
        debug_assert!(self.rest.is_char_boundary(n));
        self.rest = &self.rest[n..];
    }

    /// Consume if the current character matches.
    #[inline]
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume characters while the predicate matches.
    ///
    /// Returns the consumed slice.
    pub fn eat_while(&mut self, f: impl Fn(char) -> bool) -> &'src str {
        let start = self.offset();
        while self.peek().is_some_and(&f) {
            self.advance();
        }
        &self.source[start..self.offset()]
    }

    /// Byte distance from the current position to the next `ch`, if any.
    #[inline]
    pub fn find(&self, ch: char) -> Option<usize> {
        self.rest.find(ch)
    }

    /// Get a slice of source from a starting offset to current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.offset()]
    }
}

/// Check if a character is a digit.
///
/// ASCII only: other Unicode decimal digits are neither numbers nor part
/// of a name, and get skipped like any unrecognised character.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check if a character can start a name.
#[inline]
pub fn is_name_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Check if a character can continue a name.
#[inline]
pub fn is_name_continue(c: char) -> bool {
    c.is_alphabetic() || is_digit(c)
}

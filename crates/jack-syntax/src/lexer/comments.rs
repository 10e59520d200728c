//! Comment removal, the first pass of the lexer.

/// Which kind of text the scanner is inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    /// After `//`, until the next newline.
    LineComment,
    /// After `/*`, until the next `*/`.
    BlockComment,
}

/// Remove `//` and `/* */` comments from `source`.
///
/// The newline ending a line comment is kept. An unterminated block
/// comment swallows the rest of the input. Applying this to its own
/// output changes nothing.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut mode = Mode::Code;
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        match mode {
            Mode::Code => match (ch, chars.peek().copied()) {
                ('/', Some('/')) => {
                    chars.next();
                    mode = Mode::LineComment;
                }
                ('/', Some('*')) => {
                    chars.next();
                    mode = Mode::BlockComment;
                }
                _ => out.push(ch),
            },
            Mode::LineComment => {
                if ch == '\n' {
                    out.push(ch);
                    mode = Mode::Code;
                }
            }
            Mode::BlockComment => {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    mode = Mode::Code;
                }
            }
        }
    }

    out
}

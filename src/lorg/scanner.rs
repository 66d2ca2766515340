//! Positioned character stream over the source text
//!
//! [`Scanner`] hands out the document one character at a time while
//! keeping line/column coordinates synchronized with the character just
//! consumed, so the parser never reasons about raw offsets. A single
//! character of lookahead is available through [`Scanner::peek`], with
//! its own coordinates.
//!
//! Coordinates are 1-based. A newline is reported at column 0 of the
//! line it opens, which makes the first character of every line land at
//! column 1 and gives the parser a cheap "at line start" test
//! (`column() == 0` also covers the initial state).
//!
//! The scanner can be configured with a set of characters to skip
//! transparently (for example `\r`): they never show up in consumed or
//! peeked output, but columns still advance past them so reported
//! positions match the raw file. The default set is empty.

/// Character stream with synchronized line/column tracking.
pub struct Scanner {
    chars: Vec<char>,
    index: usize,
    /// Position of the last character returned by `advance`.
    line: usize,
    column: usize,
    /// Position of the character `peek` currently looks at.
    peek_line: usize,
    peek_column: usize,
    ignored: Vec<char>,
}

impl Scanner {
    /// Create a scanner that skips nothing.
    pub fn new(source: &str) -> Self {
        Self::with_ignored(source, &[])
    }

    /// Create a scanner that transparently skips every character in
    /// `ignored`.
    pub fn with_ignored(source: &str, ignored: &[char]) -> Self {
        let mut scanner = Scanner {
            chars: source.chars().collect(),
            index: 0,
            line: 0,
            column: 0,
            peek_line: 1,
            peek_column: 1,
            ignored: ignored.to_vec(),
        };
        if scanner.chars.is_empty() {
            scanner.peek_line = 0;
            scanner.peek_column = 0;
            return scanner;
        }
        scanner.skip_ignored();
        scanner.adjust_peek_for_newline();
        scanner
    }

    /// True once every character has been consumed.
    pub fn eof(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Line of the last consumed character.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column of the last consumed character. 0 right after a newline
    /// (and before the first consumption).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Line of the character `peek` returns.
    pub fn peek_line(&self) -> usize {
        self.peek_line
    }

    /// Column of the character `peek` returns.
    pub fn peek_column(&self) -> usize {
        self.peek_column
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// Consume and return the next character, updating the consumed
    /// position to its coordinates. Returns `None` at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.line = self.peek_line;
        self.column = self.peek_column;

        self.index += 1;
        self.peek_column += 1;
        self.skip_ignored();
        self.adjust_peek_for_newline();
        Some(c)
    }

    fn skip_ignored(&mut self) {
        while self
            .chars
            .get(self.index)
            .is_some_and(|c| self.ignored.contains(c))
        {
            self.index += 1;
            self.peek_column += 1;
        }
    }

    // The newline itself belongs to the line it opens, at column 0.
    fn adjust_peek_for_newline(&mut self) {
        if self.chars.get(self.index) == Some(&'\n') {
            self.peek_line += 1;
            self.peek_column = 0;
        }
    }
}

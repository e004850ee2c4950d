//! Character cursor for traversing source text.
//!
//! The [`Cursor`] owns the read position of a scan. It steps over whole UTF-8
//! characters, so slices taken between two positions are always valid `&str`,
//! and it keeps the line and column of the next unread character.

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use usec_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x:=1");
/// assert_eq!(cursor.advance(), 'x');
/// assert!(cursor.match_char(':'));
/// assert_eq!(cursor.current_char(), '=');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the next unread character.
    position: usize,

    /// Line of the next unread character (1-based).
    line: u32,

    /// Column of the next unread character (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`, line 1, column 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next unread character without consuming it.
    ///
    /// Returns '\0' at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters past the next unread one.
    ///
    /// Returns '\0' past the end of the source.
    ///
    /// ```
    /// use usec_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(1), 'b');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let bytes = self.source.as_bytes();

        // Fast path while everything up to the target is ASCII
        let pos = self.position + offset;
        if pos < bytes.len() && bytes[self.position..=pos].is_ascii() {
            return bytes[pos] as char;
        }

        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Consumes the next character and returns it.
    ///
    /// Updates line and column tracking. Returns '\0' and does nothing at the
    /// end of the source.
    #[inline]
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return '\0';
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Advances over up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the next character only if it equals `expected`.
    ///
    /// ```
    /// use usec_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=");
    /// assert!(cursor.match_char('<'));
    /// assert!(!cursor.match_char('>'));
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds for the next one.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Line of the next unread character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the next unread character (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Source text from byte offset `start` up to the current position.
    ///
    /// ```
    /// use usec_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("self.age");
    /// cursor.advance_n(4);
    /// assert_eq!(cursor.slice_from(0), "self");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Source text not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Saves the current position so it can be restored later.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Rewinds to a previously saved position.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

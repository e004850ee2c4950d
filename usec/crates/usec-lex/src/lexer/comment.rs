//! Comment lexing.
//!
//! This module handles skipping `-- line` and `/* block */` comments.

use crate::error::LexError;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a block comment. The opening `/*` has been consumed.
    ///
    /// Block comments do not nest. The closing `*/` is consumed too; input
    /// that ends first is reported as an unterminated comment.
    pub(crate) fn skip_block_comment(&mut self) {
        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                return;
            }
            self.cursor.advance();
        }

        self.report(LexError::UnterminatedComment);
    }

    /// Skips the rest of a line comment, leaving the newline unread.
    pub(crate) fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}

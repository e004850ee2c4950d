//! String literal lexing.

use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string. The opening quote has been consumed.
    ///
    /// A backslash keeps the following character from closing the string but
    /// is not decoded: the literal value is the raw text between the quotes.
    /// Strings may span lines. Input that ends before the closing quote is
    /// reported and produces no token.
    pub(crate) fn lex_string(&mut self) -> Option<Token> {
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                self.report(LexError::UnterminatedString);
                return None;
            }
            match self.cursor.advance() {
                '"' => break,
                '\\' => {
                    self.cursor.advance();
                }
                _ => {}
            }
        }

        let with_quote = self.cursor.slice_from(content_start);
        let value = &with_quote[..with_quote.len() - 1];
        Some(self.make_literal_token(
            TokenKind::String,
            Some(Literal::String(value.to_string())),
        ))
    }
}

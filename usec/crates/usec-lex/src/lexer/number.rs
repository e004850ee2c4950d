//! Number literal lexing.

use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal. The first digit has been consumed.
    ///
    /// Grammar: `digit+ ('.' digit+)?`. A dot not followed by a digit is left
    /// for the next token, so `3..5` reads as `3`, `..`, `5`. There is no sign,
    /// exponent or radix prefix; every number is an `f64`.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        let text = self.cursor.slice_from(self.token_start);
        // Digit runs always parse; values past f64::MAX saturate.
        let value = text.parse::<f64>().unwrap_or(f64::INFINITY);
        self.make_literal_token(TokenKind::Number, Some(Literal::Number(value)))
    }
}

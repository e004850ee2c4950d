//! Operator and punctuation lexing.
//!
//! This module handles the characters that may start a two-character
//! operator or a comment. Single-character punctuation is dispatched
//! directly from the core scan loop.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes slash or skips a block comment.
    ///
    /// Handles: `/`, `/* */`
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        if self.cursor.match_char('*') {
            self.skip_block_comment();
            None
        } else {
            Some(self.make_token(TokenKind::Slash))
        }
    }

    /// Lexes minus or arrow, or skips a line comment.
    ///
    /// Handles: `-`, `->`, `--`
    pub(crate) fn lex_minus(&mut self) -> Option<Token> {
        if self.cursor.current_char() == '-' {
            self.skip_line_comment();
            None
        } else if self.cursor.match_char('>') {
            Some(self.make_token(TokenKind::Arrow))
        } else {
            Some(self.make_token(TokenKind::Minus))
        }
    }

    /// Handles: `<`, `<=`, `<>`
    pub(crate) fn lex_less(&mut self) -> Token {
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::LessEqual)
        } else if self.cursor.match_char('>') {
            self.make_token(TokenKind::LessGreater)
        } else {
            self.make_token(TokenKind::Less)
        }
    }

    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::GreaterEqual)
        } else {
            self.make_token(TokenKind::Greater)
        }
    }

    /// Handles: `:`, `::`, `:=`
    pub(crate) fn lex_colon(&mut self) -> Token {
        if self.cursor.match_char(':') {
            self.make_token(TokenKind::ColonColon)
        } else if self.cursor.match_char('=') {
            self.make_token(TokenKind::ColonEqual)
        } else {
            self.make_token(TokenKind::Colon)
        }
    }

    /// Handles: `.`, `..`
    pub(crate) fn lex_dot(&mut self) -> Token {
        if self.cursor.match_char('.') {
            self.make_token(TokenKind::DotDot)
        } else {
            self.make_token(TokenKind::Dot)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};
    use usec_util::Handler;

    fn lex(source: &str) -> Vec<(TokenKind, String)> {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler)
            .map(|t| (t.kind, t.lexeme))
            .collect();
        assert!(!handler.has_errors(), "unexpected diagnostics for {:?}", source);
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|(kind, _)| kind).collect()
    }

    #[test]
    fn test_two_character_operators() {
        assert_eq!(
            kinds("<= <> >= :: := .. ->"),
            vec![
                TokenKind::LessEqual,
                TokenKind::LessGreater,
                TokenKind::GreaterEqual,
                TokenKind::ColonColon,
                TokenKind::ColonEqual,
                TokenKind::DotDot,
                TokenKind::Arrow,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_single_character_fallbacks() {
        assert_eq!(
            kinds("< > : . - /"),
            vec![
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Colon,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Slash,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operator_lexemes() {
        let tokens = lex("x:=1");
        assert_eq!(tokens[1], (TokenKind::ColonEqual, ":=".to_string()));

        let tokens = lex("a<>b");
        assert_eq!(tokens[1], (TokenKind::LessGreater, "<>".to_string()));
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(kinds(":::"), vec![TokenKind::ColonColon, TokenKind::Colon, TokenKind::Eof]);
        assert_eq!(kinds("..."), vec![TokenKind::DotDot, TokenKind::Dot, TokenKind::Eof]);
        assert_eq!(kinds("<=>"), vec![TokenKind::LessEqual, TokenKind::Greater, TokenKind::Eof]);
        assert_eq!(kinds("->>"), vec![TokenKind::Arrow, TokenKind::Greater, TokenKind::Eof]);
    }

    #[test]
    fn test_operator_at_end_of_input() {
        assert_eq!(kinds("<"), vec![TokenKind::Less, TokenKind::Eof]);
        assert_eq!(kinds(":"), vec![TokenKind::Colon, TokenKind::Eof]);
        assert_eq!(kinds("-"), vec![TokenKind::Minus, TokenKind::Eof]);
    }

    #[test]
    fn test_spaced_operators_split() {
        assert_eq!(kinds("< ="), vec![TokenKind::Less, TokenKind::Equal, TokenKind::Eof]);
        assert_eq!(kinds("- >"), vec![TokenKind::Minus, TokenKind::Greater, TokenKind::Eof]);
    }

    #[test]
    fn test_navigation_chain() {
        assert_eq!(
            kinds("self.age->size"),
            vec![
                TokenKind::Self_,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Arrow,
                TokenKind::Size,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_iterator_pipe() {
        assert_eq!(
            kinds("c->select(e | e.x)"),
            vec![
                TokenKind::Identifier,
                TokenKind::Arrow,
                TokenKind::Select,
                TokenKind::LeftParen,
                TokenKind::Identifier,
                TokenKind::Pipe,
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::RightParen,
                TokenKind::Eof,
            ]
        );
    }
}

//! Identifier and keyword lexing.
//!
//! Identifiers are ASCII only. The `@` prefix is lexed here as well, since
//! its only valid use is the `@pre` keyword.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Returns true for characters that can start an identifier.
#[inline]
pub(crate) fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true for characters that can continue an identifier.
#[inline]
pub(crate) fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or reserved word. The first character has been consumed.
    ///
    /// The whole maximal run is looked up, so `contextual` stays a single
    /// identifier rather than `context` followed by `ual`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_alpha_numeric);

        let text = self.cursor.slice_from(self.token_start);
        let kind = self.keywords.get(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }

    /// Lexes an `@`-prefixed keyword. The `@` has been consumed.
    ///
    /// If `@` plus the identifier after it is not reserved, only the `@` is
    /// reported and skipped; the identifier is scanned again as its own token.
    pub(crate) fn lex_at(&mut self) -> Option<Token> {
        let after_at = self.cursor.snapshot();
        self.cursor.eat_while(is_alpha_numeric);

        let text = self.cursor.slice_from(self.token_start);
        if let Some(kind) = self.keywords.get(text) {
            return Some(self.make_token(kind));
        }

        self.cursor.restore(after_at);
        self.report(LexError::UnexpectedCharacter('@'));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeywordTable;
    use usec_util::Handler;

    fn lex(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).scan_tokens();
        (tokens, handler)
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).0.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_identifier_chars() {
        assert!(is_alpha('a'));
        assert!(is_alpha('Z'));
        assert!(is_alpha('_'));
        assert!(!is_alpha('1'));
        assert!(!is_alpha('é'));
        assert!(is_alpha_numeric('9'));
        assert!(!is_alpha_numeric('-'));
    }

    #[test]
    fn test_plain_identifiers() {
        let (tokens, handler) = lex("Person _tmp x1 snake_case");
        for token in &tokens[..4] {
            assert_eq!(token.kind, TokenKind::Identifier);
        }
        assert_eq!(tokens[3].lexeme, "snake_case");
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_keyword_prefix_stays_identifier() {
        let (tokens, _) = lex("contextual");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "contextual");
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(
            kinds("class Class CLASS"),
            vec![
                TokenKind::Class,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_value_keywords() {
        assert_eq!(
            kinds("true false null self result"),
            vec![
                TokenKind::True,
                TokenKind::False,
                TokenKind::Null,
                TokenKind::Self_,
                TokenKind::Result,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_every_plain_keyword_round_trips() {
        for &(text, kind, _) in crate::keywords::KEYWORDS {
            if text.starts_with('@') {
                continue;
            }
            let (tokens, handler) = lex(text);
            assert_eq!(tokens[0].kind, kind, "keyword {:?}", text);
            assert_eq!(tokens[0].lexeme, text);
            assert!(!handler.has_errors());
        }
    }

    #[test]
    fn test_at_pre() {
        let (tokens, handler) = lex("self.age@pre");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Self_,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::AtPre,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[3].lexeme, "@pre");
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_at_unknown_word() {
        let (tokens, handler) = lex("@post");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "post");
        assert_eq!(tokens[0].span.start, 1);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "unexpected character '@'");
    }

    #[test]
    fn test_at_prefix_of_longer_word() {
        let (tokens, handler) = lex("@prefix");
        assert_eq!(tokens[0].lexeme, "prefix");
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_lone_at() {
        let (tokens, handler) = lex("@ 1");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_at_pre_needs_keyword_table_entry() {
        let table = KeywordTable::new();
        assert!(table.contains("@pre"));
        let handler = Handler::new();
        let tokens = Lexer::with_keywords("x@pre", &table, &handler).scan_tokens();
        assert_eq!(tokens[1].kind, TokenKind::AtPre);
    }
}

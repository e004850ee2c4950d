//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the outer scan loop and the
//! per-character dispatch.

use usec_util::{DiagnosticBuilder, DiagnosticSink, Span};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::keywords::KeywordTable;
use crate::token::{Literal, Token, TokenKind};

/// Lexer for USE model, OCL and SOIL source text.
///
/// A lexer holds the state of exactly one scan. It is consumed by
/// [`Lexer::scan_tokens`], or can be driven as an iterator; either way it
/// yields every token in source order and finishes with a single
/// [`TokenKind::Eof`] token.
///
/// Malformed input never stops the scan. Each problem is sent to the
/// diagnostic sink and scanning resumes at the next character.
///
/// # Example
///
/// ```
/// use usec_lex::{Lexer, TokenKind};
/// use usec_util::Handler;
///
/// let handler = Handler::new();
/// let kinds: Vec<TokenKind> = Lexer::new("self.age->size", &handler)
///     .map(|token| token.kind)
///     .collect();
///
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Self_,
///         TokenKind::Dot,
///         TokenKind::Identifier,
///         TokenKind::Arrow,
///         TokenKind::Size,
///         TokenKind::Eof,
///     ]
/// );
/// assert!(!handler.has_errors());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Reserved word lookup.
    pub(crate) keywords: &'a KeywordTable,

    /// Receiver for lexical errors.
    sink: &'a dyn DiagnosticSink,

    /// Scan settings.
    config: LexerConfig,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Whether the byte-order mark has been checked.
    bom_checked: bool,

    /// Diagnostics sent to the sink so far.
    diagnostics_emitted: usize,

    /// Tokens produced so far, EOF included.
    tokens_emitted: usize,

    /// Whether the EOF token has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer using the shared keyword table and default settings.
    pub fn new(source: &'a str, sink: &'a dyn DiagnosticSink) -> Self {
        Self::with_config(source, KeywordTable::global(), sink, LexerConfig::default())
    }

    /// Creates a lexer that resolves reserved words through `keywords`.
    pub fn with_keywords(
        source: &'a str,
        keywords: &'a KeywordTable,
        sink: &'a dyn DiagnosticSink,
    ) -> Self {
        Self::with_config(source, keywords, sink, LexerConfig::default())
    }

    /// Creates a lexer with explicit keywords and settings.
    pub fn with_config(
        source: &'a str,
        keywords: &'a KeywordTable,
        sink: &'a dyn DiagnosticSink,
        config: LexerConfig,
    ) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords,
            sink,
            config,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            bom_checked: false,
            diagnostics_emitted: 0,
            tokens_emitted: 0,
            finished: false,
        }
    }

    /// Scans the whole source and returns every token, EOF last.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    /// Returns the next token, or `None` once EOF has been returned.
    ///
    /// Whitespace and comments are skipped, and characters that start no
    /// token are reported and skipped, so one call may consume any amount
    /// of input before it produces a token.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        self.skip_bom();

        while !self.cursor.is_at_end() {
            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            if let Some(token) = self.scan_token() {
                self.tokens_emitted += 1;
                return Some(token);
            }
        }

        self.finished = true;
        self.tokens_emitted += 1;
        log::debug!(
            "scanned {} bytes into {} tokens with {} diagnostics",
            self.cursor.source().len(),
            self.tokens_emitted,
            self.diagnostics_emitted
        );
        Some(Token::eof(
            self.cursor.position(),
            self.cursor.line(),
            self.cursor.column(),
        ))
    }

    /// Consumes one lexeme starting at `token_start`.
    ///
    /// Returns `None` when the lexeme produces no token: whitespace,
    /// comments and malformed input.
    fn scan_token(&mut self) -> Option<Token> {
        match self.cursor.advance() {
            '(' => Some(self.make_token(TokenKind::LeftParen)),
            ')' => Some(self.make_token(TokenKind::RightParen)),
            '{' => Some(self.make_token(TokenKind::LeftBrace)),
            '}' => Some(self.make_token(TokenKind::RightBrace)),
            '[' => Some(self.make_token(TokenKind::LeftBracket)),
            ']' => Some(self.make_token(TokenKind::RightBracket)),
            '=' => Some(self.make_token(TokenKind::Equal)),
            ',' => Some(self.make_token(TokenKind::Comma)),
            '+' => Some(self.make_token(TokenKind::Plus)),
            '*' => Some(self.make_token(TokenKind::Star)),
            ';' => Some(self.make_token(TokenKind::Semicolon)),
            '|' => Some(self.make_token(TokenKind::Pipe)),

            '/' => self.lex_slash(),
            '-' => self.lex_minus(),
            '<' => Some(self.lex_less()),
            '>' => Some(self.lex_greater()),
            ':' => Some(self.lex_colon()),
            '.' => Some(self.lex_dot()),

            ' ' | '\r' | '\t' | '\n' => None,

            '"' => self.lex_string(),
            '@' => self.lex_at(),

            c if c.is_ascii_digit() => Some(self.lex_number()),
            c if super::identifier::is_alpha(c) => Some(self.lex_identifier()),

            c => {
                self.report(LexError::UnexpectedCharacter(c));
                None
            }
        }
    }

    /// Skips a leading byte-order mark once, if configured to.
    fn skip_bom(&mut self) {
        if self.bom_checked {
            return;
        }
        self.bom_checked = true;
        if self.config.strip_bom
            && self.cursor.position() == 0
            && self.cursor.current_char() == '\u{FEFF}'
        {
            self.cursor.advance();
        }
    }

    /// Builds a token without a literal from the current lexeme.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        self.make_literal_token(kind, None)
    }

    /// Builds a token from the current lexeme.
    pub(crate) fn make_literal_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(kind, self.cursor.slice_from(self.token_start), literal, span)
    }

    /// Reports a lexical error on the current line and carries on.
    pub(crate) fn report(&mut self, error: LexError) {
        if !self.config.allows_diagnostic(self.diagnostics_emitted) {
            log::debug!("suppressing diagnostic past limit: {}", error);
            return;
        }
        self.diagnostics_emitted += 1;

        let line = self.cursor.line();
        let column = if line == self.token_start_line {
            self.token_start_column
        } else {
            self.cursor.column()
        };
        let span = Span::new(self.token_start, self.cursor.position(), line, column);

        log::trace!("lexical error at {}: {}", span, error);
        DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .span(span)
            .emit(self.sink);
    }

    /// Returns the line of the next unread character (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the column of the next unread character (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the number of diagnostics sent to the sink so far.
    pub fn diagnostics_emitted(&self) -> usize {
        self.diagnostics_emitted
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

//! usec-lex - Lexical Analyzer for USE Models, OCL and SOIL
//!
//! This crate turns the source text of a USE specification into a flat list
//! of tokens for the parser. One token vocabulary covers all three
//! sublanguages: class models with associations and state machines, OCL
//! constraints, and SOIL statements.
//!
//! # Example Usage
//!
//! ```
//! use usec_lex::{scan, Literal, TokenKind};
//! use usec_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = scan("context Person inv: self.age >= 18", &handler);
//!
//! assert_eq!(tokens[0].kind, TokenKind::Context);
//! assert_eq!(tokens[8].literal, Some(Literal::Number(18.0)));
//! assert!(tokens.last().unwrap().is_eof());
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literals and the token record
//! - [`keywords`] - The reserved word table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`config`] - Scan settings
//! - [`error`] - Lexical and configuration errors
//!
//! # Lexical Rules
//!
//! ## Whitespace and Comments
//!
//! Space, tab, carriage return and newline separate tokens. `-- text` runs to
//! the end of the line; `/* text */` may span lines and does not nest.
//!
//! ## Identifiers and Keywords
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`. A run that exactly matches a reserved
//! word (case-sensitive) becomes that keyword. `@pre` is the one keyword that
//! is not identifier-shaped.
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14` (always `f64`; no sign, exponent or radix)
//! - **String**: `"text"`, possibly spanning lines; `\"` does not end it
//!
//! ## Operators and Punctuation
//!
//! - **Single**: `( ) { } [ ] , . - + / * ; : = < > |`
//! - **Double**: `..` `->` `::` `:=` `<=` `<>` `>=`
//!
//! # Errors
//!
//! Scanning never fails. Unexpected characters, unterminated strings and
//! unterminated block comments are sent to a [`DiagnosticSink`] and the scan
//! continues.

#![warn(missing_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod token;

pub use config::LexerConfig;
pub use error::{ConfigError, ConfigResult, LexError};
pub use keywords::{KeywordClass, KeywordTable};
pub use lexer::Lexer;
pub use token::{Literal, Token, TokenKind};

use usec_util::DiagnosticSink;

/// Scans `source` with the shared keyword table and default settings.
///
/// The returned tokens are in source order and end with exactly one
/// [`TokenKind::Eof`]. Lexical errors go to `sink`.
pub fn scan(source: &str, sink: &dyn DiagnosticSink) -> Vec<Token> {
    Lexer::new(source, sink).scan_tokens()
}

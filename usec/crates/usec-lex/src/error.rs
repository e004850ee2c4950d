//! Error types for usec-lex.
//!
//! Lexical problems are never returned to the caller of a scan. They are
//! described by [`LexError`], turned into diagnostics and pushed into the
//! sink while scanning carries on. [`ConfigError`] is the only error a public
//! function actually returns.

use thiserror::Error;
use usec_util::diagnostic::{
    DiagnosticCode, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_COMMENT,
    E_LEXER_UNTERMINATED_STRING,
};

/// Malformed input found while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// Input ended inside a string literal
    #[error("unterminated string")]
    UnterminatedString,

    /// Input ended inside a `/* ... */` comment
    #[error("unterminated comment")]
    UnterminatedComment,
}

impl LexError {
    /// Diagnostic code reported alongside this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter(_) => E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString => E_LEXER_UNTERMINATED_STRING,
            LexError::UnterminatedComment => E_LEXER_UNTERMINATED_COMMENT,
        }
    }
}

/// Error type for lexer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid TOML for [`crate::LexerConfig`]
    #[error("Invalid lexer configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LexError::UnexpectedCharacter('#').to_string(),
            "unexpected character '#'"
        );
        assert_eq!(LexError::UnterminatedString.to_string(), "unterminated string");
        assert_eq!(LexError::UnterminatedComment.to_string(), "unterminated comment");
    }

    #[test]
    fn test_codes() {
        assert_eq!(LexError::UnexpectedCharacter('?').code(), DiagnosticCode::L0001);
        assert_eq!(LexError::UnterminatedString.code(), DiagnosticCode::L0002);
        assert_eq!(LexError::UnterminatedComment.code(), DiagnosticCode::L0003);
    }
}

//! Diagnostic codes for categorizing scanner and checker messages.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so tools can filter or document specific failures.
//!
//! # Examples
//!
//! ```
//! use usec_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::L0001;
//! assert_eq!(code.prefix(), "L");
//! assert_eq!(code.number(), 1);
//! assert_eq!(code.as_str(), "L0001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` names the phase ("L" for lexical errors)
/// - `number` is rendered as a 4-digit number (padded with zeros)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "L" for lexical)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// ```
    /// use usec_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("L", 42);
    /// assert_eq!(code.as_str(), "L0042");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "L0001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL ERROR CODES (L0001-L0999)
    // =========================================================================

    /// L0001: A character that starts no token
    pub const L0001: Self = Self::new("L", 1);
    /// L0002: End of input inside a string literal
    pub const L0002: Self = Self::new("L", 2);
    /// L0003: End of input inside a block comment
    pub const L0003: Self = Self::new("L", 3);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

/// Unexpected character in source
pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::L0001;
/// String literal missing its closing quote
pub const E_LEXER_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::L0002;
/// Block comment missing its closing `*/`
pub const E_LEXER_UNTERMINATED_COMMENT: DiagnosticCode = DiagnosticCode::L0003;

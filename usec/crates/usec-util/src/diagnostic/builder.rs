//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics step by step and handing them to a [`DiagnosticSink`].

use super::{Diagnostic, DiagnosticCode, DiagnosticSink, Level};
use crate::Span;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use usec_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use usec_util::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unexpected character '#'")
///     .code(DiagnosticCode::L0001)
///     .span(Span::new(4, 5, 1, 5))
///     .help("remove the character")
///     .build();
///
/// assert_eq!(diag.line(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    ///
    /// # Arguments
    ///
    /// * `level` - The diagnostic level (error, warning, etc.)
    /// * `message` - The main diagnostic message
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    ///
    /// Notes provide additional context about the diagnostic.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given sink
    ///
    /// ```
    /// use usec_util::diagnostic::{DiagnosticBuilder, Handler};
    /// use usec_util::Span;
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("unterminated string")
    ///     .span(Span::point(3, 1))
    ///     .emit(&handler);
    ///
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, sink: &dyn DiagnosticSink) {
        sink.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Handler;

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::error("oops").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.span, Span::DUMMY);
        assert!(diag.code.is_none());
        assert!(diag.notes.is_empty());
        assert!(diag.helps.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let diag = DiagnosticBuilder::warning("suspicious")
            .code(DiagnosticCode::new("L", 900))
            .span(Span::new(1, 2, 3, 4))
            .note("first")
            .note("second")
            .help("do something else")
            .build();

        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.code, Some(DiagnosticCode::new("L", 900)));
        assert_eq!(diag.span.line, 3);
        assert_eq!(diag.notes, vec!["first", "second"]);
        assert_eq!(diag.helps, vec!["do something else"]);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("bad")
            .code(DiagnosticCode::L0001)
            .emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::L0001));
    }
}

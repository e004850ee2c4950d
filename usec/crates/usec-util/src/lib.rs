//! usec-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the USE model tooling: source [`Span`]s and the
//! diagnostics infrastructure every phase reports through.
//!
//! # Modules
//!
//! - [`span`] - Byte ranges with line/column information
//! - [`diagnostic`] - Diagnostics, codes, the [`DiagnosticSink`] seam and the
//!   collecting [`Handler`]
//!
//! # Example
//!
//! ```
//! use usec_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated comment")
//!     .code(DiagnosticCode::L0003)
//!     .span(Span::point(12, 1))
//!     .emit(&handler);
//!
//! assert_eq!(handler.diagnostics()[0].line(), 12);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, DiagnosticSink, Handler, Level};
pub use span::Span;

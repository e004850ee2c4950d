//! Span module - Source location tracking.
//!
//! A [`Span`] records where a lexeme or diagnostic lives in a model script:
//! a half-open byte range plus the human-readable line and column of its
//! first character.
//!
//! # Examples
//!
//! ```
//! use usec_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 11);
//! assert_eq!(span.len(), 10);
//!
//! let point = Span::point(3, 1);
//! assert!(point.is_empty());
//! ```

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (`start` inclusive, `end` exclusive)
/// - Line and column numbers of `start` (for human-readable output)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

static_assertions::assert_impl_all!(Span: Copy, Send, Sync);

impl Span {
    /// Dummy span for tests and synthesized diagnostics.
    ///
    /// ```
    /// use usec_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span at a single point with no byte extent.
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns a span covering both `self` and `other`.
    ///
    /// Line and column are taken from whichever span starts first.
    ///
    /// ```
    /// use usec_util::span::Span;
    ///
    /// let a = Span::new(4, 8, 1, 5);
    /// let b = Span::new(12, 15, 2, 3);
    /// let joined = a.to(b);
    /// assert_eq!((joined.start, joined.end), (4, 15));
    /// assert_eq!(joined.line, 1);
    /// ```
    pub fn to(self, other: Span) -> Span {
        let first = if self.start <= other.start { self } else { other };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// Returns true if the byte offset falls inside the span.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_point() {
        let span = Span::point(4, 2);
        assert!(span.is_empty());
        assert_eq!(span.line, 4);
    }

    #[test]
    fn test_span_to_is_order_independent() {
        let a = Span::new(0, 3, 1, 1);
        let b = Span::new(7, 9, 2, 2);
        assert_eq!(a.to(b), b.to(a));
        assert_eq!(a.to(b).column, 1);
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(2, 5, 1, 3);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 1, 12, 7).to_string(), "12:7");
    }
}

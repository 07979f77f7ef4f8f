//! # Source Span
//!
//! Byte/line/column positions used to locate parse errors in the input text.
//!
//! ## Example
//!
//! ```rust
//! use rod_dict::{Position, Span};
//!
//! let span = Span::new(Position::new(0, 0, 0), Position::new(4, 0, 4));
//! assert_eq!(span.len(), 4);
//! ```

// =============================================================================
// POSITION
// =============================================================================

/// A point in the source text.
///
/// `line` and `column` are 0-indexed; `Display` renders them 1-indexed the
/// way editors show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub byte: usize,
    /// Line (0-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line + 1, self.column + 1)
    }
}

// =============================================================================
// SPAN
// =============================================================================

/// A half-open range `[start, end)` of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Span {
    /// Create a new span.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span on a single line from byte offsets.
    ///
    /// Line and column are derived assuming the text before `start` has no
    /// newlines; intended for tests and single-line snippets.
    pub const fn from_bytes(start: usize, end: usize) -> Self {
        Self {
            start: Position::new(start, 0, start),
            end: Position::new(end, 0, end),
        }
    }

    /// Empty span at the start of the source.
    pub const fn zero() -> Self {
        Self::from_bytes(0, 0)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    /// Returns true if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both spans.
    pub fn merge(&self, other: &Span) -> Span {
        let start = if self.start.byte <= other.start.byte { self.start } else { other.start };
        let end = if self.end.byte >= other.end.byte { self.end } else { other.end };
        Span::new(start, end)
    }
}

/// Anything that knows where it came from in the source.
pub trait Spanned {
    /// Source span of this item.
    fn span(&self) -> Span;
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::from_bytes(3, 10);
        assert_eq!(span.len(), 7);
        assert!(!span.is_empty());
        assert!(Span::zero().is_empty());
    }

    #[test]
    fn test_span_merge() {
        let merged = Span::from_bytes(5, 8).merge(&Span::from_bytes(1, 6));
        assert_eq!(merged.start.byte, 1);
        assert_eq!(merged.end.byte, 8);
    }

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(12, 2, 4).to_string(), "line 3, column 5");
    }
}

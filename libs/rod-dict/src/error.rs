//! # Parse Errors
//!
//! Error types for the rod description parser.
//!
//! ## Example
//!
//! ```rust
//! use rod_dict::error::ParseError;
//!
//! let error = ParseError::unexpected_token(")", "value");
//! println!("{}", error);
//! ```

use crate::span::Span;
use std::fmt;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create unexpected token error.
    ///
    /// ## Parameters
    ///
    /// - `found`: Token that was found
    /// - `expected`: Description of expected token
    pub fn unexpected_token(found: &str, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.to_string(),
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    /// Create unexpected EOF error.
    pub fn unexpected_eof(expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    /// Create error with span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span.start)
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Found unexpected token.
    UnexpectedToken {
        /// Token that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// Unexpected end of input.
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },

    /// Character that cannot start any token.
    UnexpectedCharacter {
        /// The offending text.
        text: String,
    },

    /// Invalid or out-of-range number literal.
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Unterminated string literal.
    UnterminatedString,

    /// Name that is not a literal (`True`, `False`, `None`).
    UnknownName {
        /// The name.
        name: String,
    },

    /// Dictionary key that is not a string.
    NonStringKey {
        /// Kind of value used as key.
        found: String,
    },

    /// Lists/dicts nested deeper than the configured limit.
    TooDeep {
        /// The limit that was exceeded.
        limit: usize,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { found, expected } => {
                write!(f, "unexpected token '{}', expected {}", found, expected)
            }
            Self::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, expected {}", expected)
            }
            Self::UnexpectedCharacter { text } => {
                write!(f, "unexpected character '{}'", text)
            }
            Self::InvalidNumber { text } => {
                write!(f, "invalid number '{}'", text)
            }
            Self::UnterminatedString => {
                write!(f, "unterminated string literal")
            }
            Self::UnknownName { name } => {
                write!(f, "unknown name '{}', only literals are allowed", name)
            }
            Self::NonStringKey { found } => {
                write!(f, "dictionary keys must be strings, found {}", found)
            }
            Self::TooDeep { limit } => {
                write!(f, "nesting deeper than {} levels", limit)
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_unexpected_token_display() {
        let error = ParseError::unexpected_token(")", "value");
        let msg = format!("{}", error);
        assert!(msg.contains("unexpected token ')'"));
        assert!(msg.contains("value"));
    }

    #[test]
    fn test_unexpected_eof_display() {
        let error = ParseError::unexpected_eof("'}'");
        assert!(error.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn test_error_with_span() {
        let start = Position::new(20, 3, 7);
        let error = ParseError::unexpected_token("x", "y")
            .with_span(Span::new(start, Position::new(21, 3, 8)));
        assert_eq!(error.span.start.byte, 20);
        assert!(error.to_string().ends_with("at line 4, column 8"));
    }
}

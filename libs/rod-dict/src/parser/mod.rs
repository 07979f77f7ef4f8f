//! # Rod Description Parser
//!
//! Recursive descent parser for the Python literal subset.
//! Produces a [`Value`] tree.
//!
//! ## Example
//!
//! ```rust
//! use rod_dict::lexer::Lexer;
//! use rod_dict::parser::Parser;
//!
//! let source = "{'wedgeAngle': 5}";
//! let tokens = Lexer::new(source).tokenize();
//! let value = Parser::new(tokens).parse().unwrap();
//! assert!(value.as_dict().is_some());
//! ```

mod collections;
mod primaries;

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::span::Span;
use crate::value::Value;
use config::constants::MAX_NESTING_DEPTH;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser over a token stream.
///
/// Unlike an editor-facing parser there is no error recovery: a rod
/// description is either fully valid or rejected at the first problem.
pub struct Parser {
    /// Token stream (terminated by EOF).
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
}

impl Parser {
    /// Create a new parser.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse exactly one value spanning the whole input.
    pub fn parse(&mut self) -> Result<Value, ParseError> {
        let value = self.parse_value(0)?;
        if !self.is_at_end() {
            return Err(self.unexpected("end of input"));
        }
        Ok(value)
    }

    /// Parse any value.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// value = dict | list | tuple | ("+" | "-") number | literal
    /// ```
    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        if depth > MAX_NESTING_DEPTH {
            return Err(self.error_here(ParseErrorKind::TooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        match self.peek_kind() {
            TokenKind::LBrace => self.parse_dict(depth),
            TokenKind::LBracket => self.parse_list(depth),
            TokenKind::LParen => self.parse_tuple_or_group(depth),
            TokenKind::Plus | TokenKind::Minus => self.parse_signed_number(),
            kind if kind.is_literal() => self.parse_literal(),
            _ => Err(self.unexpected("value")),
        }
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token.
    fn peek(&self) -> &Token {
        // The lexer always terminates the stream with EOF, and `advance`
        // never moves past it.
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Get current token kind.
    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Check if current token matches kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Check if at end of input.
    fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    /// Advance to next token, returning the consumed one.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Consume token if it matches expected kind.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.display()))
        }
    }

    /// Try to consume token if it matches.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    /// Error located at the current token.
    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.peek().span)
    }

    /// Error describing the current token as unexpected.
    ///
    /// Lexical error tokens are reported as what they are rather than as a
    /// generic mismatch.
    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.peek();
        let kind = match token.kind {
            TokenKind::Eof => ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            TokenKind::UnterminatedString => ParseErrorKind::UnterminatedString,
            TokenKind::Error => ParseErrorKind::UnexpectedCharacter {
                text: token.text.clone(),
            },
            TokenKind::Identifier => ParseErrorKind::UnknownName {
                name: token.text.clone(),
            },
            _ => ParseErrorKind::UnexpectedToken {
                found: token.text.clone(),
                expected: expected.to_string(),
            },
        };
        ParseError::new(kind, token.span)
    }

    /// Span from `start` to the end of the previously consumed token.
    fn span_from(&self, start: Span) -> Span {
        let previous = &self.tokens[self.current.saturating_sub(1)];
        start.merge(&previous.span)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse(source: &str) -> Result<Value, ParseError> {
        Parser::new(Lexer::new(source).tokenize()).parse()
    }

    #[test]
    fn test_parse_empty_input() {
        let err = parse("   # nothing\n").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
    }

    #[test]
    fn test_parse_scalar() {
        assert_eq!(parse("42").unwrap(), Value::Int(42));
    }

    #[test]
    fn test_parse_trailing_garbage() {
        let err = parse("{} {}").unwrap_err();
        assert_eq!(err.span.start.byte, 3);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = parse("{'a': true}").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnknownName {
                name: "true".into()
            }
        );
        assert_eq!(err.span.start.column, 6);
    }

    #[test]
    fn test_parse_unexpected_character() {
        let err = parse("{'a': 1;}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter { text: ";".into() });
    }

    #[test]
    fn test_parse_too_deep() {
        let depth = MAX_NESTING_DEPTH + 2;
        let source = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        let err = parse(&source).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::TooDeep { .. }));
    }
}

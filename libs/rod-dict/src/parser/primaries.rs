//! # Primary Parsing
//!
//! Parses literal tokens into values.
//!
//! ## Responsibilities
//!
//! - Numbers: `10`, `1_000`, `0.004`, `.5`, `1e-3`
//! - Signed numbers: `-0.5`, `+2`
//! - Strings, with escapes and implicit concatenation: `'a' "b"`
//! - Constants: `True`, `False`, `None`

use super::Parser;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::value::Value;

impl Parser {
    /// Parse a literal token (or run of adjacent strings).
    pub(super) fn parse_literal(&mut self) -> Result<Value, ParseError> {
        match self.peek_kind() {
            TokenKind::True => {
                self.advance();
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Value::Bool(false))
            }
            TokenKind::None => {
                self.advance();
                Ok(Value::None)
            }
            TokenKind::Integer | TokenKind::Float => {
                let token = self.advance();
                number_value(&token)
            }
            TokenKind::String => self.parse_strings(),
            _ => Err(self.unexpected("literal")),
        }
    }

    /// Parse a number with a single leading sign.
    ///
    /// Signs apply to numbers only; `-'a'` and `--1` are rejected.
    pub(super) fn parse_signed_number(&mut self) -> Result<Value, ParseError> {
        let sign = self.advance();

        if !matches!(self.peek_kind(), TokenKind::Integer | TokenKind::Float) {
            return Err(self.unexpected("number"));
        }
        let token = self.advance();
        let span = sign.span.merge(&token.span);

        let value = number_value(&token).map_err(|e| e.with_span(span))?;
        if sign.kind == TokenKind::Plus {
            return Ok(value);
        }

        match value {
            Value::Int(i) => i.checked_neg().map(Value::Int).ok_or_else(|| {
                ParseError::new(
                    ParseErrorKind::InvalidNumber {
                        text: format!("-{}", token.text),
                    },
                    span,
                )
            }),
            Value::Float(f) => Ok(Value::Float(-f)),
            other => Ok(other),
        }
    }

    /// Parse one or more adjacent string literals into one string.
    fn parse_strings(&mut self) -> Result<Value, ParseError> {
        let mut out = String::new();
        while self.check(TokenKind::String) {
            let token = self.advance();
            unescape_into(string_body(&token.text), &mut out);
        }
        Ok(Value::Str(out))
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Convert a number token into an int or float value.
fn number_value(token: &Token) -> Result<Value, ParseError> {
    let invalid = || {
        ParseError::new(
            ParseErrorKind::InvalidNumber {
                text: token.text.clone(),
            },
            token.span,
        )
    };

    let text = &token.text;
    if text.ends_with('_') || text.contains("__") || text.contains("_.") || text.contains("._") {
        return Err(invalid());
    }
    let digits: String = text.chars().filter(|&c| c != '_').collect();

    match token.kind {
        TokenKind::Integer => digits.parse::<i64>().map(Value::Int).map_err(|_| invalid()),
        _ => digits.parse::<f64>().map(Value::Float).map_err(|_| invalid()),
    }
}

/// Strip the quotes from a string token's text.
fn string_body(text: &str) -> &str {
    for quotes in ["'''", "\"\"\"", "'", "\""] {
        if text.len() >= 2 * quotes.len() && text.starts_with(quotes) && text.ends_with(quotes) {
            return &text[quotes.len()..text.len() - quotes.len()];
        }
    }
    text
}

/// Resolve backslash escapes. Unknown escapes are kept as written.
fn unescape_into(body: &str, out: &mut String) {
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\n') => {}
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

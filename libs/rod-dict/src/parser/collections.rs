//! # Collection Parsing
//!
//! Parses dict, list and tuple displays.
//!
//! ## Responsibilities
//!
//! - Dicts: `{'a': 1, 'b': [1, 2],}`
//! - Lists: `[1, 2, 3]`
//! - Tuples and grouping: `(1, 2)`, `(1,)`, `()`, `(1)`

use super::Parser;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;
use crate::value::{Dict, Value};

impl Parser {
    /// Parse a dict.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// dict = "{" (string ":" value ("," string ":" value)* ","?)? "}"
    /// ```
    pub(super) fn parse_dict(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.expect(TokenKind::LBrace)?;
        let mut dict = Dict::new();

        while !self.check(TokenKind::RBrace) {
            let key_span = self.peek().span;
            let key = match self.parse_value(depth + 1)? {
                Value::Str(key) => key,
                other => {
                    return Err(ParseError::new(
                        ParseErrorKind::NonStringKey {
                            found: other.type_name().to_string(),
                        },
                        self.span_from(key_span),
                    ))
                }
            };

            self.expect(TokenKind::Colon)?;
            let value = self.parse_value(depth + 1)?;
            dict.insert(key, value);

            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::RBrace)?;
        Ok(Value::Dict(dict))
    }

    /// Parse a list.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// list = "[" (value ("," value)* ","?)? "]"
    /// ```
    pub(super) fn parse_list(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.expect(TokenKind::LBracket)?;
        let items = self.parse_elements(TokenKind::RBracket, depth)?;
        self.expect(TokenKind::RBracket)?;
        Ok(Value::List(items))
    }

    /// Parse a tuple, or a parenthesized value.
    ///
    /// `(x)` is just `x`; a tuple needs a comma unless it is empty.
    pub(super) fn parse_tuple_or_group(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.expect(TokenKind::LParen)?;

        if self.match_token(TokenKind::RParen) {
            return Ok(Value::Tuple(Vec::new()));
        }

        let first = self.parse_value(depth + 1)?;
        if !self.match_token(TokenKind::Comma) {
            self.expect(TokenKind::RParen)?;
            return Ok(first);
        }

        let mut items = vec![first];
        items.extend(self.parse_elements(TokenKind::RParen, depth)?);
        self.expect(TokenKind::RParen)?;
        Ok(Value::Tuple(items))
    }

    /// Parse comma-separated values up to (not including) `closing`.
    fn parse_elements(
        &mut self,
        closing: TokenKind,
        depth: usize,
    ) -> Result<Vec<Value>, ParseError> {
        let mut items = Vec::new();

        while !self.check(closing) {
            items.push(self.parse_value(depth + 1)?);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        Ok(items)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::ParseErrorKind;
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use crate::value::Value;

    fn parse(source: &str) -> Value {
        Parser::new(Lexer::new(source).tokenize()).parse().unwrap()
    }

    #[test]
    fn test_parse_empty_collections() {
        assert_eq!(parse("[]"), Value::List(vec![]));
        assert_eq!(parse("()"), Value::Tuple(vec![]));
        assert_eq!(parse("{}").as_dict().map(|d| d.len()), Some(0));
    }

    #[test]
    fn test_parse_list_trailing_comma() {
        assert_eq!(parse("[1, 2, 3,]").as_sequence().map(|s| s.len()), Some(3));
    }

    #[test]
    fn test_parse_nested_list() {
        let value = parse("[[1, 2], [3, 4]]");
        let outer = value.as_sequence().unwrap();
        assert_eq!(outer.len(), 2);
        assert_eq!(outer[1], Value::List(vec![Value::Int(3), Value::Int(4)]));
    }

    #[test]
    fn test_parse_tuple_vs_group() {
        assert_eq!(parse("(7)"), Value::Int(7));
        assert_eq!(parse("(7,)"), Value::Tuple(vec![Value::Int(7)]));
        assert_eq!(parse("(1, 'a')"), Value::Tuple(vec![Value::Int(1), Value::Str("a".into())]));
    }

    #[test]
    fn test_parse_dict_entries_in_order() {
        let value = parse("{'b': 1, 'a': [0.5], 'c': {'x': None},}");
        let dict = value.as_dict().unwrap();
        let keys: Vec<_> = dict.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        let nested = dict.get("c").and_then(|c| c.as_dict()).and_then(|c| c.get("x"));
        assert_eq!(nested, Some(&Value::None));
    }

    #[test]
    fn test_parse_dict_rejects_numeric_key() {
        let err = Parser::new(Lexer::new("{1: 2}").tokenize()).parse().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NonStringKey { found: "int".into() });
    }

    #[test]
    fn test_parse_dict_missing_colon() {
        let err = Parser::new(Lexer::new("{'a' 2}").tokenize()).parse().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
        assert_eq!(err.span.start.byte, 5);
    }

    #[test]
    fn test_parse_unclosed_list() {
        let err = Parser::new(Lexer::new("[1, 2").tokenize()).parse().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
    }
}

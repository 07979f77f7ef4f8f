//! # Rod Description Lexer
//!
//! Tokenizes Python-literal text into tokens.
//!
//! ## Example
//!
//! ```rust
//! use rod_dict::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("{'wedgeAngle': 5}").tokenize();
//! assert_eq!(tokens[0].kind, TokenKind::LBrace);
//! assert_eq!(tokens[1].kind, TokenKind::String);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::span::{Position, Span};

// =============================================================================
// LEXER
// =============================================================================

/// Rod description lexer.
///
/// Converts source text into a stream of tokens. Lexical problems are
/// reported as `Error`/`UnterminatedString` tokens so the parser can attach
/// a position to them.
pub struct Lexer<'a> {
    /// Source text being lexed.
    source: &'a str,
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Vector of tokens, always terminated by an EOF token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.cursor.is_eof() {
            self.skip_whitespace_and_comments();
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token();
        }

        let eof_pos = self.cursor.position();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(eof_pos, eof_pos),
            String::new(),
        ));

        self.tokens
    }

    /// Skip whitespace, `#` comments and backslash line continuations.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.cursor.advance_while(char::is_whitespace);
            if !(self.cursor.skip_comment() || self.cursor.eat_str("\\\n")) {
                break;
            }
        }
    }

    /// Scan a single token.
    fn scan_token(&mut self) {
        let start = self.cursor.position();
        let c = match self.cursor.advance() {
            Some(c) => c,
            None => return,
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,

            '\'' | '"' => return self.scan_string(start, c),

            '0'..='9' => return self.scan_number(start, c),
            '.' if self.cursor.peek().is_some_and(|n| n.is_ascii_digit()) => {
                return self.scan_number(start, c)
            }

            c if c.is_alphabetic() || c == '_' => return self.scan_identifier(start),

            _ => TokenKind::Error,
        };

        self.push(kind, start);
    }

    /// Push a token spanning from `start` to the cursor.
    fn push(&mut self, kind: TokenKind, start: Position) {
        let end = self.cursor.position();
        let text = &self.source[start.byte..end.byte];
        self.tokens.push(Token::new(kind, Span::new(start, end), text.to_string()));
    }

    /// Scan a string literal; the opening quote is already consumed.
    ///
    /// Handles both `'…'`/`"…"` and the triple-quoted forms. Escapes are
    /// kept verbatim here and resolved by the parser.
    fn scan_string(&mut self, start: Position, quote: char) {
        let triple = self.cursor.eat_str(if quote == '"' { "\"\"" } else { "''" });

        let mut closing_run = 0;
        loop {
            let c = match self.cursor.peek() {
                Some(c) => c,
                None => return self.push(TokenKind::UnterminatedString, start),
            };
            if c == '\n' && !triple {
                return self.push(TokenKind::UnterminatedString, start);
            }

            self.cursor.advance();
            if c == '\\' {
                self.cursor.advance();
                closing_run = 0;
                continue;
            }

            if c == quote {
                closing_run += 1;
                if !triple || closing_run == 3 {
                    break;
                }
            } else {
                closing_run = 0;
            }
        }

        self.push(TokenKind::String, start);
    }

    /// Scan a number literal; `first_char` (a digit or `.`) is consumed.
    fn scan_number(&mut self, start: Position, first_char: char) {
        let mut is_float = first_char == '.';
        let mut has_exponent = false;

        while let Some(c) = self.cursor.peek() {
            match c {
                '0'..='9' | '_' => {
                    self.cursor.advance();
                }
                '.' if !is_float && !has_exponent => {
                    is_float = true;
                    self.cursor.advance();
                }
                'e' | 'E' if !has_exponent => {
                    has_exponent = true;
                    is_float = true;
                    self.cursor.advance();
                    if !self.cursor.eat('+') {
                        self.cursor.eat('-');
                    }
                }
                _ => break,
            }
        }

        let kind = if is_float { TokenKind::Float } else { TokenKind::Integer };
        self.push(kind, start);
    }

    /// Scan a bare name.
    fn scan_identifier(&mut self, start: Position) {
        self.cursor.advance_while(|c| c.is_alphanumeric() || c == '_');

        let text = &self.source[start.byte..self.cursor.position().byte];
        let kind = match text {
            "True" => TokenKind::True,
            "False" => TokenKind::False,
            "None" => TokenKind::None,
            _ => TokenKind::Identifier,
        };

        self.push(kind, start);
    }
}

// =============================================================================
// TESTS
// =============================================================================

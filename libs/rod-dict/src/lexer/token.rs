//! # Tokens
//!
//! Token types for the rod description lexer.

use crate::span::{Span, Spanned};

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text, exactly as written (quotes included for strings).
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    /// Check if token is EOF.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
///
/// Covers the Python literal subset a rod description may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Integer literal like `10` or `1_000`
    Integer,
    /// Float literal like `0.004`, `.5` or `1e-3`
    Float,
    /// String literal like `'fuel'` or `"fuel"`
    String,
    /// `True`
    True,
    /// `False`
    False,
    /// `None`
    None,

    /// Any other bare name (always an error in a literal)
    Identifier,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `:`
    Colon,

    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,

    // Meta
    /// End of input
    Eof,
    /// Unterminated string
    UnterminatedString,
    /// Character that starts no token
    Error,
}

impl TokenKind {
    /// Check if this is a literal token.
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Float | Self::String | Self::True | Self::False | Self::None
        )
    }

    /// Check if this token closes a collection.
    pub const fn is_closing(&self) -> bool {
        matches!(self, Self::RParen | Self::RBracket | Self::RBrace)
    }

    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::True => "True",
            Self::False => "False",
            Self::None => "None",
            Self::Identifier => "name",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Colon => "':'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Comma => "','",
            Self::Eof => "end of input",
            Self::UnterminatedString => "unterminated string",
            Self::Error => "error",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

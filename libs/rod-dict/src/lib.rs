//! # Rod Description Reader (Pure Rust)
//!
//! Reads a rod description: a single Python dict literal, as written by
//! hand or by a case-generation script.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Value
//! ```
//!
//! Only literals are accepted (numbers, strings, `True`/`False`/`None`,
//! lists, tuples and dicts). Nothing is evaluated.
//!
//! ## Example
//!
//! ```rust
//! use rod_dict::parse;
//!
//! let value = parse("{'wedgeAngle': 5, 'geometryType': '2Ddiscrete'}").unwrap();
//! let dict = value.as_dict().unwrap();
//! assert_eq!(dict.get("wedgeAngle").and_then(|v| v.as_f64()), Some(5.0));
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! rod-dict → rod-mesh → rodmaker
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod value;

// Re-export public API
pub use error::{ParseError, ParseErrorKind};
pub use span::{Position, Span, Spanned};
pub use value::{Dict, Value};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse a rod description into a value tree.
///
/// ## Parameters
///
/// - `source`: Python literal text, usually a single dict
///
/// ## Returns
///
/// The parsed value, or the first error with its location.
///
/// ## Example
///
/// ```rust
/// use rod_dict::parse;
///
/// assert!(parse("{'nBlocksFuel': 1}").is_ok());
/// assert!(parse("{'nBlocksFuel': one}").is_err());
/// ```
pub fn parse(source: &str) -> Result<Value, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize();
    parser::Parser::new(tokens).parse()
}

// =============================================================================
// TESTS
// =============================================================================

//! # Source Cursor
//!
//! Walks a rod description one character at a time, keeping the line and
//! column of the next character for error reporting. Besides plain
//! stepping it knows the few multi-character pieces of the literal syntax
//! that are not tokens: `#` comments, `\` line continuations and the extra
//! quotes of a triple-quoted string.
//!
//! ```rust
//! use rod_dict::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("# fuel\n'''a'''");
//! assert!(cursor.skip_comment());
//! cursor.advance();
//! cursor.advance();
//! assert!(cursor.eat_str("''"));
//! assert_eq!(cursor.peek(), Some('a'));
//! ```

use crate::span::Position;

/// Position-tracking cursor over source text.
pub struct Cursor<'a> {
    source: &'a str,
    byte: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            line: 0,
            column: 0,
        }
    }

    /// Location of the next character.
    pub fn position(&self) -> Position {
        Position::new(self.byte, self.line, self.column)
    }

    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Unconsumed text.
    fn rest(&self) -> &'a str {
        &self.source[self.byte..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume one character. A newline moves to column 0 of the next line.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Consume `expected` if it is next.
    pub fn eat(&mut self, expected: char) -> bool {
        let found = self.peek() == Some(expected);
        if found {
            self.advance();
        }
        found
    }

    /// Consume `text` if the source continues with it.
    pub fn eat_str(&mut self, text: &str) -> bool {
        if !self.rest().starts_with(text) {
            return false;
        }
        for _ in text.chars() {
            self.advance();
        }
        true
    }

    /// Skip a `#` comment up to (not including) the end of its line.
    pub fn skip_comment(&mut self) -> bool {
        if self.peek() != Some('#') {
            return false;
        }
        self.advance_while(|c| c != '\n');
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
        assert!(!Cursor::new("").skip_comment());
    }

    #[test]
    fn test_lines_and_columns() {
        let mut cursor = Cursor::new("{\n  'a'");
        cursor.advance();
        assert_eq!(cursor.position().line, 0);
        cursor.advance();
        cursor.advance_while(|c| c == ' ');
        let at = cursor.position();
        assert_eq!((at.line, at.column, at.byte), (1, 2, 4));
    }

    #[test]
    fn test_line_continuation() {
        let mut cursor = Cursor::new("\\\n  1");
        assert!(cursor.eat_str("\\\n"));
        assert_eq!(cursor.position().line, 1);
        assert_eq!(cursor.position().column, 0);
    }

    #[test]
    fn test_eat() {
        let mut cursor = Cursor::new("+5");
        assert!(!cursor.eat('-'));
        assert!(cursor.eat('+'));
        assert_eq!(cursor.peek(), Some('5'));
    }

    #[test]
    fn test_eat_str_is_all_or_nothing() {
        let mut cursor = Cursor::new("\"\"x");
        assert!(!cursor.eat_str("\"\"\""));
        assert_eq!(cursor.position().byte, 0);
        assert!(cursor.eat_str("\"\""));
        assert_eq!(cursor.peek(), Some('x'));
    }

    #[test]
    fn test_comment_stops_at_newline() {
        let mut cursor = Cursor::new("# rInnerFuel: é\n[0]");
        assert!(cursor.skip_comment());
        assert_eq!(cursor.peek(), Some('\n'));
        assert!(!cursor.skip_comment());
        cursor.advance();
        assert_eq!(cursor.position().line, 1);
    }

    #[test]
    fn test_multibyte_column() {
        let mut cursor = Cursor::new("é");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position().byte, 2);
        assert_eq!(cursor.position().column, 1);
    }
}

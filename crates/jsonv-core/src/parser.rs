//! Recursive-descent JSON parser.
//!
//! The grammar is the library's deliberately small JSON subset:
//!
//! ```text
//! value   := "null" | quoted | number | array | object
//! array   := '[' (value (',' value)*)? ']'
//! object  := '{' (pair (',' pair)*)? '}'
//! pair    := quoted ':' value
//! quoted  := '"' (char_except_quote)* '"'
//! ```
//!
//! Whitespace between tokens is insignificant. String literals carry no
//! escape sequences: a backslash fails with "invalid escape sequence", a
//! literal newline or end-of-input inside a literal fails with "unfinished
//! string". Numbers are attempted as 32-bit integers first and become
//! double-kind on a decimal point, an exponent, or i32 overflow.
//!
//! Parsing goes through a transient AST that mirrors textual order, then a
//! single recursive visit converts it into the public [`Value`] model.
//! Object members are inserted through the same validating last-write-wins
//! path the builder API uses, so duplicate keys resolve identically in both.
//!
//! Recursion depth is bounded only by input nesting depth; a pathologically
//! nested input can exhaust the call stack. This is a documented resource
//! limit, not a guarded condition.

use crate::error::{JsonError, Result};
use crate::value::Value;

/// Parse JSON text into a [`Value`]. A leading UTF-8 BOM is stripped, and
/// trailing non-whitespace after the value is an error.
pub fn parse(text: &str) -> Result<Value> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut parser = Parser::new(text);
    parser.skip_whitespace();
    let ast = parser.parse_value()?;
    parser.skip_whitespace();
    if !parser.at_end() {
        return Err(parser.error("trailing characters after value"));
    }
    build(ast)
}

/// Transient parser-only representation. Array elements and object pairs
/// keep textual order; the pair order is discarded when the lexicographic
/// [`crate::Object`] is built.
enum Ast {
    Null,
    Int(i32),
    Double(f64),
    Str(String),
    Array(Vec<Ast>),
    Object(Vec<(String, Ast)>),
}

/// Convert the AST into the public value model. Strings are re-validated by
/// the model's own constructor; duplicate object keys are last-write-wins.
fn build(ast: Ast) -> Result<Value> {
    match ast {
        Ast::Null => Ok(Value::null()),
        Ast::Int(n) => Ok(Value::number(n)),
        Ast::Double(n) => Ok(Value::number(n)),
        Ast::Str(s) => Value::string(s),
        Ast::Array(items) => {
            let mut value = Value::array();
            let arr = value.as_array_mut()?;
            for item in items {
                arr.push(build(item)?);
            }
            Ok(value)
        }
        Ast::Object(pairs) => {
            let mut value = Value::object();
            for (key, member) in pairs {
                *value.entry(&key)? = build(member)?;
            }
            Ok(value)
        }
    }
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Parser<'a> {
        Parser { text, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// Build a parse error at the current position with 1-based line/column
    /// derived from the input offset.
    fn error(&self, message: impl Into<String>) -> JsonError {
        let mut line = 1;
        let mut column = 1;
        for b in self.text.as_bytes()[..self.pos].iter() {
            if *b == b'\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        JsonError::Parse {
            line,
            column,
            message: message.into(),
        }
    }

    fn parse_value(&mut self) -> Result<Ast> {
        match self.peek() {
            Some(b'n') => self.parse_null(),
            Some(b'"') => self.parse_quoted().map(Ast::Str),
            Some(b'-') | Some(b'0'..=b'9') => self.parse_number(),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            // No rule matches here; this is the generic diagnostic.
            _ => Err(self.error("can't parse")),
        }
    }

    fn parse_null(&mut self) -> Result<Ast> {
        if self.text[self.pos..].starts_with("null") {
            self.pos += 4;
            Ok(Ast::Null)
        } else {
            Err(self.error("can't parse"))
        }
    }

    /// quoted := '"' (char_except_quote)* '"' — no escape sequences.
    fn parse_quoted(&mut self) -> Result<String> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.pos += 1;
        let start = self.pos;
        loop {
            match self.peek() {
                Some(b'"') => {
                    let literal = self.text[start..self.pos].to_string();
                    self.pos += 1;
                    return Ok(literal);
                }
                Some(b'\\') => return Err(self.error("invalid escape sequence")),
                Some(b'\n' | b'\r') | None => return Err(self.error("unfinished string")),
                Some(_) => self.pos += 1,
            }
        }
    }

    /// number := integer first, double-kind on '.', exponent, or overflow.
    fn parse_number(&mut self) -> Result<Ast> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        let digits_start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if self.pos == digits_start {
            return Err(self.error("expected digits in number"));
        }

        let mut is_double = false;
        if self.peek() == Some(b'.') {
            is_double = true;
            self.pos += 1;
            let frac_start = self.pos;
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
            if self.pos == frac_start {
                return Err(self.error("expected digits after decimal point"));
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            is_double = true;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            let exp_start = self.pos;
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
            if self.pos == exp_start {
                return Err(self.error("expected digits in exponent"));
            }
        }

        let literal = &self.text[start..self.pos];
        if !is_double {
            if let Ok(n) = literal.parse::<i32>() {
                return Ok(Ast::Int(n));
            }
            // Out of i32 range: fall through to double-kind.
        }
        match literal.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Ast::Double(n)),
            _ => Err(self.error("number out of range")),
        }
    }

    fn parse_array(&mut self) -> Result<Ast> {
        debug_assert_eq!(self.peek(), Some(b'['));
        self.pos += 1;
        self.skip_whitespace();

        let mut items = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Ast::Array(items));
        }

        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Ast::Array(items));
                }
                _ => return Err(self.error("expected ',' or ']' in array")),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Ast> {
        debug_assert_eq!(self.peek(), Some(b'{'));
        self.pos += 1;
        self.skip_whitespace();

        let mut pairs = Vec::new();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Ast::Object(pairs));
        }

        loop {
            if self.peek() != Some(b'"') {
                return Err(self.error("expected string key in object"));
            }
            let key = self.parse_quoted()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.error("expected ':' after object key"));
            }
            self.pos += 1;
            self.skip_whitespace();
            let member = self.parse_value()?;
            pairs.push((key, member));
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Ast::Object(pairs));
                }
                _ => return Err(self.error("expected ',' or '}' in object")),
            }
        }
    }
}

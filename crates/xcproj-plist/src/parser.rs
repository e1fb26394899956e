//! Parser for the OpenStep ASCII plist dialect.
//!
//! Accepts the subset Xcode emits plus the usual hand-edited variations:
//! ```text
//! // !$*UTF8*$!
//! {
//!     key = value;
//!     list = ( a, "b c", );
//!     nested = { data = <0fbd77>; };
//! }
//! ```
//! `//` and `/* */` comments may appear anywhere between tokens.

use crate::error::{Error, Result};
use crate::value::{Dictionary, Value};

/// Characters allowed in an unquoted string.
pub(crate) fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '+' | '/' | ':' | '.' | '-')
}

/// Parse a complete property list whose root is a dictionary.
///
/// # Example
/// ```
/// use xcproj_plist::parse;
///
/// let root = parse("{ archiveVersion = 1; classes = { }; }").unwrap();
/// assert_eq!(root.get_str("archiveVersion"), Some("1"));
/// ```
pub fn parse(source: &str) -> Result<Dictionary> {
    let mut parser = Parser::new(source);
    let value = parser.parse_value()?;
    parser.skip_trivia()?;

    if parser.peek().is_some() {
        return Err(parser.error("trailing content after root value"));
    }

    match value {
        Value::Dictionary(dict) => Ok(dict),
        _ => Err(Error::RootNotDictionary),
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        // A UTF-8 BOM is legal before the header
        let src = src.strip_prefix('\u{feff}').unwrap_or(src);
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::Parse {
            line: self.line,
            column: self.column,
            message: message.into(),
        }
    }

    fn eof(expected: &str) -> Error {
        Error::UnexpectedEof {
            expected: expected.to_string(),
        }
    }

    fn expect(&mut self, wanted: char) -> Result<()> {
        self.skip_trivia()?;
        match self.peek() {
            Some(c) if c == wanted => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", wanted, c))),
            None => Err(Self::eof(&format!("'{}'", wanted))),
        }
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            let rest = self.rest();
            if rest.starts_with("//") {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else if rest.starts_with("/*") {
                self.bump();
                self.bump();
                loop {
                    if self.rest().starts_with("*/") {
                        self.bump();
                        self.bump();
                        break;
                    }
                    if self.bump().is_none() {
                        return Err(Self::eof("end of comment '*/'"));
                    }
                }
            } else if self.peek().is_some_and(char::is_whitespace) {
                self.bump();
            } else {
                return Ok(());
            }
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_trivia()?;
        match self.peek() {
            Some('{') => self.parse_dictionary().map(Value::Dictionary),
            Some('(') => self.parse_array().map(Value::Array),
            Some('<') => self.parse_data().map(Value::Data),
            Some('"') | Some('\'') => self.parse_quoted().map(Value::String),
            Some(c) if is_unquoted_char(c) => Ok(Value::String(self.parse_unquoted())),
            Some(c) => Err(self.error(format!("unexpected character '{}'", c))),
            None => Err(Self::eof("a value")),
        }
    }

    fn parse_dictionary(&mut self) -> Result<Dictionary> {
        self.bump();
        let mut dict = Dictionary::new();

        loop {
            self.skip_trivia()?;
            match self.peek() {
                Some('}') => {
                    self.bump();
                    return Ok(dict);
                }
                None => return Err(Self::eof("'}'")),
                _ => {}
            }

            let key = self.parse_key()?;
            self.expect('=')?;
            let value = self.parse_value()?;
            self.expect(';')?;
            dict.insert(key, value);
        }
    }

    fn parse_key(&mut self) -> Result<String> {
        match self.peek() {
            Some('"') | Some('\'') => self.parse_quoted(),
            Some(c) if is_unquoted_char(c) => Ok(self.parse_unquoted()),
            Some(c) => Err(self.error(format!("expected a key, found '{}'", c))),
            None => Err(Self::eof("a key")),
        }
    }

    fn parse_array(&mut self) -> Result<Vec<Value>> {
        self.bump();
        let mut items = Vec::new();

        loop {
            self.skip_trivia()?;
            if self.peek() == Some(')') {
                self.bump();
                return Ok(items);
            }

            items.push(self.parse_value()?);

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(')') => {
                    self.bump();
                    return Ok(items);
                }
                Some(c) => return Err(self.error(format!("expected ',' or ')', found '{}'", c))),
                None => return Err(Self::eof("')'")),
            }
        }
    }

    fn parse_data(&mut self) -> Result<Vec<u8>> {
        self.bump();
        let mut digits = String::new();

        loop {
            match self.bump() {
                Some('>') => break,
                Some(c) if c.is_ascii_hexdigit() => digits.push(c),
                Some(c) if c.is_whitespace() => {}
                Some(c) => return Err(self.error(format!("invalid character '{}' in data", c))),
                None => return Err(Self::eof("'>'")),
            }
        }

        if digits.len() % 2 != 0 {
            return Err(self.error("data has an odd number of hex digits"));
        }

        digits
            .as_bytes()
            .chunks(2)
            .map(|pair| {
                std::str::from_utf8(pair)
                    .ok()
                    .and_then(|s| u8::from_str_radix(s, 16).ok())
                    .ok_or_else(|| self.error("invalid hex digits in data"))
            })
            .collect()
    }

    fn parse_unquoted(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            let rest = self.rest();
            if !is_unquoted_char(c) || rest.starts_with("//") || rest.starts_with("/*") {
                break;
            }
            self.bump();
        }
        self.src[start..self.pos].to_string()
    }

    fn parse_quoted(&mut self) -> Result<String> {
        let quote = self.bump().ok_or_else(|| Self::eof("a string"))?;
        let mut out = String::new();

        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.parse_escape()?),
                Some(c) => out.push(c),
                None => return Err(Self::eof("closing quote")),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char> {
        let c = self.bump().ok_or_else(|| Self::eof("escape sequence"))?;
        let decoded = match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0c}',
            'v' => '\u{0b}',
            'U' => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let digit = self
                        .bump()
                        .and_then(|d| d.to_digit(16))
                        .ok_or_else(|| self.error("expected 4 hex digits after \\U"))?;
                    code = code * 16 + digit;
                }
                char::from_u32(code).ok_or_else(|| self.error("invalid unicode escape"))?
            }
            '0'..='7' => {
                let mut code = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            self.bump();
                            code = code * 8 + digit;
                        }
                        None => break,
                    }
                }
                char::from_u32(code).ok_or_else(|| self.error("invalid octal escape"))?
            }
            other => other,
        };
        Ok(decoded)
    }
}

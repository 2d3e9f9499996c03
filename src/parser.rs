// ABOUTME: Converts source text into a Value tree; tolerant of unbalanced parens

use nom::bytes::complete::take_while;
use nom::combinator::recognize;
use nom::{IResult, Parser};

use crate::config::is_whitespace;
use crate::value::Value;

struct Cursor<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor {
            text: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.text.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    fn rest(&self) -> &'a str {
        // SAFETY-free: `pos` only ever advances to ASCII-boundary positions
        // (whitespace, `(`, `)`, `{`, token bytes, or end of input), so this
        // slice always starts on a char boundary.
        std::str::from_utf8(&self.text[self.pos..]).unwrap_or("")
    }

    /// Scan a token: everything up to the next whitespace, `(`, `)` or `{`.
    fn parse_token(&mut self) -> Value {
        fn token_span(input: &str) -> IResult<&str, &str> {
            recognize(take_while(|c: char| {
                !c.is_whitespace() && !matches!(c, '(' | ')' | '{')
            }))
            .parse(input)
        }

        let (remaining, token) = token_span(self.rest()).unwrap_or(("", ""));
        self.pos += token.len();
        let _ = remaining;
        Value::atom(token)
    }

    /// `{ ... }` consumes up to and including the closing `}` (or end of
    /// input if there isn't one), then continues parsing from there.
    fn parse_comment(&mut self) -> Value {
        fn comment_body(input: &str) -> IResult<&str, &str> {
            recognize(take_while(|c: char| c != '}')).parse(input)
        }

        let (remaining, body) = comment_body(self.rest()).unwrap_or(("", ""));
        self.pos += body.len();
        if self.peek() == Some(b'}') {
            self.pos += 1;
        }
        self.parse_expr()
    }

    fn parse_list(&mut self) -> Value {
        let mut items = Vec::new();
        loop {
            let element = self.parse_expr();
            self.skip_whitespace();

            if element.is_atom() && element.is_empty() {
                if self.peek() == Some(b')') {
                    self.pos += 1;
                }
                break;
            }

            items.push(element);

            if self.peek() == Some(b')') {
                self.pos += 1;
                break;
            }
        }
        Value::list(items)
    }

    fn parse_expr(&mut self) -> Value {
        self.skip_whitespace();
        match self.peek() {
            None => Value::empty_atom(),
            Some(b'(') => {
                self.pos += 1;
                self.parse_list()
            }
            Some(b'{') => {
                self.pos += 1;
                self.parse_comment()
            }
            _ => self.parse_token(),
        }
    }
}

/// Parse a complete source string into a single Value tree.
pub fn parse(text: &str) -> Value {
    Cursor::new(text).parse_expr()
}

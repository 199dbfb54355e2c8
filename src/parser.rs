//! Contains the recursive-descent `Parser` that turns the token sequence
//! into a [`Value`](crate::value::Value) tree.
//!
//! The parser walks an immutable token buffer with an explicit cursor;
//! each grammar rule is one method, and nesting is handled by recursing
//! through `parse_value`. Tokens are consumed strictly in order, exactly
//! once, and no branch is ever reconsidered.

use crate::error::ParseError;
use crate::token::{Token, TokenKind};
use crate::value::Value;
use indexmap::IndexMap;

/// Recursive-descent parser over a fully-lexed token buffer.
pub(crate) struct Parser<'t> {
    /// The complete token sequence for the document.
    tokens: &'t [Token],
    /// Cursor into `tokens`; everything before it has been consumed.
    pos: usize,
}

impl<'t> Parser<'t> {
    /// Creates a parser positioned at the start of the token buffer.
    pub(crate) fn new(tokens: &'t [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// The next unconsumed token, if any.
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Consumes the next token.
    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Creates a `ParseError` at a token's location.
    fn error_at(&self, message: String, token: &Token) -> ParseError {
        ParseError {
            message,
            line: token.line,
            column: token.column,
        }
    }

    /// Creates a `ParseError` for running out of tokens mid-structure.
    /// The last token's location is a best-effort position.
    fn error_at_end(&self, message: String) -> ParseError {
        let (line, column) = self
            .tokens
            .last()
            .map(|token| (token.line, token.column))
            .unwrap_or((1, 1));
        ParseError {
            message,
            line,
            column,
        }
    }

    /// Parses a single value at the cursor.
    ///
    /// A begin-object or begin-array token delegates to the matching
    /// rule; a string or boolean token *is* the value and is consumed
    /// directly. Anything else cannot start a value.
    pub(crate) fn parse_value(&mut self) -> Result<Value, ParseError> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(self.error_at_end("Unexpected end of input".to_string())),
        };

        match &token.kind {
            TokenKind::LeftBrace => {
                self.advance();
                self.parse_object()
            }
            TokenKind::LeftBracket => {
                self.advance();
                self.parse_array()
            }
            TokenKind::String(s) => {
                let value = Value::String(s.clone());
                self.advance();
                Ok(value)
            }
            TokenKind::Boolean(b) => {
                let value = Value::Boolean(*b);
                self.advance();
                Ok(value)
            }
            _ => Err(self.error_at(format!("Expected a value, found '{}'", token.raw), token)),
        }
    }

    /// Parses the members of an object. The opening `{` is already
    /// consumed; the loop only ends on `}` or an error.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        let mut map: IndexMap<String, Value> = IndexMap::new();

        loop {
            let token = match self.peek() {
                Some(token) => token,
                None => {
                    return Err(self.error_at_end("Unclosed object, expected '}'".to_string()))
                }
            };

            if token.kind == TokenKind::RightBrace {
                self.advance();
                return Ok(Value::Object(map));
            }

            let key = match &token.kind {
                TokenKind::String(s) => s.clone(),
                _ => {
                    return Err(self.error_at(
                        format!("Expected '}}' or a string key, found '{}'", token.raw),
                        token,
                    ))
                }
            };
            self.advance();

            match self.peek() {
                Some(token) if token.kind == TokenKind::Colon => self.advance(),
                Some(token) => {
                    return Err(
                        self.error_at(format!("Expected ':', found '{}'", token.raw), token)
                    )
                }
                None => {
                    return Err(self.error_at_end("Unclosed object, expected '}'".to_string()))
                }
            }

            let value = self.parse_value()?;

            // Last write wins: a repeated key takes the value and the
            // position of its final occurrence.
            map.shift_remove(&key);
            map.insert(key, value);

            self.eat_comma(&TokenKind::RightBrace, "}")?;
        }
    }

    /// Parses the elements of an array. The opening `[` is already
    /// consumed; the loop only ends on `]` or an error.
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        let mut items = Vec::new();

        loop {
            let token = match self.peek() {
                Some(token) => token,
                None => {
                    return Err(self.error_at_end("Unclosed array, expected ']'".to_string()))
                }
            };

            if token.kind == TokenKind::RightBracket {
                self.advance();
                return Ok(Value::Array(items));
            }

            items.push(self.parse_value()?);

            self.eat_comma(&TokenKind::RightBracket, "]")?;
        }
    }

    /// Consumes a value separator if one is present, rejecting a trailing
    /// comma directly before `closing`.
    ///
    /// A missing separator between members is tolerated; the enclosing
    /// loop simply moves on to the next member.
    fn eat_comma(&mut self, closing: &TokenKind, closing_text: &str) -> Result<(), ParseError> {
        let comma = match self.peek() {
            Some(token) if token.kind == TokenKind::Comma => token,
            _ => return Ok(()),
        };

        if let Some(next) = self.tokens.get(self.pos + 1) {
            if next.kind == *closing {
                return Err(self.error_at(format!("Trailing comma before '{closing_text}'"), comma));
            }
        }

        self.advance();
        Ok(())
    }
}

//! The internal, byte-based tokenizer (lexer).
//!
//! This module consumes the raw input `&str` (as `&[u8]`) and produces
//! the flat sequence of `Token`s the parser works from. It is *not* part
//! of the public API.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use memchr::memchr;

// --- The Lookup Table (LUT) ---
// A 256-entry array. Classifies every byte that can begin a token with a
// single, branchless lookup.
const W: u8 = 1; // Whitespace
const S: u8 = 2; // Structural
const L: u8 = 3; // Boolean literal start
const Q: u8 = 4; // Quote

static BYTE_PROPERTIES: [u8; 256] = {
    let mut table = [0; 256];
    // 1: Whitespace. Space, horizontal tab and line feed only. Carriage
    // return is NOT whitespace here, so CRLF input fails at the '\r'.
    table[b' ' as usize] = W;
    table[b'\t' as usize] = W;
    table[b'\n' as usize] = W;

    // 2: Structural
    table[b'{' as usize] = S;
    table[b'}' as usize] = S;
    table[b'[' as usize] = S;
    table[b']' as usize] = S;
    table[b':' as usize] = S;
    table[b',' as usize] = S;

    // 3: Boolean literal starts
    table[b't' as usize] = L;
    table[b'f' as usize] = L;

    // 4: Quote
    table[b'"' as usize] = Q;

    // 0: everything else is invalid at the start of a token. That bucket
    // deliberately includes digits, '-' and 'n': numbers and null are
    // outside the grammar and get no special handling.
    table
};

/// The internal tokenizer (lexer).
///
/// Makes a single left-to-right pass over the input, using the
/// `BYTE_PROPERTIES` table to classify bytes and `memchr` for fast
/// string scanning. It is an `Iterator` over `Result<Token, LexError>`;
/// `tokenize` collects it into the full token sequence.
pub(crate) struct Tokenizer<'a> {
    /// The input document.
    text: &'a str,
    /// The current position (byte index) into `text`.
    cursor: usize,
    /// The current line number (1-indexed) for error reporting.
    line: usize,
    /// The current column number (1-indexed) for error reporting.
    column: usize,
}

/// Runs the tokenizer to completion, producing the whole token sequence.
///
/// Fails with the first `LexError`; no partial sequence is returned.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(input).collect()
}

impl<'a> Tokenizer<'a> {
    /// Creates a new `Tokenizer` from an input string.
    pub(crate) fn new(input: &'a str) -> Self {
        Tokenizer {
            text: input,
            cursor: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    /// Creates a `LexError` with the current line and column.
    fn error(&self, message: String) -> LexError {
        LexError {
            message,
            line: self.line,
            column: self.column,
        }
    }

    /// The hot whitespace-skipping loop: a single array lookup per byte.
    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(&byte) = self.bytes().get(self.cursor) {
            if BYTE_PROPERTIES[byte as usize] != W {
                break;
            }
            self.advance_byte();
        }
    }

    /// Advances the cursor by one byte, updating line/column, and returns
    /// the byte. Assumes the cursor is not at the end.
    #[inline]
    fn advance_byte(&mut self) -> u8 {
        let byte = self.bytes()[self.cursor];
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.cursor += 1;
        byte
    }

    /// Advances the cursor by `n` bytes, updating line/column for each.
    #[inline]
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance_byte();
        }
    }

    /// The character at the cursor, for error messages.
    ///
    /// The cursor only ever rests on a token boundary, so this is always
    /// the start of a full character.
    fn peek_char(&self) -> char {
        self.text[self.cursor..].chars().next().unwrap_or('\u{FFFD}')
    }

    /// Lexes a string, decoding escapes.
    /// Uses `memchr` to scan for the closing quote.
    fn lex_string(&mut self) -> Result<TokenKind, LexError> {
        self.advance_byte(); // Consume opening '"'

        let content_start = self.cursor;

        // 1. Scan for the closing quote. A quote preceded by an odd
        // number of backslashes is escaped and does not terminate the
        // string.
        let mut current_slice = &self.bytes()[self.cursor..];
        let mut total_offset = 0; // Offset from self.cursor
        let quote_index = loop {
            match memchr(b'"', current_slice) {
                Some(i) => {
                    let mut backslashes = 0;
                    let mut pos = i;
                    while pos > 0 {
                        if current_slice.get(pos - 1) == Some(&b'\\') {
                            backslashes += 1;
                            pos -= 1;
                        } else {
                            break;
                        }
                    }

                    if backslashes % 2 == 0 {
                        // This is the real closing quote.
                        break total_offset + i;
                    } else {
                        // Escaped. Continue searching *after* it.
                        total_offset += i + 1;
                        current_slice = &current_slice[i + 1..];
                    }
                }
                None => return Err(self.error("Unterminated string".to_string())),
            }
        };

        // Both quotes are ASCII, so slicing at them stays on character
        // boundaries.
        let content = &self.text[content_start..content_start + quote_index];

        // 2. Decode. The simplified unescape drops each backslash and
        // keeps the character after it verbatim: `\n` becomes `n`,
        // `\u1234` becomes `u1234`, `\"` becomes `"`. Nothing else is
        // rewritten, and raw control characters pass through untouched.
        let decoded = if memchr(b'\\', content.as_bytes()).is_some() {
            let mut s = String::with_capacity(content.len());
            let mut chars = content.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    // The parity scan above guarantees the backslash is
                    // not the last character of the content.
                    if let Some(escaped) = chars.next() {
                        s.push(escaped);
                    }
                } else {
                    s.push(c);
                }
            }
            s
        } else {
            content.to_string()
        };

        // 3. Walk the cursor over the content so line/column stay
        // accurate, then consume the closing quote.
        self.advance_by(quote_index);
        self.advance_byte();
        Ok(TokenKind::String(decoded))
    }

    /// Lexes `true` or `false`, then checks the delimiter after it.
    ///
    /// The literal must be followed by `,`, `}`, `]`, whitespace, or end
    /// of input; anything else means it is the prefix of a longer,
    /// unrecognized identifier and the whole literal is rejected.
    fn lex_boolean(&mut self, literal: &'static str, value: bool) -> Result<TokenKind, LexError> {
        let end = self.cursor + literal.len();
        if self.bytes().get(self.cursor..end) != Some(literal.as_bytes()) {
            return Err(self.error(format!("Expected '{literal}'")));
        }

        match self.bytes().get(end) {
            None => {}
            Some(&b) if matches!(b, b',' | b'}' | b']') => {}
            Some(&b) if BYTE_PROPERTIES[b as usize] == W => {}
            Some(_) => return Err(self.error(format!("Expected '{literal}'"))),
        }

        self.advance_by(literal.len());
        Ok(TokenKind::Boolean(value))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token, LexError>;

    /// Gets the next `Token` from the input.
    fn next(&mut self) -> Option<Self::Item> {
        // 1. Skip insignificant whitespace.
        self.skip_whitespace();

        // 2. Peek at the next byte to see what to do.
        let byte = match self.bytes().get(self.cursor) {
            Some(&b) => b,
            None => return None, // End of input
        };

        // 3. Record position *after* skipping whitespace.
        let (start_line, start_column) = (self.line, self.column);
        let start_cursor = self.cursor;

        // 4. Use the LUT to decide which lexer to call.
        let kind_result = match BYTE_PROPERTIES[byte as usize] {
            S => {
                self.advance_byte();
                Ok(match byte {
                    b'{' => TokenKind::LeftBrace,
                    b'}' => TokenKind::RightBrace,
                    b'[' => TokenKind::LeftBracket,
                    b']' => TokenKind::RightBracket,
                    b':' => TokenKind::Colon,
                    b',' => TokenKind::Comma,
                    _ => unreachable!(), // LUT guarantees this
                })
            }
            L => match byte {
                b't' => self.lex_boolean("true", true),
                b'f' => self.lex_boolean("false", false),
                _ => unreachable!(), // LUT guarantees this
            },
            Q => self.lex_string(),
            _ => {
                // Whitespace was skipped above, so property 0 means an
                // invalid character. Digits, '-' and 'n' land here too.
                Err(self.error(format!("Unexpected character '{}'", self.peek_char())))
            }
        };

        // 5. Wrap the result in a `Token`, keeping the raw source slice.
        let token_result = kind_result.map(|kind| Token {
            kind,
            raw: self.text[start_cursor..self.cursor].to_string(),
            line: start_line,
            column: start_column,
        });

        Some(token_result)
    }
}

//! Contains the error types for the two stages of the pipeline.
use std::error;
use std::fmt;

/// Raised when the tokenizer meets a character that cannot begin any
/// recognized token.
///
/// This covers unsupported numeric literals, the unsupported `null`
/// literal, stray symbols, unterminated strings, and a boolean literal
/// that fails its delimiter lookahead. The struct carries a human-readable
/// message and the location (line and column) where lexing stopped.
#[derive(Debug, PartialEq)]
pub struct LexError {
    /// A description of what went wrong.
    pub message: String,
    /// The line number (1-indexed) where the error was detected.
    pub line: usize,
    /// The column number (1-indexed) where the error was detected.
    pub column: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lex error: {} at line {}, column {}.",
            self.message, self.line, self.column
        )
    }
}

impl error::Error for LexError {}

/// Raised when the token order violates the grammar.
///
/// This covers a missing `:` after an object key, a missing closing
/// `}`/`]`, a non-string key, and a trailing comma directly before a
/// closing brace or bracket.
#[derive(Debug, PartialEq)]
pub struct ParseError {
    /// A description of what went wrong.
    pub message: String,
    /// The line number (1-indexed) of the offending token.
    pub line: usize,
    /// The column number (1-indexed) of the offending token.
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error: {} at line {}, column {}.",
            self.message, self.line, self.column
        )
    }
}

impl error::Error for ParseError {}

/// Either failure of the lex or parse stage.
///
/// `parse` returns this so a caller can tell which stage rejected the
/// input without losing the message or position.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The input could not be tokenized.
    Lex(LexError),
    /// The token sequence violated the grammar.
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(e) => e.fmt(f),
            Error::Parse(e) => e.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

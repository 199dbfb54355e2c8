//! # sprig-json
//!
//! `sprig-json` is a small, strict parser for a deliberate subset of
//! JSON: objects, arrays, double-quoted strings, and the `true`/`false`
//! literals.
//!
//! Numbers and `null` are not part of the grammar. They are rejected
//! during lexing exactly like any other unrecognized input rather than
//! being coerced, and there is no serializer direction at all: text goes
//! in, a [`Value`] tree comes out.
//!
//! ## Pipeline
//!
//! Parsing is a strict two-stage pipeline. A byte-based tokenizer (a
//! classification lookup table plus `memchr` string scanning) runs to
//! completion first and produces the flat token sequence; a
//! recursive-descent parser then walks that sequence with a cursor and
//! builds the tree. The stages never interleave, and the first error in
//! either stage aborts the whole call.
//!
//! ## Quick Start
//!
//! ```
//! use sprig_json::{parse, Value};
//!
//! let value = parse(r#"{ "name": "Babbage", "admin": true }"#).unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("Babbage"));
//! assert_eq!(value.get("admin").and_then(Value::as_bool), Some(true));
//! ```
//!
//! Malformed input fails with an [`Error`] that says which stage rejected
//! it and where:
//!
//! ```
//! use sprig_json::{parse, Error};
//!
//! // Numbers are outside the subset, so the tokenizer rejects them.
//! assert!(matches!(parse("[1, 2]"), Err(Error::Lex(_))));
//!
//! // A trailing comma is a grammar violation, so the parser rejects it.
//! assert!(matches!(parse(r#"{"a": "b",}"#), Err(Error::Parse(_))));
//! ```

// 1. Declare the modules.
/// Contains the `LexError`, `ParseError` and `Error` types.
pub mod error;
/// Contains the `Token` and `TokenKind` types produced by the lexer.
pub mod token;
/// Contains the `Value` enum, the tree produced by a successful parse.
pub mod value;

/// The recursive-descent parser over the token buffer.
/// This module is private to the crate.
mod parser;
/// The internal, byte-based tokenizer (lexer).
/// This module is private to the crate.
mod tokenizer;

// 2. Re-export the public-facing types.
pub use error::{Error, LexError, ParseError};
pub use value::Value;

use parser::Parser;
use tokenizer::tokenize;

/// Parses a document into a [`Value`] tree.
///
/// The tokenizer runs to completion first; the full token sequence is
/// then handed to the parser, which builds the tree for the single root
/// value. Tokens past the end of the root value are discarded, not
/// rejected.
///
/// Each call is independent: no state outlives it, so `parse` may be
/// called concurrently from any number of threads.
///
/// # Errors
/// Returns [`Error::Lex`] when a character cannot begin any recognized
/// token (this is how numbers and `null` fail) and [`Error::Parse`] when
/// the token order violates the grammar. No partial tree is ever
/// returned.
///
/// # Examples
/// ```
/// use sprig_json::{parse, Value};
///
/// let value = parse(r#"["x", ["y"], {}]"#).unwrap();
/// let inner = value.get_index(1).unwrap();
/// assert_eq!(inner.get_index(0).and_then(Value::as_str), Some("y"));
/// ```
pub fn parse(input: &str) -> Result<Value, Error> {
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(&tokens);
    let value = parser.parse_value()?;
    Ok(value)
}

// --- Test Module ---
// Pipeline-level tests live here; the tokenizer keeps its own unit tests.
#[cfg(test)]
mod tests {
    use super::{parse, Error, Value};
    use indexmap::IndexMap;
    use serde_json::Value as SerdeValue;

    fn object(entries: Vec<(&str, Value)>) -> Value {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<IndexMap<_, _>>(),
        )
    }

    fn s(text: &str) -> Value {
        Value::String(text.to_string())
    }

    fn unwrap_parse_error(err: Error) -> crate::ParseError {
        match err {
            Error::Parse(e) => e,
            Error::Lex(e) => panic!("expected a parse error, got: {e}"),
        }
    }

    #[test]
    fn test_parse_empty_object() {
        assert_eq!(parse("{}").unwrap(), Value::Object(IndexMap::new()));
    }

    #[test]
    fn test_parse_empty_array() {
        assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));
    }

    #[test]
    fn test_parse_single_member() {
        assert_eq!(parse(r#"{"a":"b"}"#).unwrap(), object(vec![("a", s("b"))]));
    }

    #[test]
    fn test_parse_boolean_array() {
        assert_eq!(
            parse("[true,false]").unwrap(),
            Value::Array(vec![Value::Boolean(true), Value::Boolean(false)])
        );
    }

    #[test]
    fn test_parse_root_primitives() {
        assert_eq!(parse("true").unwrap(), Value::Boolean(true));
        assert_eq!(parse("false").unwrap(), Value::Boolean(false));
        assert_eq!(parse(r#""hello""#).unwrap(), s("hello"));
    }

    #[test]
    fn test_parse_nested_structures() {
        let input = r#"{ "a": ["x", { "b": true }], "c": {} }"#;
        let expected = object(vec![
            (
                "a",
                Value::Array(vec![s("x"), object(vec![("b", Value::Boolean(true))])]),
            ),
            ("c", Value::Object(IndexMap::new())),
        ]);
        assert_eq!(parse(input).unwrap(), expected);
    }

    #[test]
    fn test_escaped_quote_is_unescaped() {
        // The three-character string x"y.
        assert_eq!(
            parse("[\"x\\\"y\"]").unwrap(),
            Value::Array(vec![s("x\"y")])
        );
    }

    #[test]
    fn test_trailing_comma_in_object() {
        let err = unwrap_parse_error(parse(r#"{"a":"b",}"#).unwrap_err());
        assert_eq!(err.message, "Trailing comma before '}'");
        assert_eq!((err.line, err.column), (1, 9));
    }

    #[test]
    fn test_trailing_comma_in_array() {
        let err = unwrap_parse_error(parse(r#"["x",]"#).unwrap_err());
        assert_eq!(err.message, "Trailing comma before ']'");
    }

    #[test]
    fn test_numbers_are_lex_errors() {
        assert!(matches!(parse("[1]"), Err(Error::Lex(_))));
        assert!(matches!(parse("-5"), Err(Error::Lex(_))));
        assert!(matches!(parse(r#"{"n": 12}"#), Err(Error::Lex(_))));
    }

    #[test]
    fn test_null_is_a_lex_error() {
        assert!(matches!(parse(r#"{"a":null}"#), Err(Error::Lex(_))));
        assert!(matches!(parse("null"), Err(Error::Lex(_))));
    }

    #[test]
    fn test_missing_end_object() {
        let err = unwrap_parse_error(parse(r#"{"a":"b""#).unwrap_err());
        assert_eq!(err.message, "Unclosed object, expected '}'");
    }

    #[test]
    fn test_missing_end_array() {
        let err = unwrap_parse_error(parse(r#"["a", "b""#).unwrap_err());
        assert_eq!(err.message, "Unclosed array, expected ']'");
    }

    #[test]
    fn test_missing_colon() {
        let err = unwrap_parse_error(parse(r#"{"a" "b"}"#).unwrap_err());
        assert_eq!(err.message, "Expected ':', found '\"b\"'");
        assert_eq!((err.line, err.column), (1, 6));
    }

    #[test]
    fn test_non_string_key() {
        let err = unwrap_parse_error(parse(r#"{["k"]:"b"}"#).unwrap_err());
        assert_eq!(err.message, "Expected '}' or a string key, found '['");
    }

    #[test]
    fn test_structural_token_at_value_position() {
        let err = unwrap_parse_error(parse(r#"{"a":}"#).unwrap_err());
        assert_eq!(err.message, "Expected a value, found '}'");
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let value = parse(r#"{"a":"x","b":"y","a":"z"}"#).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 2);
        // The surviving key sits where its last occurrence was.
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(map["a"], s("z"));
    }

    #[test]
    fn test_carriage_return_is_rejected() {
        assert!(matches!(parse("{\r\n}"), Err(Error::Lex(_))));
    }

    #[test]
    fn test_missing_separator_is_tolerated() {
        // Only a *trailing* comma is a violation; absent separators are
        // not checked.
        assert_eq!(
            parse(r#"["x" "y"]"#).unwrap(),
            Value::Array(vec![s("x"), s("y")])
        );
        assert_eq!(
            parse(r#"{"a":"b" "c":"d"}"#).unwrap(),
            object(vec![("a", s("b")), ("c", s("d"))])
        );
    }

    #[test]
    fn test_trailing_tokens_are_discarded() {
        assert_eq!(parse("{} []").unwrap(), Value::Object(IndexMap::new()));
        assert_eq!(parse("true false").unwrap(), Value::Boolean(true));
    }

    #[test]
    fn test_empty_input() {
        let err = unwrap_parse_error(parse("").unwrap_err());
        assert_eq!(err.message, "Unexpected end of input");
        assert!(matches!(parse(" \n\t"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_boolean_delimiter_lookahead() {
        // Adjacent to ':' the literal is not properly delimited; at end
        // of input it is.
        assert!(matches!(parse("[true:]"), Err(Error::Lex(_))));
        assert!(matches!(parse("[truely]"), Err(Error::Lex(_))));
        assert_eq!(parse("false").unwrap(), Value::Boolean(false));
    }

    #[test]
    fn test_idempotence() {
        let input = r#"{ "a": ["x", true], "b": {} }"#;
        assert_eq!(parse(input).unwrap(), parse(input).unwrap());
    }

    /// Encodes a tree with the reference encoder so `parse` can read it
    /// back.
    fn to_reference_json(value: &Value) -> SerdeValue {
        match value {
            Value::Object(map) => SerdeValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), to_reference_json(v)))
                    .collect(),
            ),
            Value::Array(items) => SerdeValue::Array(items.iter().map(to_reference_json).collect()),
            Value::String(text) => SerdeValue::String(text.clone()),
            Value::Boolean(b) => SerdeValue::Bool(*b),
        }
    }

    #[test]
    fn test_reference_encoder_round_trip() {
        // Quotes and backslashes survive the encode/decode cycle; the
        // generic unescape turns `\"` back into `"` and `\\` into `\`.
        let original = object(vec![
            ("name", s("Babbage")),
            ("admin", Value::Boolean(true)),
            ("tags", Value::Array(vec![s("engine"), s("analytical")])),
            ("quote", s(r#"x"y\z"#)),
            ("extra", object(vec![("empty", Value::Array(vec![]))])),
        ]);

        let text = serde_json::to_string(&to_reference_json(&original)).unwrap();
        assert_eq!(parse(&text).unwrap(), original);
    }

    #[test]
    fn test_reference_encoder_round_trip_arrays() {
        let original = Value::Array(vec![
            Value::Boolean(false),
            Value::Array(vec![]),
            object(vec![("k", s("v"))]),
            s(""),
        ]);

        let text = serde_json::to_string(&to_reference_json(&original)).unwrap();
        assert_eq!(parse(&text).unwrap(), original);
    }
}

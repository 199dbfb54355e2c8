//! Contains the `Value` enum, the in-memory tree produced by the parser.

use indexmap::IndexMap;

/// The result of a successful parse: a tree of objects, arrays, strings
/// and booleans.
///
/// There is deliberately no number or null variant. Input containing
/// either fails during lexing instead of being coerced, so a `Value` can
/// only ever hold the four supported shapes. The tree is built once per
/// parse and never mutated afterwards.
///
/// Object equality ignores key order (two objects are equal when they
/// hold the same key/value pairs); array equality is order-sensitive.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// An insertion-ordered string-to-value mapping.
    ///
    /// A repeated key keeps the value of its last occurrence, in the
    /// position of that last occurrence.
    Object(IndexMap<String, Value>),
    /// An ordered, possibly empty sequence of values.
    Array(Vec<Value>),
    /// A decoded (unescaped) string.
    String(String),
    /// A `true` or `false` literal.
    Boolean(bool),
}

impl Value {
    /// Returns true if this is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true if this is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns a reference to the map if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns a reference to the elements if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns a reference to the text if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this is a Boolean, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Gets a member from an object by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Gets an element from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }
}

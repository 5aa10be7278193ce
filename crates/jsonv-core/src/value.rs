//! The JSON value model — a closed tagged union over five kinds plus the
//! `Array` and `Object` container wrappers.
//!
//! A [`Value`] owns its payload outright; composites recursively own their
//! children, so the whole structure is a strict tree. References handed out
//! by `at`/`entry` borrow from the parent, which means the borrow checker
//! (rather than documentation) rules out use-after-resize.
//!
//! Strings are validated eagerly: the wire format has no escape mechanism,
//! so a payload containing `\n`, `\r`, or `\\` is rejected at construction
//! with [`JsonError::InvalidCharacter`] instead of being silently mangled
//! at serialization time.

use std::collections::BTreeMap;

use crate::error::{JsonError, Result};
use crate::{generator, parser};

/// Which of the five JSON kinds a [`Value`] currently holds.
///
/// Both numeric representations (integer and double) report [`Kind::Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Number,
    String,
    Array,
    Object,
}

/// A JSON number, stored as either a 32-bit integer or a double.
///
/// The two representations are mutually exclusive, not two views of one
/// number: `Number::Int(1) != Number::Double(1.0)`. The distinction survives
/// a serialize/parse round trip (integers render without a decimal point,
/// doubles always with one).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i32),
    Double(f64),
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Double(n)
    }
}

/// Reject characters the format cannot represent. The grammar has no escape
/// sequences, so these would break the serialize/parse round trip.
pub(crate) fn check_string(s: &str) -> Result<()> {
    for ch in s.chars() {
        if matches!(ch, '\n' | '\r' | '\\') {
            return Err(JsonError::InvalidCharacter(ch));
        }
    }
    Ok(())
}

/// A JSON value: the closed tagged union at the heart of the library.
///
/// Default-constructed values are `Null`. Copies are deep; the new tree owns
/// independent storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Number(Number),
    String(String),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Creates a null value.
    pub fn null() -> Value {
        Value::Null
    }

    /// Creates a number value from an `i32` or an `f64`.
    pub fn number(n: impl Into<Number>) -> Value {
        Value::Number(n.into())
    }

    /// Creates a string value, validating that the payload contains no
    /// forbidden characters (`\n`, `\r`, `\\`).
    pub fn string(s: impl Into<String>) -> Result<Value> {
        let s = s.into();
        check_string(&s)?;
        Ok(Value::String(s))
    }

    /// Creates an empty array value.
    pub fn array() -> Value {
        Value::Array(Array::new())
    }

    /// Creates an array value with `len` null elements.
    pub fn array_with_len(len: usize) -> Value {
        Value::Array(Array::with_len(len))
    }

    /// Creates an empty object value.
    pub fn object() -> Value {
        Value::Object(Object::new())
    }

    /// Parses JSON text into a value. A leading UTF-8 BOM is tolerated.
    pub fn parse(text: &str) -> Result<Value> {
        parser::parse(text)
    }

    /// Serializes this value to JSON text with depth-proportional
    /// indentation. Fails only for trees the format cannot represent
    /// (non-finite doubles, forbidden characters that bypassed validation).
    pub fn serialize(&self) -> Result<String> {
        generator::serialize(self)
    }

    /// The kind of value currently held.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    pub fn is_number(&self) -> bool {
        self.kind() == Kind::Number
    }

    /// `true` iff this is a number stored as an integer. An integer-stored
    /// number is *not* `is_double`, and vice versa.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Number(Number::Int(_)))
    }

    /// `true` iff this is a number stored as a double.
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Number(Number::Double(_)))
    }

    pub fn is_string(&self) -> bool {
        self.kind() == Kind::String
    }

    pub fn is_array(&self) -> bool {
        self.kind() == Kind::Array
    }

    pub fn is_object(&self) -> bool {
        self.kind() == Kind::Object
    }

    /// Number of children for composites, `0` for every other kind.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            Value::Object(obj) => obj.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` iff this is an object and `key` is present. Never fails.
    pub fn has_field(&self, key: &str) -> bool {
        match self {
            Value::Object(obj) => obj.contains_key(key),
            _ => false,
        }
    }

    /// Returns the number as a double. Integer-stored numbers widen losslessly.
    pub fn as_double(&self) -> Result<f64> {
        match self {
            Value::Number(Number::Double(d)) => Ok(*d),
            Value::Number(Number::Int(i)) => Ok(f64::from(*i)),
            other => Err(mismatch(Kind::Number, other)),
        }
    }

    /// Returns the number as an integer. Double-stored numbers truncate.
    pub fn as_integer(&self) -> Result<i32> {
        match self {
            Value::Number(Number::Int(i)) => Ok(*i),
            Value::Number(Number::Double(d)) => Ok(*d as i32),
            other => Err(mismatch(Kind::Number, other)),
        }
    }

    pub fn as_string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(mismatch(Kind::String, other)),
        }
    }

    pub fn as_array(&self) -> Result<&Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(mismatch(Kind::Array, other)),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(mismatch(Kind::Array, other)),
        }
    }

    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(mismatch(Kind::Object, other)),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(mismatch(Kind::Object, other)),
        }
    }

    /// Bounds-checked array element access.
    pub fn at(&self, index: usize) -> Result<&Value> {
        self.as_array()?.at(index)
    }

    /// Bounds-checked mutable array element access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        self.as_array_mut()?.at_mut(index)
    }

    /// Key-checked object member access. Never creates missing keys.
    pub fn at_key(&self, key: &str) -> Result<&Value> {
        self.as_object()?.at(key)
    }

    /// Key-checked mutable object member access. Never creates missing keys.
    pub fn at_key_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.as_object_mut()?.at_mut(key)
    }

    /// Object-only insert-or-get: returns a mutable reference to the member
    /// under `key`, inserting a `Null` entry if absent. Fails on non-objects
    /// and on keys containing forbidden characters.
    pub fn entry(&mut self, key: &str) -> Result<&mut Value> {
        self.as_object_mut()?.entry(key)
    }
}

fn mismatch(expected: Kind, actual: &Value) -> JsonError {
    JsonError::TypeMismatch {
        expected,
        actual: actual.kind(),
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::Int(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::Double(n))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

/// An ordered, index-addressable sequence of values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    elements: Vec<Value>,
}

impl Array {
    /// Creates an empty array.
    pub fn new() -> Array {
        Array::default()
    }

    /// Creates an array of `len` null values.
    pub fn with_len(len: usize) -> Array {
        Array {
            elements: vec![Value::Null; len],
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Bounds-checked element access.
    pub fn at(&self, index: usize) -> Result<&Value> {
        self.elements
            .get(index)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Bounds-checked mutable element access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let len = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or(JsonError::IndexOutOfBounds { index, len })
    }

    /// Appends a value at the end.
    pub fn push(&mut self, value: Value) {
        self.elements.push(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.elements.iter_mut()
    }

    fn out_of_bounds(&self, index: usize) -> JsonError {
        JsonError::IndexOutOfBounds {
            index,
            len: self.elements.len(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Array {
            elements: iter.into_iter().collect(),
        }
    }
}

/// A mapping from string key to value. Keys are unique; iteration order is
/// the map's order (lexicographic by key), not insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    members: BTreeMap<String, Value>,
}

impl Object {
    /// Creates an empty object.
    pub fn new() -> Object {
        Object::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    /// Non-mutating lookup. Fails with `KeyNotFound` if the key is absent.
    pub fn at(&self, key: &str) -> Result<&Value> {
        self.members
            .get(key)
            .ok_or_else(|| JsonError::KeyNotFound(key.to_string()))
    }

    /// Mutating lookup. Fails with `KeyNotFound` if the key is absent.
    pub fn at_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.members
            .get_mut(key)
            .ok_or_else(|| JsonError::KeyNotFound(key.to_string()))
    }

    /// Insert-or-get: returns a mutable reference to the member under `key`,
    /// inserting a `Null` entry first if absent. The key is validated for
    /// forbidden characters.
    pub fn entry(&mut self, key: &str) -> Result<&mut Value> {
        check_string(key)?;
        Ok(self
            .members
            .entry(key.to_string())
            .or_insert(Value::Null))
    }

    /// Inserts `value` under `key`, replacing any previous member
    /// (last-write-wins). The key is validated for forbidden characters.
    pub fn insert(&mut self, key: &str, value: Value) -> Result<()> {
        check_string(key)?;
        self.members.insert(key.to_string(), value);
        Ok(())
    }

    /// Iterates members in lexicographic key order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Value> {
        self.members.iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

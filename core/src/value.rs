//! Concrete values

use crate::error::Error;
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use json::JsonValue;
use std::borrow::Cow;
use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

/// The backing storage of an object value.
///
/// Keys are kept in insertion order so that objects round-trip through JSON
/// without shuffling their members.
pub type ObjectMap = IndexMap<String, Value, FnvBuildHasher>;

/// A fully-known value.
///
/// Props handed to a resolver are themselves a `Value`, usually an `Object`.
/// Arrays and objects are shared handles: cloning one yields the same
/// collection, and equality between them is identity, never structure.
#[derive(Clone, Debug)]
pub enum Value {
    /// The value is absent, e.g. a missing key or path.
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Arc<Vec<Value>>),
    Object(Arc<ObjectMap>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

impl Value {
    /// Construct a new array value.
    ///
    /// Every call produces a distinct array, even for identical contents.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }

    /// Construct a new object value.
    pub fn object(members: ObjectMap) -> Self {
        Value::Object(Arc::new(members))
    }

    /// Parse a set of props from JSON text.
    ///
    /// The top level of the document must be a JSON object.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let parsed = json::parse(text)?;

        if !parsed.is_object() {
            return Err(Error::NotAnObject);
        }

        Ok(parsed.into())
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Determine if this value counts as "true" when used as a condition.
    ///
    /// The falsy values are `undefined`, `null`, `false`, `0`, `-0`, `NaN`,
    /// and the empty string. Every array and object is truthy, including empty
    /// ones.
    pub fn coerce_to_boolean(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Produce the text this value contributes to a declaration or join.
    pub fn coerce_to_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_string(*n),
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    item => item.coerce_to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }

    /// Produce the key this value selects when used to index a mapping.
    pub fn to_property_key(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.coerce_to_string()),
        }
    }

    /// Look up a single member of this value.
    ///
    /// Objects are indexed by key. Arrays and strings accept an integer index
    /// or `length`; string indices count UTF-16 code units. Any other lookup,
    /// including every lookup on a primitive, yields `Undefined`.
    pub fn get(&self, key: &str) -> Value {
        match self {
            Value::Object(members) => members.get(key).cloned().unwrap_or_default(),
            Value::Array(items) => {
                if key == "length" {
                    return Value::Number(items.len() as f64);
                }

                index_of(key)
                    .and_then(|i| items.get(i))
                    .cloned()
                    .unwrap_or_default()
            }
            Value::String(s) => {
                if key == "length" {
                    return Value::Number(s.encode_utf16().count() as f64);
                }

                index_of(key)
                    .and_then(|i| s.encode_utf16().nth(i))
                    .map(|unit| Value::String(String::from_utf16_lossy(&[unit])))
                    .unwrap_or_default()
            }
            _ => Value::Undefined,
        }
    }
}

/// Parse a canonical array index: digits only, no leading zeros.
fn index_of(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if key.len() > 1 && key.starts_with('0') {
        return None;
    }

    key.parse().ok()
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        // Also covers negative zero.
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Strict equality.
///
/// Primitives compare by value (so `NaN` is unequal to itself) while arrays
/// and objects compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.coerce_to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<ObjectMap> for Value {
    fn from(members: ObjectMap) -> Self {
        Value::object(members)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::object(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Boolean(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n.into()),
            JsonValue::Short(s) => Value::String(s.as_str().to_string()),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => {
                Value::array(items.into_iter().map(Value::from).collect())
            }
            JsonValue::Object(members) => members
                .iter()
                .map(|(key, member)| (key, Value::from(member.clone())))
                .collect(),
        }
    }
}

/// Convert back to JSON. `Undefined` has no JSON form and becomes `null`.
impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Undefined | Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Boolean(*b),
            Value::Number(n) => JsonValue::from(*n),
            Value::String(s) => JsonValue::from(s.as_str()),
            Value::Array(items) => JsonValue::Array(items.iter().map(JsonValue::from).collect()),
            Value::Object(members) => {
                let mut object = json::object::Object::with_capacity(members.len());
                for (key, member) in members.iter() {
                    object.insert(key, member.into());
                }
                JsonValue::Object(object)
            }
        }
    }
}

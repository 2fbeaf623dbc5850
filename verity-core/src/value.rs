//! Value wrapper inspected by validation rules.
//!
//! A [`Value`] wraps arbitrary JSON-shaped data and distinguishes data that
//! is *absent* (no such field) from data that is present but `null`.
//!
//! ```
//! use serde_json::json;
//! use verity_core::{Kind, Value};
//!
//! let value = Value::new(json!({"user": {"tags": ["a", "b"]}}));
//!
//! assert_eq!(value.get("user.tags").kind(), Kind::Array);
//! assert_eq!(value.get("user.tags.1").raw(), Some(&json!("b")));
//! assert!(value.get("user.title").is_absent());
//! ```

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Path segment separator.
pub const PATH_SEPARATOR: char = '.';

/// Shape of the data held by a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Absent,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Absent => "absent",
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// Arrays are the only sequence kind.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Kind::Array)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Possibly-absent data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Value {
    raw: Option<JsonValue>,
}

impl Value {
    pub fn new(raw: JsonValue) -> Self {
        Self { raw: Some(raw) }
    }

    /// The value of a field that does not exist.
    pub fn absent() -> Self {
        Self { raw: None }
    }

    /// Wrap any serializable data, e.g. a request payload struct.
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(data).map(Self::new)
    }

    pub fn raw(&self) -> Option<&JsonValue> {
        self.raw.as_ref()
    }

    pub fn into_raw(self) -> Option<JsonValue> {
        self.raw
    }

    pub fn is_absent(&self) -> bool {
        self.raw.is_none()
    }

    pub fn kind(&self) -> Kind {
        match &self.raw {
            None => Kind::Absent,
            Some(JsonValue::Null) => Kind::Null,
            Some(JsonValue::Bool(_)) => Kind::Bool,
            Some(JsonValue::Number(_)) => Kind::Number,
            Some(JsonValue::String(_)) => Kind::String,
            Some(JsonValue::Array(_)) => Kind::Array,
            Some(JsonValue::Object(_)) => Kind::Object,
        }
    }

    /// Absent, `null`, `""`, `[]` and `{}` are empty.
    pub fn is_empty(&self) -> bool {
        match &self.raw {
            None | Some(JsonValue::Null) => true,
            Some(JsonValue::String(s)) => s.is_empty(),
            Some(JsonValue::Array(items)) => items.is_empty(),
            Some(JsonValue::Object(map)) => map.is_empty(),
            Some(JsonValue::Bool(_)) | Some(JsonValue::Number(_)) => false,
        }
    }

    /// Resolve a dotted path such as `user.title` or `items.0.name`.
    ///
    /// Object segments are keys; array segments are indices. Any segment
    /// that does not resolve yields an absent value. The empty path resolves
    /// to the value itself.
    pub fn get(&self, path: &str) -> Value {
        if path.is_empty() {
            return self.clone();
        }

        let mut current = match &self.raw {
            Some(raw) => raw,
            None => return Value::absent(),
        };

        for segment in path.split(PATH_SEPARATOR) {
            let next = match current {
                JsonValue::Object(map) => map.get(segment),
                JsonValue::Array(items) => parse_index(segment).and_then(|index| items.get(index)),
                _ => None,
            };

            current = match next {
                Some(next) => next,
                None => return Value::absent(),
            };
        }

        Value::new(current.clone())
    }
}

/// Canonical array index: ASCII digits only, no leading zero except `0`.
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => write!(f, "{}", raw),
            None => f.write_str("<absent>"),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(raw: JsonValue) -> Self {
        Self::new(raw)
    }
}

impl From<&JsonValue> for Value {
    fn from(raw: &JsonValue) -> Self {
        Self::new(raw.clone())
    }
}

impl From<Option<JsonValue>> for Value {
    fn from(raw: Option<JsonValue>) -> Self {
        Self { raw }
    }
}

impl<V: Into<JsonValue>> From<HashMap<String, V>> for Value {
    fn from(map: HashMap<String, V>) -> Self {
        Self::new(JsonValue::Object(
            map.into_iter().map(|(k, v)| (k, v.into())).collect(),
        ))
    }
}

impl<V: Into<JsonValue>> From<BTreeMap<String, V>> for Value {
    fn from(map: BTreeMap<String, V>) -> Self {
        Self::new(JsonValue::Object(
            map.into_iter().map(|(k, v)| (k, v.into())).collect(),
        ))
    }
}

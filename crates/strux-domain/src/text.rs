use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use strux_core::{Hashable, HashingError, JsonSerializable, Value, ValueKind};

use crate::StruxError;

/// Texto no vacío: cualquier string Unicode excepto `""`.
///
/// Hashea igual que el string crudo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Text(String);

impl Text {
    pub fn new(value: impl Into<String>) -> Result<Self, StruxError> {
        let value = value.into();
        if value.is_empty() {
            return Err(StruxError::ValidationError("Text value cannot be empty".to_string()));
        }
        Ok(Text(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Número de caracteres (no bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    // siempre false: invariante del tipo
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Hashable for Text {
    fn kind(&self) -> ValueKind {
        ValueKind::Text
    }
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        Ok(JsonValue::String(self.0.clone()))
    }
}

impl JsonSerializable for Text {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.0.clone())
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Text {
    type Err = StruxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Text::new(s)
    }
}

impl TryFrom<String> for Text {
    type Error = StruxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Text::new(value)
    }
}

impl TryFrom<&str> for Text {
    type Error = StruxError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Text::new(value)
    }
}

impl From<Text> for String {
    fn from(t: Text) -> Self {
        t.0
    }
}

impl From<Text> for Value {
    fn from(t: Text) -> Self {
        Value::structure(t)
    }
}

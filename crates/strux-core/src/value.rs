//! `Value`: valor dinámico del dominio. Cubre los primitivos JSON y cualquier
//! `Structure` incrustada, de modo que registros y mappings heterogéneos
//! (p. ej. claves `"foo"` y `100` en el mismo mapping) tengan un tipo común.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};

use crate::equality::equals;
use crate::errors::HashingError;
use crate::hashable::{Hashable, JsonSerializable, Structure, ValueKind};
use crate::hashing::{member_view, normalize_number, number_from_f64, DigestCell};

#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
    Structure(Arc<dyn Structure>),
}

impl Value {
    pub fn structure<S: Structure>(s: S) -> Self {
        Value::Structure(Arc::new(s))
    }

    /// Número desde un `f64`; NaN e infinitos no pertenecen al dominio.
    pub fn from_f64(f: f64) -> Result<Self, HashingError> {
        number_from_f64(f).map(Value::Number)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Estructura incrustada como tipo concreto.
    pub fn downcast_ref<S: Structure>(&self) -> Option<&S> {
        match self {
            Value::Structure(s) => (**s).as_any().downcast_ref::<S>(),
            _ => None,
        }
    }
}

impl Hashable for Value {
    fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Structure(s) => s.kind(),
        }
    }

    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        match self {
            Value::Null => Ok(JsonValue::Null),
            Value::Bool(b) => Ok(JsonValue::Bool(*b)),
            Value::Number(n) => Ok(JsonValue::Number(normalize_number(n))),
            Value::String(s) => Ok(JsonValue::String(s.clone())),
            Value::Array(items) => items.iter().map(member_view).collect::<Result<Vec<_>, _>>().map(JsonValue::Array),
            Value::Object(map) => {
                let mut view = serde_json::Map::with_capacity(map.len());
                for (k, v) in map {
                    view.insert(k.clone(), member_view(v)?);
                }
                Ok(JsonValue::Object(view))
            }
            // transparente: una estructura envuelta hashea igual que sin envolver
            Value::Structure(s) => s.digest_view(),
        }
    }

    fn digest_cell(&self) -> Option<&DigestCell> {
        match self {
            Value::Structure(s) => s.digest_cell(),
            _ => None,
        }
    }
}

impl JsonSerializable for Value {
    fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(n) => JsonValue::Number(n.clone()),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Array(items) => JsonValue::Array(items.iter().map(JsonSerializable::to_json).collect()),
            Value::Object(map) => JsonValue::Object(map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect()),
            Value::Structure(s) => s.to_json(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! value_from_integer {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self { Value::Number(Number::from(n)) }
        }
    )*};
}

value_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl From<Arc<dyn Structure>> for Value {
    fn from(s: Arc<dyn Structure>) -> Self {
        Value::Structure(s)
    }
}

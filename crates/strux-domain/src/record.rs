//! Registro: conjunto no vacío y ordenado de propiedades con nombre
//! simbólico y valores heterogéneos (`Value`).

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use strux_core::{equals, DigestCell, Hashable, HashingError, JsonSerializable, Value, ValueKind};

use crate::symbol::Validation;
use crate::{Dictionary, StruxError};

#[derive(Clone)]
pub struct Record {
    inner: Arc<RecordInner>,
}

struct RecordInner {
    properties: IndexMap<String, Value>,
    cache: DigestCell,
}

impl Record {
    /// # Errores
    /// `StruxError::ValidationError` si no hay propiedades o, con validación
    /// estricta, si algún nombre no es un símbolo.
    pub fn new<I, K, V>(properties: I) -> Result<Self, StruxError>
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<Value>
    {
        Self::new_with(properties, Validation::from_config())
    }

    pub fn new_with<I, K, V>(properties: I, validation: Validation) -> Result<Self, StruxError>
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<Value>
    {
        let properties: IndexMap<String, Value> = properties.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        if properties.is_empty() {
            return Err(StruxError::ValidationError("Record cannot be empty".to_string()));
        }
        validation.check_keys(properties.keys())?;
        Ok(Self::from_validated(properties))
    }

    /// Registro a partir de un objeto JSON, en el orden de sus claves.
    pub fn from_json_object(object: serde_json::Map<String, JsonValue>) -> Result<Self, StruxError> {
        Self::new(object.into_iter().map(|(k, v)| (k, Value::from(v))))
    }

    fn from_validated(properties: IndexMap<String, Value>) -> Self {
        Record { inner: Arc::new(RecordInner { properties, cache: DigestCell::new() }) }
    }

    pub fn size(&self) -> usize {
        self.inner.properties.len()
    }

    pub fn has(&self, name: &str) -> bool {
        self.inner.properties.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&Value, StruxError> {
        self.inner
            .properties
            .get(name)
            .ok_or_else(|| StruxError::KeyError(format!("No such property '{name}'")))
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.inner.properties.iter()
    }

    /// El registro visto como colección homogénea de `Value`.
    pub fn entries(&self) -> Dictionary<Value> {
        Dictionary::from_validated(self.inner.properties.clone())
    }

    pub fn map_to_object<F>(&self, mut f: F) -> IndexMap<String, Value>
        where F: FnMut(&Value, &str) -> Value
    {
        self.iter().map(|(k, v)| (k.clone(), f(v, k.as_str()))).collect()
    }

    pub fn map<F>(&self, f: F) -> Record
        where F: FnMut(&Value, &str) -> Value
    {
        Record::from_validated(self.map_to_object(f))
    }

    pub fn is_digest_cached(&self) -> bool {
        self.inner.cache.is_cached()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Record").field(&self.inner.properties).finish()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Hashable for Record {
    fn kind(&self) -> ValueKind {
        ValueKind::Record
    }

    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        let mut view = serde_json::Map::with_capacity(self.size());
        for (k, v) in self.iter() {
            view.insert(k.clone(), JsonValue::String(v.digest()?.into()));
        }
        Ok(JsonValue::Object(view))
    }

    fn digest_cell(&self) -> Option<&DigestCell> {
        Some(&self.inner.cache)
    }
}

impl JsonSerializable for Record {
    fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.size()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::structure(r)
    }
}

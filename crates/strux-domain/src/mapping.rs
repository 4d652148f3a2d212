//! Mapping: colección inmutable, no vacía y ordenada de pares clave → valor
//! donde la clave puede ser cualquier valor `Hashable`.
//!
//! Internamente indexado por el digest de la clave: la búsqueda es O(1) y la
//! igualdad de claves es por valor, no por identidad. Dos entradas con el
//! mismo digest colapsan en una sola: conserva la posición de la primera
//! aparición con la clave y el valor de la última.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use log::debug;
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use strux_core::{equals, Digest, DigestCell, Hashable, HashingError, JsonSerializable, Structure, Value, ValueKind};

use crate::StruxError;

pub struct Mapping<K, V> {
    inner: Arc<MappingInner<K, V>>,
}

struct MappingInner<K, V> {
    entries: IndexMap<Digest, (K, V)>,
    cache: DigestCell,
}

impl<K: Hashable, V> Mapping<K, V> {
    /// Crea un mapping desde pares ordenados o cualquier fuente asociativa
    /// iterable (p. ej. un `IndexMap`), preservando su orden.
    ///
    /// # Errores
    /// - `StruxError::ValidationError` si no hay entradas.
    /// - `StruxError::HashingError` si alguna clave no se puede hashear.
    pub fn new<I>(entries: I) -> Result<Self, StruxError>
        where I: IntoIterator<Item = (K, V)>
    {
        let mut indexed = IndexMap::new();
        for (key, value) in entries {
            if indexed.insert(key.digest()?, (key, value)).is_some() {
                debug!("clave repetida en Mapping: se conserva la última entrada");
            }
        }
        if indexed.is_empty() {
            return Err(StruxError::ValidationError("Mapping cannot be empty".to_string()));
        }
        Ok(Self::from_indexed(indexed))
    }
}

impl<K, V> Mapping<K, V> {
    fn from_indexed(entries: IndexMap<Digest, (K, V)>) -> Self {
        Mapping { inner: Arc::new(MappingInner { entries, cache: DigestCell::new() }) }
    }

    pub fn size(&self) -> usize {
        self.inner.entries.len()
    }

    /// Una clave que no se puede hashear es un error, igual que en `get`.
    pub fn has<Q: Hashable + ?Sized>(&self, key: &Q) -> Result<bool, StruxError> {
        let d = key.digest()?;
        Ok(self.inner.entries.contains_key(&d))
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V, StruxError>
        where Q: Hashable + JsonSerializable + ?Sized
    {
        let d = key.digest()?;
        self.inner.entries.get(&d).map(|(_, v)| v).ok_or_else(|| no_such_entry(key))
    }

    /// Iteración perezosa en orden de inserción; cada llamada empieza de nuevo.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.inner.entries.values() }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn map_to_vec<B, F>(&self, mut f: F) -> Vec<B>
        where F: FnMut(&V, &K) -> B
    {
        self.iter().map(|(k, v)| f(v, k)).collect()
    }

    pub fn map_to_string<B, F>(&self, separator: &str, f: F) -> String
        where F: FnMut(&V, &K) -> B,
              B: fmt::Display
    {
        self.map_to_vec(f).iter().map(ToString::to_string).collect::<Vec<_>>().join(separator)
    }

    pub fn is_digest_cached(&self) -> bool {
        self.inner.cache.is_cached()
    }
}

impl<K: Clone, V: Clone> Mapping<K, V> {
    pub fn entries_as_vec(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Reemplaza el valor de una clave existente y devuelve un mapping nuevo;
    /// el resto de entradas y su orden no cambian.
    ///
    /// Solo actualiza: una clave ausente es `StruxError::KeyError`, no una
    /// inserción.
    pub fn set(&self, key: K, value: V) -> Result<Self, StruxError>
        where K: Hashable + JsonSerializable
    {
        let d = key.digest()?;
        if !self.inner.entries.contains_key(&d) {
            return Err(no_such_entry(&key));
        }
        let mut entries = self.inner.entries.clone();
        entries.insert(d, (key, value));
        Ok(Self::from_indexed(entries))
    }
}

impl<K: Clone, V> Mapping<K, V> {
    /// Aplica `f(valor, clave)` en orden; las claves (y sus digests) no cambian.
    pub fn map<B, F>(&self, mut f: F) -> Mapping<K, B>
        where F: FnMut(&V, &K) -> B
    {
        Mapping::from_indexed(self.inner.entries.iter().map(|(d, (k, v))| (d.clone(), (k.clone(), f(v, k)))).collect())
    }

    pub fn try_map<B, E, F>(&self, mut f: F) -> Result<Mapping<K, B>, E>
        where F: FnMut(&V, &K) -> Result<B, E>
    {
        let entries = self.inner
                          .entries
                          .iter()
                          .map(|(d, (k, v))| f(v, k).map(|b| (d.clone(), (k.clone(), b))))
                          .collect::<Result<IndexMap<_, _>, E>>()?;
        Ok(Mapping::from_indexed(entries))
    }
}

impl Mapping<Value, Value> {
    /// Mapping desde JSON: un objeto (claves string, en orden) o un array de
    /// pares `[clave, valor]`.
    pub fn from_json(json: JsonValue) -> Result<Self, StruxError> {
        match json {
            JsonValue::Object(map) => Self::new(map.into_iter().map(|(k, v)| (Value::String(k), Value::from(v)))),
            JsonValue::Array(items) => {
                let mut pairs = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        JsonValue::Array(pair) if pair.len() == 2 => {
                            let mut it = pair.into_iter();
                            if let (Some(k), Some(v)) = (it.next(), it.next()) {
                                pairs.push((Value::from(k), Value::from(v)));
                            }
                        }
                        other => {
                            return Err(StruxError::ValidationError(format!("Mapping entry must be a [key, value] pair, given {other}")))
                        }
                    }
                }
                Self::new(pairs)
            }
            other => Err(StruxError::ValidationError(format!("Mapping requires an object or an array of pairs, given {other}"))),
        }
    }
}

fn no_such_entry<Q: JsonSerializable + ?Sized>(key: &Q) -> StruxError {
    StruxError::KeyError(format!("No such entry '{}'", key.to_json()))
}

impl<K, V> Clone for Mapping<K, V> {
    fn clone(&self) -> Self {
        Mapping { inner: Arc::clone(&self.inner) }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Mapping<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterador sobre `(clave, valor)` en orden de inserción.
pub struct Iter<'a, K, V> {
    inner: indexmap::map::Values<'a, Digest, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a Mapping<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hashable, V: Hashable> Hashable for Mapping<K, V> {
    fn kind(&self) -> ValueKind {
        ValueKind::Mapping
    }

    /// Secuencia de pares `[digest clave, digest valor]` en orden de entrada.
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        self.inner
            .entries
            .iter()
            .map(|(kd, (_, v))| -> Result<JsonValue, HashingError> {
                Ok(JsonValue::Array(vec![JsonValue::String(kd.to_string()), JsonValue::String(v.digest()?.into())]))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array)
    }

    fn digest_cell(&self) -> Option<&DigestCell> {
        Some(&self.inner.cache)
    }
}

/// Array de pares `[clave, valor]`: las claves no son necesariamente strings
/// y el orden se conserva siempre.
impl<K: JsonSerializable, V: JsonSerializable> JsonSerializable for Mapping<K, V> {
    fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(|(k, v)| JsonValue::Array(vec![k.to_json(), v.to_json()])).collect())
    }
}

impl<K: JsonSerializable, V: JsonSerializable> Serialize for Mapping<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(k, v)| (k.to_json(), v.to_json())))
    }
}

impl<K: Hashable, V: Hashable> PartialEq for Mapping<K, V> {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl<K, V> From<Mapping<K, V>> for Value where Mapping<K, V>: Structure
{
    fn from(m: Mapping<K, V>) -> Self {
        Value::structure(m)
    }
}

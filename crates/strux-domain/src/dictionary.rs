//! Diccionario: colección inmutable, no vacía y ordenada de pares
//! símbolo → valor, con valores de un mismo tipo `A`.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use strux_core::{equals, DigestCell, Hashable, HashingError, JsonSerializable, Structure, Value, ValueKind};

use crate::symbol::Validation;
use crate::StruxError;

/// Los clones comparten el estado (y su digest cacheado); `map` produce
/// siempre una instancia nueva.
pub struct Dictionary<A> {
    inner: Arc<DictionaryInner<A>>,
}

struct DictionaryInner<A> {
    entries: IndexMap<String, A>,
    cache: DigestCell,
}

impl<A> Dictionary<A> {
    /// Crea un diccionario a partir de pares ordenados (o de cualquier fuente
    /// asociativa iterable). Claves repetidas: gana el último valor, en la
    /// posición de la primera aparición.
    ///
    /// # Errores
    /// `StruxError::ValidationError` si no hay entradas o, con validación
    /// estricta en la configuración, si alguna clave no es un símbolo.
    pub fn new<I, K>(entries: I) -> Result<Self, StruxError>
        where I: IntoIterator<Item = (K, A)>,
              K: Into<String>
    {
        Self::new_with(entries, Validation::from_config())
    }

    pub fn new_with<I, K>(entries: I, validation: Validation) -> Result<Self, StruxError>
        where I: IntoIterator<Item = (K, A)>,
              K: Into<String>
    {
        let entries: IndexMap<String, A> = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        if entries.is_empty() {
            return Err(StruxError::ValidationError("Dictionary cannot be empty".to_string()));
        }
        validation.check_keys(entries.keys())?;
        Ok(Self::from_validated(entries))
    }

    // Entradas ya validadas (no vacías, claves comprobadas).
    pub(crate) fn from_validated(entries: IndexMap<String, A>) -> Self {
        Dictionary { inner: Arc::new(DictionaryInner { entries, cache: DigestCell::new() }) }
    }

    pub fn size(&self) -> usize {
        self.inner.entries.len()
    }

    pub fn has(&self, key: &str) -> bool {
        self.inner.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Result<&A, StruxError> {
        self.inner
            .entries
            .get(key)
            .ok_or_else(|| StruxError::KeyError(format!("No such entry '{key}'")))
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, A> {
        self.inner.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, A> {
        self.inner.entries.values()
    }

    /// Aplica `f(valor, clave)` a cada entrada, conservando claves y orden.
    pub fn map<B, F>(&self, mut f: F) -> Dictionary<B>
        where F: FnMut(&A, &str) -> B
    {
        Dictionary::from_validated(self.iter().map(|(k, v)| (k.clone(), f(v, k.as_str()))).collect())
    }

    /// Variante falible de `map`: el primer error de `f` aborta.
    pub fn try_map<B, E, F>(&self, mut f: F) -> Result<Dictionary<B>, E>
        where F: FnMut(&A, &str) -> Result<B, E>
    {
        let entries = self.iter().map(|(k, v)| f(v, k.as_str()).map(|b| (k.clone(), b))).collect::<Result<IndexMap<_, _>, E>>()?;
        Ok(Dictionary::from_validated(entries))
    }

    /// Indica si esta instancia ya tiene su digest cacheado.
    pub fn is_digest_cached(&self) -> bool {
        self.inner.cache.is_cached()
    }
}

impl<A> Clone for Dictionary<A> {
    fn clone(&self) -> Self {
        Dictionary { inner: Arc::clone(&self.inner) }
    }
}

impl<A: fmt::Debug> fmt::Debug for Dictionary<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dictionary").field(&self.inner.entries).finish()
    }
}

impl<'a, A> IntoIterator for &'a Dictionary<A> {
    type Item = (&'a String, &'a A);
    type IntoIter = indexmap::map::Iter<'a, String, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: Hashable> Hashable for Dictionary<A> {
    fn kind(&self) -> ValueKind {
        ValueKind::Dictionary
    }

    /// clave → digest del valor, en el orden original.
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

impl<A: JsonSerializable> JsonSerializable for Dictionary<A> {
    fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
    }
}

impl<A: JsonSerializable> Serialize for Dictionary<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.size()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, &v.to_json())?;
        }
        map.end()
    }
}

impl<A: Hashable> PartialEq for Dictionary<A> {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl<A> From<Dictionary<A>> for Value where Dictionary<A>: Structure
{
    fn from(d: Dictionary<A>) -> Self {
        Value::structure(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn foo_bar() -> Dictionary<i64> {
        Dictionary::new_with([("foo", 1), ("bar", 2)], Validation::strict()).unwrap()
    }

    #[test]
    fn rejects_empty() {
        let err = Dictionary::<i64>::new_with(Vec::<(String, i64)>::new(), Validation::lenient()).unwrap_err();
        assert_eq!(err, StruxError::ValidationError("Dictionary cannot be empty".into()));
    }

    #[test]
    fn strict_validation_rejects_bad_symbols() {
        assert!(Dictionary::new_with([("9lives", 1)], Validation::strict()).is_err());
        assert!(Dictionary::new_with([("9lives", 1)], Validation::lenient()).is_ok());
    }

    #[test]
    fn get_missing_key_is_key_error() {
        let d = foo_bar();
        assert_eq!(*d.get("foo").unwrap(), 1);
        assert!(matches!(d.get("baz"), Err(StruxError::KeyError(_))));
        assert!(d.has("bar") && !d.has("baz"));
    }

    #[test]
    fn duplicate_keys_keep_first_position_last_value() {
        let d = Dictionary::new_with([("a", 1), ("b", 2), ("a", 3)], Validation::lenient()).unwrap();
        assert_eq!(d.size(), 2);
        assert_eq!(d.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(*d.get("a").unwrap(), 3);
    }

    #[test]
    fn digest_view_maps_values_to_digests() {
        let d = foo_bar();
        let view = d.digest_view().unwrap();
        assert_eq!(view, json!({"foo": 1i64.digest().unwrap().as_str(), "bar": 2i64.digest().unwrap().as_str()}));
    }

    #[test]
    fn digest_is_cached_per_instance() {
        let d = foo_bar();
        assert!(!d.is_digest_cached());
        let first = d.digest().unwrap();
        assert!(d.is_digest_cached());
        // los clones comparten identidad
        assert!(d.clone().is_digest_cached());
        // otra instancia idéntica recalcula
        let other = foo_bar();
        assert!(!other.is_digest_cached());
        assert_eq!(other.digest().unwrap(), first);
    }

    #[test]
    fn try_map_propagates_errors() {
        let d = foo_bar();
        let r: Result<Dictionary<i64>, &str> = d.try_map(|v, k| if k == "bar" { Err("boom") } else { Ok(*v) });
        assert_eq!(r.unwrap_err(), "boom");
    }
}

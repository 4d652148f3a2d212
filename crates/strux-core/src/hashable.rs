//! Capacidades comunes de todos los valores: `Hashable` (digest con vista
//! propia), `JsonSerializable` (equivalente JSON) y `Structure` (la unión de
//! ambas, usable como objeto dinámico dentro de `Value`).

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::errors::HashingError;
use crate::hashing::{self, member_view, normalize_json, number_from_f64, Digest, DigestCell};

/// Tipo lógico de un valor. La igualdad exige el mismo tipo lógico además del
/// mismo digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    Unit,
    Text,
    Natural,
    Dictionary,
    Record,
    Mapping,
    /// Tipos definidos por el usuario.
    Custom(&'static str),
}

impl ValueKind {
    /// Primitivos JSON: se incrustan en las vistas de sus contenedores en vez
    /// de sustituirse por su digest.
    pub fn is_primitive(self) -> bool {
        matches!(self,
                 ValueKind::Null | ValueKind::Bool | ValueKind::Number | ValueKind::String | ValueKind::Array | ValueKind::Object)
    }
}

pub trait Hashable {
    fn kind(&self) -> ValueKind;

    /// Estructura que el motor hashea en lugar de la representación interna.
    /// Los miembros compuestos deben aparecer ya reemplazados por su digest
    /// (ver `hashing::member_view`).
    fn digest_view(&self) -> Result<JsonValue, HashingError>;

    /// Celda de caché ligada a la identidad de esta instancia. Los valores sin
    /// identidad estable (primitivos) devuelven `None` y nunca se cachean.
    fn digest_cell(&self) -> Option<&DigestCell> {
        None
    }

    fn digest(&self) -> Result<Digest, HashingError> {
        hashing::digest(self)
    }
}

pub trait JsonSerializable {
    fn to_json(&self) -> JsonValue;
}

/// Valor hashable y serializable que puede viajar como objeto dinámico.
pub trait Structure: Hashable + JsonSerializable + fmt::Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
}

impl<T> Structure for T where T: Hashable + JsonSerializable + fmt::Debug + Send + Sync + 'static
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Hashable for bool {
    fn kind(&self) -> ValueKind {
        ValueKind::Bool
    }
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        Ok(JsonValue::Bool(*self))
    }
}

impl JsonSerializable for bool {
    fn to_json(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

macro_rules! integer_hashable {
    ($($t:ty),*) => {$(
        impl Hashable for $t {
            fn kind(&self) -> ValueKind { ValueKind::Number }
            fn digest_view(&self) -> Result<JsonValue, HashingError> { Ok(JsonValue::from(*self)) }
        }

        impl JsonSerializable for $t {
            fn to_json(&self) -> JsonValue { JsonValue::from(*self) }
        }
    )*};
}

integer_hashable!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Hashable for f64 {
    fn kind(&self) -> ValueKind {
        ValueKind::Number
    }
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        number_from_f64(*self).map(JsonValue::Number)
    }
}

impl JsonSerializable for f64 {
    // NaN e infinitos no tienen representación JSON: `null`.
    fn to_json(&self) -> JsonValue {
        JsonValue::from(*self)
    }
}

impl Hashable for f32 {
    fn kind(&self) -> ValueKind {
        ValueKind::Number
    }
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        f64::from(*self).digest_view()
    }
}

impl JsonSerializable for f32 {
    fn to_json(&self) -> JsonValue {
        JsonValue::from(*self)
    }
}

impl Hashable for str {
    fn kind(&self) -> ValueKind {
        ValueKind::String
    }
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        Ok(JsonValue::String(self.to_owned()))
    }
}

impl JsonSerializable for str {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.to_owned())
    }
}

impl Hashable for String {
    fn kind(&self) -> ValueKind {
        ValueKind::String
    }
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        self.as_str().digest_view()
    }
}

impl JsonSerializable for String {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl Hashable for JsonValue {
    fn kind(&self) -> ValueKind {
        match self {
            JsonValue::Null => ValueKind::Null,
            JsonValue::Bool(_) => ValueKind::Bool,
            JsonValue::Number(_) => ValueKind::Number,
            JsonValue::String(_) => ValueKind::String,
            JsonValue::Array(_) => ValueKind::Array,
            JsonValue::Object(_) => ValueKind::Object,
        }
    }
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        Ok(normalize_json(self))
    }
}

impl JsonSerializable for JsonValue {
    fn to_json(&self) -> JsonValue {
        self.clone()
    }
}

/// `None` es un nulo explícito; la ausencia de valor se expresa con
/// `hashing::digest_opt`.
impl<T: Hashable> Hashable for Option<T> {
    fn kind(&self) -> ValueKind {
        match self {
            Some(v) => v.kind(),
            None => ValueKind::Null,
        }
    }
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        match self {
            Some(v) => v.digest_view(),
            None => Ok(JsonValue::Null),
        }
    }
    fn digest_cell(&self) -> Option<&DigestCell> {
        self.as_ref().and_then(|v| v.digest_cell())
    }
}

impl<T: JsonSerializable> JsonSerializable for Option<T> {
    fn to_json(&self) -> JsonValue {
        match self {
            Some(v) => v.to_json(),
            None => JsonValue::Null,
        }
    }
}

impl<T: Hashable> Hashable for Vec<T> {
    fn kind(&self) -> ValueKind {
        ValueKind::Array
    }
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        self.iter().map(member_view).collect::<Result<Vec<_>, _>>().map(JsonValue::Array)
    }
}

impl<T: JsonSerializable> JsonSerializable for Vec<T> {
    fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(JsonSerializable::to_json).collect())
    }
}

macro_rules! pointer_hashable {
    ($($p:ident),*) => {$(
        impl<T: Hashable + ?Sized> Hashable for $p<T> {
            fn kind(&self) -> ValueKind { (**self).kind() }
            fn digest_view(&self) -> Result<JsonValue, HashingError> { (**self).digest_view() }
            fn digest_cell(&self) -> Option<&DigestCell> { (**self).digest_cell() }
        }

        impl<T: JsonSerializable + ?Sized> JsonSerializable for $p<T> {
            fn to_json(&self) -> JsonValue { (**self).to_json() }
        }
    )*};
}

pointer_hashable!(Box, Arc);

impl<T: Hashable + ?Sized> Hashable for &T {
    fn kind(&self) -> ValueKind {
        (**self).kind()
    }
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        (**self).digest_view()
    }
    fn digest_cell(&self) -> Option<&DigestCell> {
        (**self).digest_cell()
    }
}

impl<T: JsonSerializable + ?Sized> JsonSerializable for &T {
    fn to_json(&self) -> JsonValue {
        (**self).to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_hash_like_their_json() {
        assert_eq!(42i64.digest().unwrap(), json!(42).digest().unwrap());
        assert_eq!(42u8.digest().unwrap(), json!(42).digest().unwrap());
        assert_eq!("hola".digest().unwrap(), json!("hola").digest().unwrap());
        assert_eq!(true.digest().unwrap(), json!(true).digest().unwrap());
        assert_eq!(2.0f64.digest().unwrap(), 2i32.digest().unwrap());
    }

    #[test]
    fn explicit_none_is_null() {
        let none: Option<i64> = None;
        assert_eq!(none.kind(), ValueKind::Null);
        assert_eq!(none.digest().unwrap(), JsonValue::Null.digest().unwrap());
    }

    #[test]
    fn nan_cannot_be_hashed() {
        assert!(matches!(f64::NAN.digest(), Err(HashingError::NonFiniteNumber(_))));
        assert_eq!(f64::NAN.to_json(), JsonValue::Null);
    }

    #[test]
    fn vec_keeps_order() {
        assert_ne!(vec![1, 2].digest().unwrap(), vec![2, 1].digest().unwrap());
        assert_eq!(vec![1, 2].digest().unwrap(), json!([1, 2]).digest().unwrap());
    }

    #[test]
    fn primitives_are_never_cached() {
        assert!("x".digest_cell().is_none());
        assert!(json!({"a": 1}).digest_cell().is_none());
    }
}

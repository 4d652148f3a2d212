//! El valor vacío.

use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use strux_core::{DigestCell, Hashable, HashingError, JsonSerializable, ValueKind};

// Digest compartido por todas las instancias: se calcula una sola vez.
static UNIT_DIGEST: DigestCell = DigestCell::new();

/// Todas las instancias son intercambiables. Su vista de digest es el objeto
/// vacío `{}` (distinta de `null`); su forma JSON es `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unit;

impl Unit {
    pub fn new() -> Self {
        Unit
    }
}

impl Hashable for Unit {
    fn kind(&self) -> ValueKind {
        ValueKind::Unit
    }
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        Ok(JsonValue::Object(serde_json::Map::new()))
    }
    fn digest_cell(&self) -> Option<&DigestCell> {
        Some(&UNIT_DIGEST)
    }
}

impl JsonSerializable for Unit {
    fn to_json(&self) -> JsonValue {
        JsonValue::Null
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

impl PartialEq for Unit {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Unit {}

impl From<Unit> for strux_core::Value {
    fn from(u: Unit) -> Self {
        strux_core::Value::structure(u)
    }
}

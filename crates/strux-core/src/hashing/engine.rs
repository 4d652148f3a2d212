//! Motor de digests.
//!
//! `digest(value)`:
//! 1. Si el valor tiene una `DigestCell` (valores compuestos con identidad),
//!    se consulta la caché de esa instancia.
//! 2. Si no hay digest cacheado, se pide al valor su vista de digest
//!    (`Hashable::digest_view`). La vista ya contiene los miembros anidados
//!    reemplazados por sus propios digests; el motor no vuelve a transformar
//!    la salida de la vista.
//! 3. Se hashea la forma canónica (orden preservado, ver `canonical_json`).
//!
//! El motor no inyecta ningún discriminador de tipo: si dos tipos lógicos
//! deben distinguirse con formas idénticas, lo hace su vista de digest.

use log::debug;
use serde_json::{Map, Number, Value as JsonValue};

use super::canonical_json::write_canonical_json;
use super::digest::{Digest, DigestAlgorithm};
use super::hash::DigestHasher;
use crate::config::CONFIG;
use crate::errors::HashingError;
use crate::hashable::{Hashable, ValueKind};

/// Etiqueta de un miembro compuesto reemplazado por su digest.
pub const DIGEST_TAG: &str = "$digest";
/// Etiqueta de un objeto primitivo anidado. Sin ella `{"$digest": h}` como
/// dato sería indistinguible de un compuesto anidado.
pub const OBJECT_TAG: &str = "$object";

/// Digest de contenido de cualquier valor `Hashable`.
pub fn digest<H: Hashable + ?Sized>(value: &H) -> Result<Digest, HashingError> {
    match value.digest_cell() {
        Some(cell) => cell.get_or_compute(|| compute(value)),
        None => compute(value),
    }
}

/// Como `digest`, pero `None` representa "no se suministró valor" y es un
/// error (`HashingError::MissingValue`), no un `null`.
pub fn digest_opt<H: Hashable + ?Sized>(value: Option<&H>) -> Result<Digest, HashingError> {
    match value {
        Some(v) => digest(v),
        None => Err(HashingError::MissingValue),
    }
}

fn compute<H: Hashable + ?Sized>(value: &H) -> Result<Digest, HashingError> {
    let view = value.digest_view()?;
    let d = digest_json(&view)?;
    debug!("digest calculado ({:?}): {d}", value.kind());
    Ok(d)
}

/// Hashea una vista JSON ya construida con el algoritmo configurado.
pub fn digest_json(view: &JsonValue) -> Result<Digest, HashingError> {
    digest_json_with(CONFIG.digest_algorithm, view)
}

pub fn digest_json_with(algorithm: DigestAlgorithm, view: &JsonValue) -> Result<Digest, HashingError> {
    let mut hasher = DigestHasher::new(algorithm);
    write_canonical_json(view, &mut hasher).map_err(|e| HashingError::Serialization(e.to_string()))?;
    Ok(hasher.finalize())
}

/// Vista de un miembro anidado dentro de una vista mayor: los primitivos se
/// incrustan tal cual (recursivamente), los compuestos se reemplazan por
/// `{"$digest": <hex>}` y los objetos primitivos se envuelven en
/// `{"$object": {...}}`, de modo que ningún dato pueda imitar un digest.
pub fn member_view<H: Hashable + ?Sized>(member: &H) -> Result<JsonValue, HashingError> {
    match member.kind() {
        ValueKind::Object => Ok(tagged(OBJECT_TAG, member.digest_view()?)),
        kind if kind.is_primitive() => member.digest_view(),
        _ => Ok(tagged(DIGEST_TAG, JsonValue::String(digest(member)?.into()))),
    }
}

fn tagged(tag: &str, inner: JsonValue) -> JsonValue {
    let mut map = Map::with_capacity(1);
    map.insert(tag.to_string(), inner);
    JsonValue::Object(map)
}

/// Unifica la representación numérica: un flotante finito e integral se
/// hashea igual que el entero equivalente (`5.0` ≡ `5`, `-0.0` ≡ `0`,
/// `1e19` ≡ `10000000000000000000u64`).
pub fn normalize_number(n: &Number) -> Number {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 {
                if f >= i64::MIN as f64 && f < i64::MAX as f64 {
                    return Number::from(f as i64);
                }
                if f >= 0.0 && f < u64::MAX as f64 {
                    return Number::from(f as u64);
                }
            }
        }
    }
    n.clone()
}

/// Número JSON desde un `f64`; rechaza NaN e infinitos.
pub fn number_from_f64(f: f64) -> Result<Number, HashingError> {
    Number::from_f64(f)
        .map(|n| normalize_number(&n))
        .ok_or(HashingError::NonFiniteNumber(f))
}

/// Vista de un documento JSON plano: números normalizados y objetos anidados
/// etiquetados igual que hace `member_view`.
pub fn normalize_json(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Number(n) => JsonValue::Number(normalize_number(n)),
        JsonValue::Array(items) => JsonValue::Array(items.iter().map(nested_json).collect()),
        JsonValue::Object(map) => JsonValue::Object(map.iter().map(|(k, v)| (k.clone(), nested_json(v))).collect()),
        other => other.clone(),
    }
}

fn nested_json(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(_) => tagged(OBJECT_TAG, normalize_json(value)),
        other => normalize_json(other),
    }
}

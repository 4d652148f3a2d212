//! Errores del motor de digests.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum HashingError {
    /// Se pidió el digest de "ningún valor" (argumento ausente). Distinto de
    /// hashear un `null` explícito.
    #[error("cannot hash a missing value")]
    MissingValue,
    #[error("cannot hash a non-finite number: {0}")]
    NonFiniteNumber(f64),
    /// Para implementaciones propias de `Hashable::digest_view` que no pueden
    /// construir su vista (estado interno inconsistente, miembro inválido).
    #[error("malformed digest view: {0}")]
    MalformedView(String),
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for HashingError {
    fn from(e: serde_json::Error) -> Self {
        HashingError::Serialization(e.to_string())
    }
}

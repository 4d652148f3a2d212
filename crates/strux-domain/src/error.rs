use strux_core::HashingError;
use thiserror::Error;

/// Errores del dominio de estructuras.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum StruxError {
    /// Violación de invariantes al construir (vacío, símbolo inválido,
    /// número fuera de dominio, texto vacío).
    #[error("validation error: {0}")]
    ValidationError(String),
    /// `get`/`set` con una clave inexistente.
    #[error("key error: {0}")]
    KeyError(String),
    #[error(transparent)]
    HashingError(#[from] HashingError),
}

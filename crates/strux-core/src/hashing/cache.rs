//! Caché de digest por instancia.
//!
//! Cada valor compuesto lleva su propia `DigestCell` dentro de su estado
//! compartido (`Arc`). La identidad de la caché es la identidad del objeto:
//! los clones que comparten el `Arc` ven el mismo digest y una instancia
//! estructuralmente idéntica pero construida aparte recalcula. La celda no
//! mantiene vivo al objeto y el digest se libera junto con él.
//!
//! Seguro entre hilos: si dos hilos calculan a la vez, ambos obtienen el
//! mismo valor (el cálculo es puro) y solo uno queda almacenado.

use std::fmt;

use log::trace;
use once_cell::sync::OnceCell;

use super::digest::Digest;
use crate::errors::HashingError;

#[derive(Default)]
pub struct DigestCell {
    cell: OnceCell<Digest>,
}

impl DigestCell {
    pub const fn new() -> Self {
        Self { cell: OnceCell::new() }
    }

    /// Digest ya calculado, si existe.
    pub fn get(&self) -> Option<&Digest> {
        self.cell.get()
    }

    pub fn is_cached(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Devuelve el digest cacheado o lo calcula con `compute` y lo guarda.
    /// Si `compute` falla no se almacena nada.
    pub fn get_or_compute<F>(&self, compute: F) -> Result<Digest, HashingError>
        where F: FnOnce() -> Result<Digest, HashingError>
    {
        if let Some(d) = self.cell.get() {
            trace!("digest cache hit: {d}");
            return Ok(d.clone());
        }
        self.cell.get_or_try_init(compute).cloned()
    }
}

impl fmt::Debug for DigestCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(d) => write!(f, "DigestCell({d})"),
            None => f.write_str("DigestCell(<pending>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::{hash_str, DigestAlgorithm};
    use std::cell::Cell;

    #[test]
    fn computes_once() {
        let cell = DigestCell::new();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            Ok(hash_str(DigestAlgorithm::Blake3, "x"))
        };
        let a = cell.get_or_compute(compute).unwrap();
        let b = cell.get_or_compute(|| panic!("no debe recalcular")).unwrap();
        assert_eq!(a, b);
        assert_eq!(calls.get(), 1);
        assert!(cell.is_cached());
    }

    #[test]
    fn failure_is_not_cached() {
        let cell = DigestCell::new();
        let err = cell.get_or_compute(|| Err(HashingError::MissingValue));
        assert_eq!(err, Err(HashingError::MissingValue));
        assert!(!cell.is_cached());
        assert!(cell.get_or_compute(|| Ok(hash_str(DigestAlgorithm::Blake3, "y"))).is_ok());
    }
}

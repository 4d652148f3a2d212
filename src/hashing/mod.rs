// Reexport de la implementación única ubicada en `strux-core` para evitar
// duplicar la lógica de canonicalización/digest a nivel de workspace.
pub use strux_core::hashing::*;

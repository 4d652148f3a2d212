//! Strux
//!
//! Valores inmutables con hash estructural:
//! - Expone `hashing` (motor de digests, forma canónica, caché por instancia).
//! - Expone los tipos de dominio (`Unit`, `Text`, `Natural`, `Dictionary`,
//!   `Record`, `Mapping`) y el valor dinámico `Value`.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod hashing;

pub use strux_core::{config, digest, digest_opt, equals, Digest, DigestAlgorithm, Hashable, HashingError, JsonSerializable,
                     Structure, StruxConfig, Value, ValueKind, CONFIG};
pub use strux_domain::{is_valid_symbol, Dictionary, Mapping, Natural, Record, StruxError, Text, Unit, Validation};

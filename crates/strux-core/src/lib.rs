//! strux-core: motor de digests estructurales e igualdad por contenido.
//!
//! - `hashing`: forma canónica, algoritmos de digest, caché por instancia y
//!   el motor `digest`.
//! - `hashable`: capacidades `Hashable`, `JsonSerializable`, `Structure`.
//! - `value`: valor dinámico `Value`.
//! - `equality`: igualdad = mismo tipo lógico + mismo digest.
pub mod config;
pub mod equality;
pub mod errors;
pub mod hashable;
pub mod hashing;
pub mod value;

pub use config::{StruxConfig, CONFIG};
pub use equality::equals;
pub use errors::HashingError;
pub use hashable::{Hashable, JsonSerializable, Structure, ValueKind};
pub use hashing::{digest, digest_opt, Digest, DigestAlgorithm, DigestCell};
pub use value::Value;

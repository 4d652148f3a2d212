//! Módulo de hashing estructural: canonicalización JSON, función de digest,
//! caché por instancia y el motor que los combina.

pub mod cache;
pub mod canonical_json;
pub mod digest;
pub mod engine;
pub mod hash;

pub use cache::DigestCell;
pub use canonical_json::{to_canonical_json, write_canonical_json};
pub use digest::{Digest, DigestAlgorithm};
pub use engine::{digest, digest_json, digest_json_with, digest_opt, member_view, normalize_json, normalize_number, number_from_f64, DIGEST_TAG, OBJECT_TAG};
pub use hash::{hash_str, DigestHasher};

//! Hash helpers – abstracción para permitir cambiar de algoritmo sin tocar el
//! resto del motor.

use std::io;

use sha2::{Digest as _, Sha256};

use super::digest::{Digest, DigestAlgorithm};

/// Hasher incremental sobre el algoritmo configurado. Implementa
/// `io::Write` para recibir la forma canónica en streaming.
pub enum DigestHasher {
    Blake3(Box<blake3::Hasher>),
    Sha256(Sha256),
}

impl DigestHasher {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Blake3 => DigestHasher::Blake3(Box::new(blake3::Hasher::new())),
            DigestAlgorithm::Sha256 => DigestHasher::Sha256(Sha256::new()),
        }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        match self {
            DigestHasher::Blake3(h) => {
                h.update(bytes);
            }
            DigestHasher::Sha256(h) => h.update(bytes),
        }
    }

    pub fn finalize(self) -> Digest {
        let hex = match self {
            DigestHasher::Blake3(h) => h.finalize().to_hex().to_string(),
            DigestHasher::Sha256(h) => format!("{:x}", h.finalize()),
        };
        Digest::from_hex(hex)
    }
}

impl io::Write for DigestHasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hashea un string con el algoritmo indicado y devuelve el digest hex.
pub fn hash_str(algorithm: DigestAlgorithm, input: &str) -> Digest {
    let mut h = DigestHasher::new(algorithm);
    h.update(input.as_bytes());
    h.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_algorithms_produce_hex_64() {
        for alg in [DigestAlgorithm::Blake3, DigestAlgorithm::Sha256] {
            let d = hash_str(alg, "hola");
            assert_eq!(d.as_str().len(), 64);
            assert!(d.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn algorithms_disagree() {
        assert_ne!(hash_str(DigestAlgorithm::Blake3, "x"), hash_str(DigestAlgorithm::Sha256, "x"));
    }

    #[test]
    fn sha256_known_vector() {
        let d = hash_str(DigestAlgorithm::Sha256, "abc");
        assert_eq!(d.as_str(), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    }

    #[test]
    fn streaming_matches_one_shot() {
        use std::io::Write;
        let mut h = DigestHasher::new(DigestAlgorithm::Blake3);
        h.write_all(b"ho").unwrap();
        h.write_all(b"la").unwrap();
        assert_eq!(h.finalize(), hash_str(DigestAlgorithm::Blake3, "hola"));
    }
}

//! Configuración del proceso cargada desde variables de entorno.
//! Carga `.env` una sola vez (si existe) y expone `CONFIG`, inmutable.
//!
//! Variables reconocidas:
//! - `STRUX_STRICT_VALIDATION`: habilita la validación estricta de símbolos
//!   (`1`, `true`, `yes`, `on`). Por defecto deshabilitada.
//! - `STRUX_DIGEST_ALGORITHM`: `blake3` (por defecto) o `sha256`.

use std::env;

use dotenvy::dotenv;
use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::hashing::DigestAlgorithm;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const STRICT_VALIDATION_VAR: &str = "STRUX_STRICT_VALIDATION";
pub const DIGEST_ALGORITHM_VAR: &str = "STRUX_DIGEST_ALGORITHM";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StruxConfig {
    /// Señal "validación estricta habilitada" consumida por los constructores
    /// de contenedores con claves simbólicas.
    pub strict_validation: bool,
    /// Función de digest usada por el motor.
    pub digest_algorithm: DigestAlgorithm,
}

impl Default for StruxConfig {
    fn default() -> Self {
        Self { strict_validation: false, digest_algorithm: DigestAlgorithm::Blake3 }
    }
}

impl StruxConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        let defaults = Self::default();
        let strict_validation = match env::var(STRICT_VALIDATION_VAR) {
            Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("{STRICT_VALIDATION_VAR}='{raw}' no reconocido; se usa {}", defaults.strict_validation);
                defaults.strict_validation
            }),
            Err(_) => defaults.strict_validation,
        };
        let digest_algorithm = match env::var(DIGEST_ALGORITHM_VAR) {
            Ok(raw) => raw.parse::<DigestAlgorithm>().unwrap_or_else(|_| {
                warn!("{DIGEST_ALGORITHM_VAR}='{raw}' no reconocido; se usa {}", defaults.digest_algorithm);
                defaults.digest_algorithm
            }),
            Err(_) => defaults.digest_algorithm,
        };
        let config = Self { strict_validation, digest_algorithm };
        debug!("configuración cargada: {config:?}");
        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<StruxConfig> = Lazy::new(StruxConfig::from_env);

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

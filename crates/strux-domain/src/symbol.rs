//! Símbolos: claves con sintaxis de identificador.
//!
//! Primer carácter: letra ASCII, `_` o `$`. Siguientes: letras, dígitos, `_`,
//! `$`, `.` o `-`. `$` marca uso interno y `.` sirve de espacio de nombres.

use strux_core::CONFIG;

use crate::StruxError;

pub fn is_valid_symbol(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | '-'))
}

/// Opciones de validación para constructores con claves simbólicas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validation {
    /// Con `strict`, cada clave debe ser un símbolo válido.
    pub strict: bool,
}

impl Validation {
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    pub const fn lenient() -> Self {
        Self { strict: false }
    }

    /// Lo que indique la configuración del proceso (`STRUX_STRICT_VALIDATION`).
    pub fn from_config() -> Self {
        Self { strict: CONFIG.strict_validation }
    }

    pub(crate) fn check_keys<'a, I>(self, keys: I) -> Result<(), StruxError>
        where I: IntoIterator<Item = &'a String>
    {
        if !self.strict {
            return Ok(());
        }
        for key in keys {
            if !is_valid_symbol(key) {
                return Err(StruxError::ValidationError(format!("Invalid symbol: '{key}'")));
            }
        }
        Ok(())
    }
}

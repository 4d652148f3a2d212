//! JSON canónico que preserva el orden.
//!
//! A diferencia de una canonicalización clásica, aquí NO se ordenan las claves
//! de los objetos ni los elementos de los arrays: el orden dado es parte de la
//! identidad semántica que se hashea. La forma canónica es compacta (sin
//! espacios) y los strings usan el escape de `serde_json`.

use std::io::{self, Write};

use serde_json::Value;

/// Escribe `value` en forma canónica sobre `out`.
pub fn write_canonical_json<W: Write>(value: &Value, out: &mut W) -> io::Result<()> {
    match value {
        Value::Null => out.write_all(b"null"),
        Value::Bool(true) => out.write_all(b"true"),
        Value::Bool(false) => out.write_all(b"false"),
        Value::Number(n) => write!(out, "{n}"),
        Value::String(s) => serde_json::to_writer(&mut *out, s).map_err(io::Error::from),
        Value::Array(arr) => {
            out.write_all(b"[")?;
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.write_all(b",")?;
                }
                write_canonical_json(item, out)?;
            }
            out.write_all(b"]")
        }
        Value::Object(map) => {
            out.write_all(b"{")?;
            // orden de inserción (serde_json con `preserve_order`)
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.write_all(b",")?;
                }
                serde_json::to_writer(&mut *out, k).map_err(io::Error::from)?;
                out.write_all(b":")?;
                write_canonical_json(v, out)?;
            }
            out.write_all(b"}")
        }
    }
}

/// Forma canónica como `String`; útil para depuración y tests.
pub fn to_canonical_json(value: &Value) -> String {
    let mut buf = Vec::new();
    // escribir sobre un Vec no falla
    let _ = write_canonical_json(value, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

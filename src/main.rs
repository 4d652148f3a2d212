//! CLI mínima: `strux [--value|--mapping|--dictionary|--record] [--json] [ARCHIVO]`
//!
//! Lee un documento JSON (de ARCHIVO o stdin) y escribe su digest
//! estructural. Con `--json` escribe además la forma JSON equivalente de la
//! estructura construida.

use std::io::Read;
use std::process;

use serde_json::Value as JsonValue;
use strux::{Dictionary, Digest, Hashable, JsonSerializable, Mapping, Record, StruxError, Value};

#[derive(Debug, Clone, Copy)]
enum Mode {
    Value,
    Mapping,
    Dictionary,
    Record,
}

const USAGE: &str = "uso: strux [--value|--mapping|--dictionary|--record] [--json] [ARCHIVO]";

fn main() {
    // Cargar .env si existe (STRUX_DIGEST_ALGORITHM, STRUX_STRICT_VALIDATION)
    strux::config::init_dotenv();
    let mut mode = Mode::Value;
    let mut echo = false;
    let mut path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--value" => mode = Mode::Value,
            "--mapping" => mode = Mode::Mapping,
            "--dictionary" => mode = Mode::Dictionary,
            "--record" => mode = Mode::Record,
            "--json" => echo = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            other if other.starts_with("--") => {
                eprintln!("[strux] opción desconocida: {other}\n{USAGE}");
                process::exit(2);
            }
            other => path = Some(other.to_string()),
        }
    }

    let input = match read_input(path.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[strux] no se pudo leer la entrada: {e}");
            process::exit(3);
        }
    };
    let json: JsonValue = match serde_json::from_str(&input) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("[strux] JSON inválido: {e}");
            process::exit(3);
        }
    };

    match build(mode, json) {
        Ok((digest, rendered)) => {
            println!("{digest}");
            if echo {
                println!("{rendered}");
            }
        }
        Err(e) => {
            eprintln!("[strux] {e}");
            process::exit(4);
        }
    }
}

fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn build(mode: Mode, json: JsonValue) -> Result<(Digest, JsonValue), StruxError> {
    match mode {
        Mode::Value => {
            let v = Value::from(json);
            Ok((v.digest()?, v.to_json()))
        }
        Mode::Mapping => {
            let m = Mapping::from_json(json)?;
            Ok((m.digest()?, m.to_json()))
        }
        Mode::Dictionary => {
            let d = Dictionary::new(expect_object(json)?.into_iter().map(|(k, v)| (k, Value::from(v))))?;
            Ok((d.digest()?, d.to_json()))
        }
        Mode::Record => {
            let r = Record::from_json_object(expect_object(json)?)?;
            Ok((r.digest()?, r.to_json()))
        }
    }
}

fn expect_object(json: JsonValue) -> Result<serde_json::Map<String, JsonValue>, StruxError> {
    match json {
        JsonValue::Object(map) => Ok(map),
        other => Err(StruxError::ValidationError(format!("expected a JSON object, given {other}"))),
    }
}

//! strux-domain: tipos de valor inmutables con hash estructural.
//!
//! - `Unit`, `Text`, `Natural`: envoltorios escalares con dominio validado.
//! - `Dictionary`, `Record`: colecciones ordenadas con claves simbólicas.
//! - `Mapping`: colección ordenada con claves arbitrarias comparadas por valor.
pub mod dictionary;
pub mod error;
pub mod mapping;
pub mod natural;
pub mod record;
pub mod symbol;
pub mod text;
pub mod unit;

pub use dictionary::Dictionary;
pub use error::StruxError;
pub use mapping::Mapping;
pub use natural::Natural;
pub use record::Record;
pub use symbol::{is_valid_symbol, Validation};
pub use text::Text;
pub use unit::Unit;

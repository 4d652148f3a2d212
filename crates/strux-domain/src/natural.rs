use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use strux_core::{Hashable, HashingError, JsonSerializable, Value, ValueKind};

use crate::StruxError;

/// Número natural: entero estrictamente mayor que cero. El cero se rechaza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Natural(u64);

impl Natural {
    pub fn new(value: i64) -> Result<Self, StruxError> {
        if value < 0 {
            return Err(invalid(format!("Natural must be positive, given '{value}'")));
        }
        Self::from_u64(value.unsigned_abs())
    }

    pub fn from_u64(value: u64) -> Result<Self, StruxError> {
        if value == 0 {
            return Err(invalid(format!("Natural cannot be zero, given '{value}'")));
        }
        Ok(Natural(value))
    }

    pub fn from_f64(value: f64) -> Result<Self, StruxError> {
        if !value.is_finite() {
            return Err(invalid(format!("Natural cannot be infinity or NaN, given '{value}'")));
        }
        if value.fract() != 0.0 {
            return Err(invalid(format!("Natural must be an integer, given '{value}'")));
        }
        if value < 0.0 {
            return Err(invalid(format!("Natural must be positive, given '{value}'")));
        }
        // 2^64 no cabe en u64
        if value >= u64::MAX as f64 {
            return Err(invalid(format!("Natural is out of range, given '{value}'")));
        }
        Self::from_u64(value as u64)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

fn invalid(msg: String) -> StruxError {
    StruxError::ValidationError(msg)
}

impl Hashable for Natural {
    fn kind(&self) -> ValueKind {
        ValueKind::Natural
    }
    fn digest_view(&self) -> Result<JsonValue, HashingError> {
        Ok(JsonValue::from(self.0))
    }
}

impl JsonSerializable for Natural {
    fn to_json(&self) -> JsonValue {
        JsonValue::from(self.0)
    }
}

impl Serialize for Natural {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Natural {
    type Error = StruxError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Natural::new(value)
    }
}

impl TryFrom<u64> for Natural {
    type Error = StruxError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Natural::from_u64(value)
    }
}

impl TryFrom<f64> for Natural {
    type Error = StruxError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Natural::from_f64(value)
    }
}

impl From<Natural> for u64 {
    fn from(n: Natural) -> Self {
        n.0
    }
}

impl From<Natural> for Value {
    fn from(n: Natural) -> Self {
        Value::structure(n)
    }
}

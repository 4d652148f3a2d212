//! Protocolo de igualdad: dos valores son iguales si y solo si tienen el mismo
//! tipo lógico y el mismo digest. Un valor que no se puede hashear no es igual
//! a nada.

use crate::hashable::Hashable;

pub fn equals<A, B>(a: &A, b: &B) -> bool
    where A: Hashable + ?Sized,
          B: Hashable + ?Sized
{
    if a.kind() != b.kind() {
        return false;
    }
    match (a.digest(), b.digest()) {
        (Ok(da), Ok(db)) => da == db,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::equals;
    use serde_json::json;

    #[test]
    fn same_kind_same_digest() {
        assert!(equals(&json!({"a": 1}), &json!({"a": 1})));
        assert!(equals(&1u8, &1i64));
        assert!(!equals(&json!({"a": 1}), &json!({"a": 2})));
    }

    #[test]
    fn different_kinds_never_equal() {
        assert!(!equals(&json!("1"), &json!(1)));
    }

    #[test]
    fn unhashable_values_are_not_equal() {
        assert!(!equals(&f64::NAN, &f64::NAN));
    }
}

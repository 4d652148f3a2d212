use indexmap::IndexMap;
use serde_json::json;
use strux_core::{equals, Hashable, JsonSerializable, Value};
use strux_domain::{Dictionary, Mapping, Natural, Record, StruxError, Text, Unit, Validation};

fn dict<A>(entries: Vec<(&str, A)>) -> Dictionary<A> {
    Dictionary::new_with(entries, Validation::strict()).unwrap()
}

#[test]
fn test_unit_instances_are_interchangeable() {
    assert_eq!(Unit::new(), Unit::new());
    assert!(equals(&Unit::new(), &Unit));
    assert_eq!(Unit::new().digest().unwrap(), Unit::new().digest().unwrap());
    assert!(!equals(&Unit, &Value::Null));
}

#[test]
fn test_empty_inputs_are_rejected() {
    assert!(matches!(Text::new(""), Err(StruxError::ValidationError(_))));
    assert!(matches!(Dictionary::<i64>::new_with(Vec::<(&str, i64)>::new(), Validation::strict()),
                     Err(StruxError::ValidationError(_))));
    assert!(matches!(Record::new_with(Vec::<(&str, i64)>::new(), Validation::strict()), Err(StruxError::ValidationError(_))));
    assert!(matches!(Mapping::<i64, i64>::new(Vec::new()), Err(StruxError::ValidationError(_))));
}

#[test]
fn test_natural_boundaries() {
    assert!(Natural::new(0).is_err());
    assert!(Natural::new(-1).is_err());
    assert!(Natural::from_f64(1.5).is_err());
    assert!(Natural::from_f64(f64::INFINITY).is_err());
    assert_eq!(Natural::new(1).unwrap().get(), 1);
}

#[test]
fn test_dictionary_order_sensitivity() {
    let ab = dict(vec![("a", 1), ("b", 2)]);
    let ba = dict(vec![("b", 2), ("a", 1)]);
    assert_ne!(ab.digest().unwrap(), ba.digest().unwrap());
    assert_ne!(ab, ba);
    assert_eq!(ab, dict(vec![("a", 1), ("b", 2)]));
}

#[test]
fn test_reflexivity_and_stable_digest() {
    let d = dict(vec![("x", Text::new("uno").unwrap())]);
    let m = Mapping::new([(json!({"id": "x"}), 1)]).unwrap();
    let r = Record::new_with([("n", Natural::new(2).unwrap())], Validation::strict()).unwrap();
    assert!(equals(&d, &d) && equals(&m, &m) && equals(&r, &r));
    assert_eq!(d.digest().unwrap(), d.digest().unwrap());
    assert_eq!(m.digest().unwrap(), m.digest().unwrap());
    assert_eq!(r.digest().unwrap(), r.digest().unwrap());
}

#[test]
fn test_mapping_keys_compare_by_value() {
    let m = Mapping::new([(json!({"id": "x"}), 1)]).unwrap();
    // otra instancia de la clave, mismo contenido
    assert_eq!(*m.get(&json!({"id": "x"})).unwrap(), 1);
    assert!(m.has(&json!({"id": "x"})).unwrap());
    assert!(!m.has(&json!({"id": "y"})).unwrap());
    assert!(matches!(m.get(&json!({"id": "y"})), Err(StruxError::KeyError(_))));

    // una clave `Value` con el mismo contenido JSON también coincide
    let lookup = Value::from(json!({"id": "x"}));
    assert_eq!(*m.get(&lookup).unwrap(), 1);
}

#[test]
fn test_mapping_structured_keys() {
    let k1 = Text::new("alpha").unwrap();
    let m = Mapping::new([(k1.clone(), Natural::new(1).unwrap())]).unwrap();
    assert_eq!(m.get(&Text::new("alpha").unwrap()).unwrap().get(), 1);
    // Text hashea como su string
    assert!(m.has("alpha").unwrap());
}

#[test]
fn test_mapping_unhashable_key_is_an_error() {
    let m = Mapping::new([(json!(1.5), "a")]).unwrap();
    assert!(matches!(m.has(&f64::NAN), Err(StruxError::HashingError(_))));
    assert!(matches!(m.get(&f64::NAN), Err(StruxError::HashingError(_))));
    assert!(m.has(&1.5_f64).unwrap());
}

#[test]
fn test_mapping_size_counts_distinct_key_digests() {
    let pairs = vec![(json!(1), "a"), (json!("1"), "b"), (json!(1.0), "c"), (json!([1]), "d"), (json!("1"), "e")];
    let m = Mapping::new(pairs).unwrap();
    // 1 y 1.0 colapsan; "1" se repite
    assert_eq!(m.size(), 3);
    assert_eq!(m.to_json(), json!([[1.0, "c"], ["1", "e"], [[1], "d"]]));
}

#[test]
fn test_json_round_trips() {
    let d = Dictionary::new_with(vec![("foo", Value::from(42)), ("bar", Value::from("hi"))], Validation::strict()).unwrap();
    assert_eq!(d.to_json(), json!({"foo": 42, "bar": "hi"}));
    assert_eq!(serde_json::to_value(&d).unwrap(), json!({"foo": 42, "bar": "hi"}));

    let m = Mapping::new([("foo".to_string(), 42)]).unwrap();
    assert_eq!(m.to_json(), json!([["foo", 42]]));
    assert_eq!(serde_json::to_string(&m).unwrap(), r#"[["foo",42]]"#);
}

#[test]
fn test_json_object_order_is_preserved() {
    let d = dict(vec![("zeta", 1), ("alpha", 2)]);
    assert_eq!(serde_json::to_string(&d).unwrap(), r#"{"zeta":1,"alpha":2}"#);
}

#[test]
fn test_nested_structures_serialize_recursively() {
    let inner = dict(vec![("n", Natural::new(3).unwrap())]);
    let outer = Record::new_with([("inner", Value::from(inner.clone())), ("unit", Value::from(Unit))], Validation::strict()).unwrap();
    assert_eq!(outer.to_json(), json!({"inner": {"n": 3}, "unit": null}));

    // el digest anidado captura la identidad estructural del interior
    let changed = Record::new_with([("inner", Value::from(dict(vec![("n", Natural::new(4).unwrap())]))),
                                    ("unit", Value::from(Unit))],
                                   Validation::strict()).unwrap();
    assert_ne!(outer, changed);
}

#[test]
fn test_map_identity_is_idempotent() {
    let d = dict(vec![("a", 1), ("b", 2)]);
    assert_eq!(d.map(|v, _| *v), d);

    let m = Mapping::new([(json!(100), "hello".to_string()), (json!("foo"), "bar".to_string())]).unwrap();
    assert_eq!(m.map(|v, _| v.clone()), m);

    let r = Record::new_with([("a", 1)], Validation::strict()).unwrap();
    assert_eq!(r.map(|v, _| v.clone()), r);
}

#[test]
fn test_map_does_not_touch_the_original() {
    let m = Mapping::new([("a".to_string(), 1), ("b".to_string(), 2)]).unwrap();
    let doubled = m.map(|v, _| v * 2);
    assert_eq!(doubled.values().copied().collect::<Vec<_>>(), vec![2, 4]);
    assert_eq!(m.values().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_ne!(doubled, m);
}

#[test]
fn test_mapping_constructors_agree() {
    let from_pairs = Mapping::new(vec![("foo".to_string(), 42), ("bar".to_string(), 43)]).unwrap();
    let mut source = IndexMap::new();
    source.insert("foo".to_string(), 42);
    source.insert("bar".to_string(), 43);
    let from_map = Mapping::new(source).unwrap();
    assert_eq!(from_pairs, from_map);
    assert_eq!(from_pairs.digest().unwrap(), from_map.digest().unwrap());
}

#[test]
fn test_mapping_order_and_inequality() {
    let foo_bar = Mapping::new([("foo", 42), ("bar", 43)]).unwrap();
    let bar_foo = Mapping::new([("bar", 43), ("foo", 42)]).unwrap();
    assert_ne!(foo_bar, bar_foo);
    let other_values = Mapping::new([("foo", 42), ("bar", 44)]).unwrap();
    assert_ne!(foo_bar, other_values);
}

#[test]
fn test_kinds_are_mutually_distinct() {
    let d = dict(vec![("a", Value::from(1))]);
    let r = Record::new_with([("a", 1)], Validation::strict()).unwrap();
    assert_eq!(d.digest().unwrap(), r.digest().unwrap());
    assert!(!equals(&d, &r));
    assert!(!equals(&Text::new("5").unwrap(), &"5"));
    assert!(!equals(&Natural::new(5).unwrap(), &5));
}

#[test]
fn test_dictionary_of_different_element_types_compare_by_content() {
    let ints = dict(vec![("a", 1i64)]);
    let values = dict(vec![("a", Value::from(1))]);
    assert!(equals(&ints, &values));
}

#[test]
fn test_set_replaces_in_place_and_rejects_unknown_keys() {
    let m = Mapping::new([(json!(1), "one".to_string()), (json!(2), "two".to_string())]).unwrap();
    let m2 = m.set(json!(2), "dos".to_string()).unwrap();
    assert_eq!(m2.to_json(), json!([[1, "one"], [2, "dos"]]));
    assert!(matches!(m.set(json!(3), "tres".to_string()), Err(StruxError::KeyError(_))));
}

#[test]
fn test_digest_cache_is_per_instance() {
    let m = Mapping::new([("k".to_string(), 1)]).unwrap();
    let clone = m.clone();
    assert!(!m.is_digest_cached());
    let _ = clone.digest().unwrap();
    assert!(m.is_digest_cached());
    assert!(!m.map(|v, _| *v).is_digest_cached());
}

#[test]
fn test_containers_are_shareable_across_threads() {
    let d = dict(vec![("a", Text::new("x").unwrap()), ("b", Text::new("y").unwrap())]);
    let expected = dict(vec![("a", Text::new("x").unwrap()), ("b", Text::new("y").unwrap())]).digest().unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            let d = d.clone();
            let expected = expected.clone();
            s.spawn(move || assert_eq!(d.digest().unwrap(), expected));
        }
    });
}

use hcl_emit::{value, Map, Number, RawExpression, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn deserialize_scalars() {
    let value: Value = serde_json::from_str(r#"{"a": null, "b": true, "c": 1, "d": -2, "e": 1.5, "f": "x"}"#).unwrap();

    let expected = Value::from_iter([
        ("a", Value::Null),
        ("b", Value::Bool(true)),
        ("c", Value::Number(Number::PosInt(1))),
        ("d", Value::Number(Number::NegInt(-2))),
        ("e", Value::Number(Number::Float(1.5))),
        ("f", Value::String("x".into())),
    ]);

    assert_eq!(value, expected);
}

#[test]
fn object_entry_order_is_preserved() {
    let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();

    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();

    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn tagged_map_deserializes_into_expression() {
    let value: Value =
        serde_json::from_value(json!({"kind": "expression", "hcl": "var.region"})).unwrap();

    assert_eq!(value, Value::Expression(RawExpression::new("var.region")));
}

#[test]
fn expression_serializes_as_tagged_map() {
    let value = Value::Expression(RawExpression::new("var.region"));

    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!({"kind": "expression", "hcl": "var.region"})
    );
}

#[test]
fn almost_tagged_maps_stay_objects() {
    // A third key, a non-string `hcl` or a different tag all disqualify the shape.
    for json in [
        json!({"kind": "expression", "hcl": "var.region", "extra": 1}),
        json!({"kind": "expression", "hcl": 42}),
        json!({"kind": "interpolation", "hcl": "var.region"}),
        json!({"kind": "expression"}),
    ] {
        let value: Value = serde_json::from_value(json).unwrap();
        assert!(value.is_object(), "{value:?}");
        assert!(!value.is_expression());
    }
}

#[test]
fn is_expression_predicate() {
    assert!(value::is_expression(&Value::Expression(RawExpression::new(
        "var.region"
    ))));
    assert!(value::is_expression(&Value::from_iter([
        ("kind", "expression"),
        ("hcl", "var.region"),
    ])));

    assert!(!value::is_expression(&Value::String("var.region".into())));
    assert!(!value::is_expression(&Value::from_iter([
        ("kind", "expression"),
        ("raw", "var.region"),
    ])));
    assert!(!value::is_expression(&Value::Object(Map::new())));
}

#[test]
fn integral_floats_coerce_to_integers() {
    assert_eq!(Number::from(2.0_f64), Number::PosInt(2));
    assert_eq!(Number::from(-3.0_f64), Number::NegInt(-3));
    assert_eq!(Number::from(1.5_f64), Number::Float(1.5));
    assert_eq!(Number::from(2.0_f64).to_string(), "2");
    assert_eq!(Number::from(1.5_f64).to_string(), "1.5");
}

#[test]
fn value_accessors() {
    let mut value = Value::from_iter([("key", "value")]);

    assert!(value.is_object());
    assert!(value.as_object_mut().is_some());
    assert_eq!(value.take(), Value::from_iter([("key", "value")]));
    assert_eq!(value, Value::Null);
}

use super::*;
use crate::{Attribute, Block, RawExpression, Value};

#[track_caller]
fn expect_format<T: Format>(value: T, expected: &str) {
    assert_eq!(to_string(&value).unwrap(), expected);
}

#[test]
fn empty_containers() {
    expect_format(Value::Array(Vec::new()), "[]");
    expect_format(Value::Object(crate::value::Map::new()), "{}");
}

#[test]
fn string_escaping() {
    expect_format(
        Value::from("back\\slash \"quote\"\nnewline\rreturn\ttab"),
        r#""back\\slash \"quote\"\nnewline\rreturn\ttab""#,
    );
}

#[test]
fn expression_is_never_quoted() {
    expect_format(
        Value::Expression(RawExpression::new(r#"join("\n", var.lines)"#)),
        r#"join("\n", var.lines)"#,
    );
}

#[test]
fn attribute_has_no_padding() {
    expect_format(Attribute::new("ami", "ami-12345"), "ami = \"ami-12345\"");
}

#[test]
fn block_label_escaping() {
    expect_format(
        Block::new("block", ["lab\"el"], [("key", Value::Null)]),
        "block \"lab\\\"el\" {\n  key = null\n}",
    );
}

#[test]
fn empty_block_bodies() {
    let no_entries: [(&str, Value); 0] = [];
    let no_labels: [&str; 0] = [];

    expect_format(
        Block::new("telemetry", ["prom"], no_entries),
        "telemetry \"prom\" {\n}",
    );

    // An empty nested block collapses onto one line, an empty top-level block does not.
    expect_format(
        Block::new(
            "settings",
            no_labels,
            [("nested", Value::Object(crate::value::Map::new()))],
        ),
        "settings {\n  nested {}\n}",
    );
}

#[test]
fn nested_block_keys_widen_attribute_padding() {
    let block = Block::new(
        "resource",
        ["null_resource", "quirk"],
        [
            ("a", Value::from(1)),
            ("long_nested_block", Value::from_iter([("b", 2)])),
        ],
    );

    // "a" is padded to the width of "long_nested_block" even though the nested block line
    // itself carries no `=`.
    let expected = "resource \"null_resource\" \"quirk\" {\n\
                    \x20 a                 = 1\n\
                    \x20 long_nested_block {\n\
                    \x20   b = 2\n\
                    \x20 }\n\
                    }";

    expect_format(block, expected);
}

#[test]
fn invalid_indent_width() {
    let options = SerializerOptions {
        indent: 0,
        ..Default::default()
    };

    assert!(to_string_with(&Value::Null, &options).is_err());
    assert!(options.validate().is_err());
    assert!(Formatter::builder().indent(0).build(Vec::new()).is_err());
}

#[test]
fn custom_indent_width() {
    let options = SerializerOptions {
        indent: 4,
        ..Default::default()
    };

    let value = Value::from_iter([("key", Value::from(vec![1, 2]))]);

    assert_eq!(
        to_string_with(&value, &options).unwrap(),
        "{\n    key = [\n        1,\n        2,\n    ]\n}"
    );
}

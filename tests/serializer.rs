mod common;

use common::assert_format;
use hcl_emit::{Attribute, Block, RawExpression, SerializerOptions, Value};
use indoc::indoc;
use pretty_assertions::assert_eq;

#[test]
fn attribute() {
    let options = SerializerOptions::default();

    assert_eq!(
        hcl_emit::attribute("ami", "ami-12345", &options).unwrap(),
        r#"ami = "ami-12345""#
    );
}

#[test]
fn block_with_aligned_attributes() {
    let options = SerializerOptions::default();

    let formatted = hcl_emit::block(
        "resource",
        ["aws_instance", "web"],
        [("ami", "ami-12345678"), ("instance_type", "t2.micro")],
        &options,
    )
    .unwrap();

    assert_eq!(
        formatted,
        indoc! {r#"
            resource "aws_instance" "web" {
              ami           = "ami-12345678"
              instance_type = "t2.micro"
            }"#},
    );
}

#[test]
fn block_with_expression_value() {
    let options = SerializerOptions::default();

    let formatted = hcl_emit::block(
        "resource",
        ["azurerm_resource_group", "main"],
        [
            ("name", Value::from("my-rg")),
            ("location", Value::Expression(RawExpression::new("var.location"))),
        ],
        &options,
    )
    .unwrap();

    assert!(formatted.contains("location = var.location"));
    assert!(!formatted.contains(r#""var.location""#));
}

#[test]
fn serialize_empty_containers() {
    let options = SerializerOptions::default();

    assert_eq!(hcl_emit::serialize(&Value::Array(Vec::new()), &options).unwrap(), "[]");
    assert_eq!(
        hcl_emit::serialize(&Value::Object(hcl_emit::Map::new()), &options).unwrap(),
        "{}"
    );
}

#[test]
fn nested_block() {
    let options = SerializerOptions::default();

    let formatted = hcl_emit::block(
        "resource",
        ["aws_instance", "web"],
        [
            ("ami", Value::from("ami-12345678")),
            (
                "tags",
                Value::from_iter([("Name", "HelloWorld"), ("Environment", "dev")]),
            ),
        ],
        &options,
    )
    .unwrap();

    assert_eq!(
        formatted,
        indoc! {r#"
            resource "aws_instance" "web" {
              ami  = "ami-12345678"
              tags {
                Name        = "HelloWorld"
                Environment = "dev"
              }
            }"#},
    );
}

#[test]
fn deeply_nested_blocks() {
    let inner = Value::from_iter([("capacity", Value::from(8))]);
    let middle = Value::from_iter([("size", Value::from(4)), ("limits", inner)]);

    let block = Block::builder("service")
        .add_label("cache")
        .add_attribute(("backend", "redis"))
        .add_attribute(("pool", middle))
        .build();

    assert_format(
        block,
        indoc! {r#"
            service "cache" {
              backend = "redis"
              pool {
                size   = 4
                limits {
                  capacity = 8
                }
              }
            }"#},
    );
}

#[test]
fn list_of_objects_stays_attribute() {
    let rule = Value::from_iter([("port", 80)]);
    let block = Block::new("firewall", ["main"], [("rules", Value::Array(vec![rule]))]);

    assert_format(
        block,
        indoc! {r#"
            firewall "main" {
              rules = [
                {
                  port = 80
                },
              ]
            }"#},
    );
}

#[test]
fn list_items_end_with_trailing_comma() {
    let value = Value::from(vec![1, 2, 3]);

    let formatted = hcl_emit::serialize(&value, &SerializerOptions::default()).unwrap();

    assert_eq!(
        formatted,
        indoc! {"
            [
              1,
              2,
              3,
            ]"},
    );

    for line in formatted.lines().skip(1).take(3) {
        assert!(line.ends_with(','));
    }
}

#[test]
fn alignment_is_recomputed_per_body() {
    let value = Value::from_iter([
        ("x", Value::from(1)),
        (
            "very_long_key",
            Value::from_iter([("y", Value::from(2)), ("zz", Value::from(3))]),
        ),
    ]);

    let formatted = hcl_emit::serialize(&value, &SerializerOptions::default()).unwrap();

    assert_eq!(
        formatted,
        indoc! {"
            {
              x             = 1
              very_long_key = {
                y  = 2
                zz = 3
              }
            }"},
    );
}

#[test]
fn scalar_values() {
    assert_format(Attribute::new("enabled", true), "enabled = true");
    assert_format(Attribute::new("retries", 3), "retries = 3");
    assert_format(Attribute::new("offset", -7), "offset = -7");
    assert_format(Attribute::new("ratio", 0.5), "ratio = 0.5");
    assert_format(Attribute::new("count", 2.0), "count = 2");
    assert_format(Attribute::new("comment", Value::Null), "comment = null");
}

#[test]
fn block_without_labels() {
    let no_labels: [&str; 0] = [];

    assert_format(
        Block::new("terraform", no_labels, [("required_version", ">= 1.0")]),
        indoc! {r#"
            terraform {
              required_version = ">= 1.0"
            }"#},
    );
}

#[test]
fn empty_block_body() {
    let no_labels: [&str; 0] = [];
    let no_entries: [(&str, Value); 0] = [];

    assert_format(Block::new("locals", no_labels, no_entries), "locals {\n}");
}

#[test]
fn custom_indent() {
    let options = SerializerOptions {
        indent: 4,
        ..Default::default()
    };

    let formatted = hcl_emit::block(
        "variable",
        ["region"],
        [("default", "eu-central-1")],
        &options,
    )
    .unwrap();

    assert_eq!(
        formatted,
        indoc! {r#"
            variable "region" {
                default = "eu-central-1"
            }"#},
    );
}

#[test]
fn zero_indent_is_rejected() {
    let options = SerializerOptions {
        indent: 0,
        ..Default::default()
    };

    let err = hcl_emit::serialize(&Value::Null, &options).unwrap_err();

    assert_eq!(err.to_string(), "invalid indent width `0`, must be positive");
}

#[test]
fn escaped_string_round_trips() {
    let input = "a\\b \"c\"\nd\re\tf";

    let formatted = hcl_emit::serialize(
        &Value::from(input),
        &SerializerOptions::default(),
    )
    .unwrap();

    let unquoted = formatted.strip_prefix('"').unwrap().strip_suffix('"').unwrap();

    assert_eq!(hcl_emit::util::unescape(unquoted).unwrap(), input);
}

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod error;
pub mod format;
mod number;
pub mod structure;
pub mod util;
pub mod value;

mod expr;

pub use error::{Error, Result};
pub use expr::RawExpression;
pub use format::{Format, Formatter, FormatterBuilder, QuoteStyle, SerializerOptions};
pub use number::Number;
pub use structure::{Attribute, Block, BlockBuilder};
pub use value::{is_expression, Map, Value};

/// Serializes a value as an HCL string.
///
/// ```
/// use hcl_emit::{SerializerOptions, Value};
///
/// let value = Value::from(vec!["a", "b"]);
/// let formatted = hcl_emit::serialize(&value, &SerializerOptions::default()).unwrap();
///
/// assert_eq!(formatted, "[\n  \"a\",\n  \"b\",\n]");
/// ```
///
/// # Errors
///
/// Returns an `Error::InvalidIndent` if the configured indent width is zero.
pub fn serialize(value: &Value, options: &SerializerOptions) -> Result<String> {
    format::to_string_with(value, options)
}

/// Serializes a single attribute line: `key = value`.
///
/// ```
/// use hcl_emit::SerializerOptions;
///
/// let formatted = hcl_emit::attribute("ami", "ami-12345", &SerializerOptions::default()).unwrap();
///
/// assert_eq!(formatted, r#"ami = "ami-12345""#);
/// ```
///
/// # Errors
///
/// Returns an `Error::InvalidIndent` if the configured indent width is zero.
pub fn attribute<K, V>(key: K, value: V, options: &SerializerOptions) -> Result<String>
where
    K: Into<String>,
    V: Into<Value>,
{
    format::to_string_with(&Attribute::new(key, value), options)
}

/// Serializes an HCL block with a type identifier, labels and body entries.
///
/// Body entries with object values are emitted as nested blocks, all other entries as attributes
/// aligned on `=`.
///
/// ```
/// use hcl_emit::SerializerOptions;
///
/// let formatted = hcl_emit::block(
///     "resource",
///     ["aws_instance", "web"],
///     [("ami", "ami-12345678"), ("instance_type", "t2.micro")],
///     &SerializerOptions::default(),
/// )
/// .unwrap();
///
/// let expected = r#"
/// resource "aws_instance" "web" {
///   ami           = "ami-12345678"
///   instance_type = "t2.micro"
/// }
/// "#.trim();
///
/// assert_eq!(formatted, expected);
/// ```
///
/// # Errors
///
/// Returns an `Error::InvalidIndent` if the configured indent width is zero.
pub fn block<I, L, B, K, V>(
    block_type: I,
    labels: L,
    body: B,
    options: &SerializerOptions,
) -> Result<String>
where
    I: Into<String>,
    L: IntoIterator,
    L::Item: Into<String>,
    B: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    format::to_string_with(&Block::new(block_type, labels, body), options)
}

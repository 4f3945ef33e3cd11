use crate::value::Map;
use crate::Value;

/// Represents an HCL block: a type identifier, zero or more labels and a body.
///
/// Labels are plain strings and are always emitted as quoted string literals. Body entries whose
/// value is an object are emitted as nested blocks; all other entries are emitted as attributes.
#[derive(Debug, PartialEq, Clone)]
pub struct Block {
    /// The block type identifier, emitted bare.
    pub identifier: String,
    /// The block labels, emitted as quoted strings after the identifier.
    pub labels: Vec<String>,
    /// The block body. Entry order is preserved in the output.
    pub body: Map<String, Value>,
}

impl Block {
    /// Creates a new `Block` from a type identifier, labels and body entries.
    ///
    /// ```
    /// use hcl_emit::Block;
    ///
    /// let block = Block::new(
    ///     "resource",
    ///     ["aws_instance", "web"],
    ///     [("ami", "ami-12345678"), ("instance_type", "t2.micro")],
    /// );
    /// ```
    pub fn new<I, L, B, K, V>(identifier: I, labels: L, body: B) -> Block
    where
        I: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
        B: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Block {
            identifier: identifier.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            body: body
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Creates a new [`BlockBuilder`] to start building a new `Block` with the provided type
    /// identifier.
    pub fn builder<I>(identifier: I) -> BlockBuilder
    where
        I: Into<String>,
    {
        BlockBuilder::new(identifier)
    }
}

/// A builder to create a `Block`.
///
/// ```
/// use hcl_emit::{Block, Value};
///
/// let block = Block::builder("resource")
///     .add_label("aws_instance")
///     .add_label("web")
///     .add_attribute(("ami", "ami-12345678"))
///     .add_attribute(("tags", Value::from_iter([("Name", "HelloWorld")])))
///     .build();
/// ```
#[derive(Debug)]
pub struct BlockBuilder {
    identifier: String,
    labels: Vec<String>,
    body: Map<String, Value>,
}

impl BlockBuilder {
    /// Creates a new `BlockBuilder` for a block with the provided type identifier.
    pub fn new<I>(identifier: I) -> BlockBuilder
    where
        I: Into<String>,
    {
        BlockBuilder {
            identifier: identifier.into(),
            labels: Vec::new(),
            body: Map::new(),
        }
    }

    /// Adds a label to the block.
    pub fn add_label<L>(mut self, label: L) -> BlockBuilder
    where
        L: Into<String>,
    {
        self.labels.push(label.into());
        self
    }

    /// Adds a body entry to the block. An entry with an object value becomes a nested block when
    /// serialized, any other entry becomes an attribute.
    pub fn add_attribute<A>(mut self, attr: A) -> BlockBuilder
    where
        A: Into<super::Attribute>,
    {
        let attr = attr.into();
        self.body.insert(attr.key, attr.value);
        self
    }

    /// Consumes `self` and builds the `Block`.
    pub fn build(self) -> Block {
        Block {
            identifier: self.identifier,
            labels: self.labels,
            body: self.body,
        }
    }
}

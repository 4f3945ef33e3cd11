use crate::Value;

/// Represents a single HCL attribute: `key = value`.
#[derive(Debug, PartialEq, Clone)]
pub struct Attribute {
    /// The attribute key.
    pub key: String,
    /// The attribute value.
    pub value: Value,
}

impl Attribute {
    /// Creates a new `Attribute` from a key and a value.
    pub fn new<K, V>(key: K, value: V) -> Attribute
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Attribute {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K, V> From<(K, V)> for Attribute
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pair: (K, V)) -> Attribute {
        Attribute::new(pair.0, pair.1)
    }
}

//! The Value enum, a loosely typed way of representing any HCL value that can be serialized.

mod de;
mod from;
mod ser;

use crate::expr::RawExpression;
use crate::number::Number;

/// The map type used for HCL objects and block bodies.
///
/// Insertion order is preserved and determines the order in which entries are emitted.
pub type Map<K, V> = indexmap::IndexMap<K, V>;

/// Represents any HCL value that can be serialized.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// Represents a HCL null value.
    Null,
    /// Represents a HCL boolean.
    Bool(bool),
    /// Represents a HCL number, either integer or float.
    Number(Number),
    /// Represents a HCL string.
    String(String),
    /// Represents a raw HCL expression which is emitted verbatim, without quoting or escaping.
    Expression(RawExpression),
    /// Represents a HCL array.
    Array(Vec<Value>),
    /// Represents a HCL object.
    Object(Map<String, Value>),
}

impl Default for Value {
    fn default() -> Value {
        Value::Null
    }
}

impl Value {
    /// If the `Value` is an Array, returns the associated vector. Returns None otherwise.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// If the `Value` is an Array, returns the associated mutable vector. Returns None
    /// otherwise.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// If the `Value` is a Boolean, represent it as bool if possible. Returns None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// If the `Value` is a Null, returns (). Returns None otherwise.
    pub fn as_null(&self) -> Option<()> {
        match self {
            Self::Null => Some(()),
            _ => None,
        }
    }

    /// If the `Value` is a Number, returns the associated Number. Returns None otherwise.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(num) => Some(num),
            _ => None,
        }
    }

    /// If the `Value` is an Object, returns the associated Map. Returns None otherwise.
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// If the `Value` is an Object, returns the associated mutable Map. Returns None otherwise.
    pub fn as_object_mut(&mut self) -> Option<&mut Map<String, Value>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// If the `Value` is a String, returns the associated str. Returns None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the `Value` is an Expression, returns the associated `RawExpression`. Returns None
    /// otherwise.
    pub fn as_expression(&self) -> Option<&RawExpression> {
        match self {
            Self::Expression(expr) => Some(expr),
            _ => None,
        }
    }

    /// Returns true if the `Value` is an Array. Returns false otherwise.
    pub fn is_array(&self) -> bool {
        self.as_array().is_some()
    }

    /// Returns true if the `Value` is a Boolean. Returns false otherwise.
    pub fn is_boolean(&self) -> bool {
        self.as_bool().is_some()
    }

    /// Returns true if the `Value` is a Null. Returns false otherwise.
    pub fn is_null(&self) -> bool {
        self.as_null().is_some()
    }

    /// Returns true if the `Value` is a Number. Returns false otherwise.
    pub fn is_number(&self) -> bool {
        self.as_number().is_some()
    }

    /// Returns true if the `Value` is an Object. Returns false otherwise.
    pub fn is_object(&self) -> bool {
        self.as_object().is_some()
    }

    /// Returns true if the `Value` is a String. Returns false otherwise.
    pub fn is_string(&self) -> bool {
        self.as_str().is_some()
    }

    /// Returns true if the `Value` is an Expression. Returns false otherwise.
    ///
    /// Unlike the free function [`is_expression`], this only matches the `Expression` variant
    /// itself, not the tagged object encoding.
    pub fn is_expression(&self) -> bool {
        self.as_expression().is_some()
    }

    /// Takes the value out of the `Value`, leaving a `Null` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::replace(self, Value::Null)
    }
}

/// Returns true if `value` represents a raw HCL expression.
///
/// This matches the [`Value::Expression`] variant as well as the tagged object encoding used at
/// untyped boundaries: an object containing exactly a `kind` key equal to `"expression"` and a
/// string-typed `hcl` key holding the expression text.
///
/// ```
/// use hcl_emit::{value, RawExpression, Value};
///
/// let expr = Value::Expression(RawExpression::new("var.region"));
/// assert!(value::is_expression(&expr));
///
/// let tagged = Value::from_iter([("kind", "expression"), ("hcl", "var.region")]);
/// assert!(value::is_expression(&tagged));
///
/// assert!(!value::is_expression(&Value::String("var.region".into())));
/// ```
pub fn is_expression(value: &Value) -> bool {
    match value {
        Value::Expression(_) => true,
        Value::Object(object) => expression_text(object).is_some(),
        _ => false,
    }
}

/// Extracts the expression text from an object in the tagged encoding, if it has exactly the
/// expected shape.
pub(crate) fn expression_text(object: &Map<String, Value>) -> Option<&str> {
    if object.len() != 2 {
        return None;
    }

    match (object.get("kind"), object.get("hcl")) {
        (Some(Value::String(kind)), Some(Value::String(text))) if kind == "expression" => {
            Some(text)
        }
        _ => None,
    }
}

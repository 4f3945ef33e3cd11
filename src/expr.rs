//! The raw expression type, the escape hatch for unquoted HCL.

use std::borrow::Cow;
use std::fmt::{self, Display};

/// A type that holds the text of a raw HCL expression.
///
/// Raw expressions are emitted verbatim, without quoting or escaping. They are how identifier
/// references, function calls and interpolations are kept distinguishable from string literals at
/// the type level:
///
/// ```
/// use hcl_emit::{RawExpression, SerializerOptions, Value};
///
/// let value = Value::Expression(RawExpression::new("var.location"));
/// let formatted = hcl_emit::serialize(&value, &SerializerOptions::default()).unwrap();
///
/// assert_eq!(formatted, "var.location");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawExpression(String);

impl RawExpression {
    /// Creates a new `RawExpression` from something that can be converted to a `String`.
    pub fn new<E>(expr: E) -> RawExpression
    where
        E: Into<String>,
    {
        RawExpression(expr.into())
    }

    /// Returns the expression text as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes `self` and returns the `RawExpression` as a `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for RawExpression {
    fn from(expr: String) -> Self {
        RawExpression::new(expr)
    }
}

impl From<&str> for RawExpression {
    fn from(expr: &str) -> Self {
        RawExpression::new(expr)
    }
}

impl<'a> From<Cow<'a, str>> for RawExpression {
    fn from(expr: Cow<'a, str>) -> Self {
        RawExpression::new(expr)
    }
}

impl From<RawExpression> for String {
    fn from(expr: RawExpression) -> Self {
        expr.0
    }
}

impl Display for RawExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

use super::{private, Format, Formatter};
use crate::expr::RawExpression;
use crate::number::Number;
use crate::structure::{Attribute, Block};
use crate::value::{Map, Value};
use crate::Result;
use std::io;

impl private::Sealed for Value {}

impl Format for Value {
    fn format<W>(&self, fmt: &mut Formatter<W>) -> Result<()>
    where
        W: io::Write,
    {
        match self {
            Value::Null => fmt.write_null(),
            Value::Bool(b) => fmt.write_bool(*b),
            Value::Number(num) => num.format(fmt),
            Value::String(string) => fmt.write_quoted_string(string),
            Value::Expression(expr) => expr.format(fmt),
            Value::Array(array) => format_array(fmt, array),
            Value::Object(object) => format_object(fmt, object),
        }
    }
}

impl private::Sealed for Number {}

impl Format for Number {
    fn format<W>(&self, fmt: &mut Formatter<W>) -> Result<()>
    where
        W: io::Write,
    {
        match *self {
            Number::PosInt(value) => fmt.write_int(value),
            Number::NegInt(value) => fmt.write_int(value),
            Number::Float(value) => fmt.write_float(value),
        }
    }
}

impl private::Sealed for RawExpression {}

impl Format for RawExpression {
    fn format<W>(&self, fmt: &mut Formatter<W>) -> Result<()>
    where
        W: io::Write,
    {
        fmt.write_string_fragment(self.as_str())
    }
}

impl private::Sealed for Attribute {}

impl Format for Attribute {
    fn format<W>(&self, fmt: &mut Formatter<W>) -> Result<()>
    where
        W: io::Write,
    {
        fmt.write_string_fragment(&self.key)?;
        fmt.write_bytes(b" = ")?;
        self.value.format(fmt)
    }
}

impl private::Sealed for Block {}

impl Format for Block {
    fn format<W>(&self, fmt: &mut Formatter<W>) -> Result<()>
    where
        W: io::Write,
    {
        fmt.write_string_fragment(&self.identifier)?;

        for label in &self.labels {
            fmt.write_bytes(b" ")?;
            fmt.write_quoted_string(label)?;
        }

        fmt.write_bytes(b" {")?;

        if self.body.is_empty() {
            return fmt.write_bytes(b"\n}");
        }

        fmt.write_bytes(b"\n")?;
        fmt.current_indent += 1;
        format_body(fmt, &self.body)?;
        fmt.current_indent -= 1;
        fmt.write_indent()?;
        fmt.write_bytes(b"}")
    }
}

fn format_array<W>(fmt: &mut Formatter<W>, array: &[Value]) -> Result<()>
where
    W: io::Write,
{
    if array.is_empty() {
        return fmt.write_bytes(b"[]");
    }

    fmt.write_bytes(b"[\n")?;
    fmt.current_indent += 1;

    for item in array {
        fmt.write_indent()?;
        item.format(fmt)?;
        // Every item ends with a comma, including the last one.
        fmt.write_bytes(b",\n")?;
    }

    fmt.current_indent -= 1;
    fmt.write_indent()?;
    fmt.write_bytes(b"]")
}

// Formats an object in value position: every entry becomes a `key = value` line, object values
// included.
fn format_object<W>(fmt: &mut Formatter<W>, object: &Map<String, Value>) -> Result<()>
where
    W: io::Write,
{
    if object.is_empty() {
        return fmt.write_bytes(b"{}");
    }

    let width = max_key_width(object);

    fmt.write_bytes(b"{\n")?;
    fmt.current_indent += 1;

    for (key, value) in object {
        fmt.write_indent()?;
        fmt.write_padded_key(key, width)?;
        fmt.write_bytes(b" = ")?;
        value.format(fmt)?;
        fmt.write_bytes(b"\n")?;
    }

    fmt.current_indent -= 1;
    fmt.write_indent()?;
    fmt.write_bytes(b"}")
}

// Formats the interior of a block body. Entries with object values become nested blocks, all
// other entries become attribute lines aligned on `=`.
//
// Nested block keys count towards the padding width even though they are not followed by `=`, so
// a body mixing attributes and nested blocks may pad attribute keys wider than strictly needed.
fn format_body<W>(fmt: &mut Formatter<W>, body: &Map<String, Value>) -> Result<()>
where
    W: io::Write,
{
    let width = max_key_width(body);

    for (key, value) in body {
        match value {
            Value::Object(object) => format_nested_block(fmt, key, object)?,
            value => {
                fmt.write_indent()?;
                fmt.write_padded_key(key, width)?;
                fmt.write_bytes(b" = ")?;
                value.format(fmt)?;
                fmt.write_bytes(b"\n")?;
            }
        }
    }

    Ok(())
}

fn format_nested_block<W>(
    fmt: &mut Formatter<W>,
    block_type: &str,
    body: &Map<String, Value>,
) -> Result<()>
where
    W: io::Write,
{
    fmt.write_indent()?;
    fmt.write_string_fragment(block_type)?;

    if body.is_empty() {
        return fmt.write_bytes(b" {}\n");
    }

    fmt.write_bytes(b" {\n")?;
    fmt.current_indent += 1;
    format_body(fmt, body)?;
    fmt.current_indent -= 1;
    fmt.write_indent()?;
    fmt.write_bytes(b"}\n")
}

fn max_key_width(entries: &Map<String, Value>) -> usize {
    entries.keys().map(|key| key.len()).max().unwrap_or(0)
}

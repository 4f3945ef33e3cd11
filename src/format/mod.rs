//! Format data structures as HCL.
//!
//! This module provides the [`Formatter`] type and the convenience functions [`to_string`],
//! [`to_vec`] and [`to_writer`] for formatting the data structures provided by this crate as HCL.
//!
//! # Examples
//!
//! Format an HCL block as string:
//!
//! ```
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let block = hcl_emit::Block::new(
//!     "resource",
//!     ["aws_instance", "web"],
//!     [("ami", "ami-12345678"), ("instance_type", "t2.micro")],
//! );
//!
//! let expected = r#"
//! resource "aws_instance" "web" {
//!   ami           = "ami-12345678"
//!   instance_type = "t2.micro"
//! }
//! "#.trim();
//!
//! let formatted = hcl_emit::format::to_string(&block)?;
//!
//! assert_eq!(formatted, expected);
//! #   Ok(())
//! # }
//! ```

mod escape;
mod impls;
#[cfg(test)]
mod tests;

use self::escape::{CharEscape, ESCAPE};
use crate::{Error, Result};
use std::io;

mod private {
    pub trait Sealed {}
}

/// A trait to format data structures as HCL.
///
/// This trait is sealed to prevent implementation outside of this crate.
pub trait Format: private::Sealed {
    /// Formats a HCL structure using a formatter and writes the result to the provided writer.
    ///
    /// # Errors
    ///
    /// Writing to the writer may fail with an `Error`.
    fn format<W>(&self, fmt: &mut Formatter<W>) -> Result<()>
    where
        W: io::Write;
}

/// The string quoting style used for literal strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum QuoteStyle {
    /// Escaped double-quoted string literals.
    #[default]
    Double,
    /// Reserved for heredoc (`<<EOF`) emission of multi-line strings. Currently accepted but
    /// formats strings exactly like [`QuoteStyle::Double`].
    Heredoc,
}

/// Configuration for the HCL serializer.
///
/// The `Default` impl uses an indent width of two spaces and double-quoted strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializerOptions {
    /// Number of spaces per indentation level. Must be positive.
    pub indent: usize,
    /// The string quoting style.
    pub quote_style: QuoteStyle,
}

impl Default for SerializerOptions {
    fn default() -> SerializerOptions {
        SerializerOptions {
            indent: 2,
            quote_style: QuoteStyle::Double,
        }
    }
}

impl SerializerOptions {
    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns an `Error::InvalidIndent` if the indent width is zero.
    pub fn validate(&self) -> Result<()> {
        if self.indent == 0 {
            return Err(Error::InvalidIndent(self.indent));
        }

        Ok(())
    }
}

/// A pretty printing HCL formatter.
///
/// # Examples
///
/// Format an HCL attribute as string:
///
/// ```
/// # use std::error::Error;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use hcl_emit::format::{Format, Formatter};
/// use hcl_emit::Attribute;
///
/// let mut buf = Vec::new();
/// let mut formatter = Formatter::new(&mut buf);
///
/// Attribute::new("ami", "ami-12345").format(&mut formatter)?;
///
/// assert_eq!(String::from_utf8(buf)?, r#"ami = "ami-12345""#);
/// #   Ok(())
/// # }
/// ```
///
/// The [`builder()`](Formatter::builder) method can be used to construct a `Formatter` with a
/// custom indent width:
///
/// ```
/// use hcl_emit::format::Formatter;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut writer = Vec::new();
///
/// let formatter = Formatter::builder()
///     .indent(4)
///     .build(&mut writer)?;
/// #   Ok(())
/// # }
/// ```
pub struct Formatter<W> {
    writer: W,
    options: SerializerOptions,
    current_indent: usize,
}

/// A builder to create a `Formatter`.
///
/// See the documentation of [`Formatter`] for a usage example.
pub struct FormatterBuilder {
    options: SerializerOptions,
}

impl FormatterBuilder {
    /// Set the indent width for indenting nested HCL structures.
    ///
    /// The default indent width is two spaces.
    pub fn indent(mut self, width: usize) -> Self {
        self.options.indent = width;
        self
    }

    /// Set the string quoting style.
    pub fn quote_style(mut self, style: QuoteStyle) -> Self {
        self.options.quote_style = style;
        self
    }

    /// Consumes the `FormatterBuilder` and turns it into a `Formatter` which writes HCL to the
    /// provided writer.
    ///
    /// # Errors
    ///
    /// Returns an `Error::InvalidIndent` if the configured indent width is zero.
    pub fn build<W>(self, writer: W) -> Result<Formatter<W>>
    where
        W: io::Write,
    {
        self.options.validate()?;

        Ok(Formatter {
            writer,
            options: self.options,
            current_indent: 0,
        })
    }
}

// Public API.
impl Formatter<()> {
    /// Creates a new [`FormatterBuilder`] to start building a new `Formatter`.
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder {
            options: SerializerOptions::default(),
        }
    }
}

// Public API.
impl<W> Formatter<W>
where
    W: io::Write,
{
    /// Creates a new `Formatter` with default options which writes HCL to the provided writer.
    pub fn new(writer: W) -> Formatter<W> {
        Formatter {
            writer,
            options: SerializerOptions::default(),
            current_indent: 0,
        }
    }

    /// Creates a new `Formatter` from `SerializerOptions` which writes HCL to the provided
    /// writer.
    ///
    /// # Errors
    ///
    /// Returns an `Error::InvalidIndent` if the indent width is zero.
    pub fn with_options(writer: W, options: SerializerOptions) -> Result<Formatter<W>> {
        options.validate()?;

        Ok(Formatter {
            writer,
            options,
            current_indent: 0,
        })
    }

    /// Consumes `self` and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

// Internal formatter API.
impl<W> Formatter<W>
where
    W: io::Write,
{
    /// Writes `null` to the writer.
    fn write_null(&mut self) -> Result<()> {
        self.write_bytes(b"null")
    }

    /// Writes a boolean value to the writer.
    fn write_bool(&mut self, value: bool) -> Result<()> {
        let s = if value {
            b"true" as &[u8]
        } else {
            b"false" as &[u8]
        };
        self.write_bytes(s)
    }

    /// Writes an integer value to the writer.
    fn write_int<T>(&mut self, value: T) -> Result<()>
    where
        T: itoa::Integer,
    {
        let mut buffer = itoa::Buffer::new();
        let s = buffer.format(value);
        self.write_bytes(s.as_bytes())
    }

    /// Writes a float value to the writer.
    fn write_float(&mut self, value: f64) -> Result<()> {
        let mut buffer = ryu::Buffer::new();
        let s = buffer.format(value);
        self.write_bytes(s.as_bytes())
    }

    /// Writes an escaped, quoted string to the writer.
    fn write_quoted_string(&mut self, s: &str) -> Result<()> {
        self.write_bytes(b"\"")?;
        self.write_escaped_string(s)?;
        self.write_bytes(b"\"")
    }

    /// Writes a string fragment to the writer. No escaping occurs.
    fn write_string_fragment(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Writes a string to the writer and escapes backslashes, quotes and control characters that
    /// might be contained in it.
    fn write_escaped_string(&mut self, value: &str) -> Result<()> {
        let bytes = value.as_bytes();

        let mut start = 0;

        for (i, &byte) in bytes.iter().enumerate() {
            let escape = ESCAPE[byte as usize];
            if escape == 0 {
                continue;
            }

            if start < i {
                self.write_string_fragment(&value[start..i])?;
            }

            let char_escape = CharEscape::from_escape_table(escape);
            char_escape.write_escaped(&mut self.writer)?;

            start = i + 1;
        }

        if start != bytes.len() {
            self.write_string_fragment(&value[start..])?;
        }

        Ok(())
    }

    /// Writes a body entry key, right-padded with spaces to `width`.
    fn write_padded_key(&mut self, key: &str, width: usize) -> Result<()> {
        self.write_string_fragment(key)?;
        self.write_spaces(width.saturating_sub(key.len()))
    }

    /// Writes the indentation for the current nesting level.
    fn write_indent(&mut self) -> Result<()> {
        self.write_spaces(self.current_indent * self.options.indent)
    }

    fn write_spaces(&mut self, n: usize) -> Result<()> {
        const SPACES: [u8; 16] = *b"                ";

        let mut remaining = n;

        while remaining > 0 {
            let chunk = remaining.min(SPACES.len());
            self.write_bytes(&SPACES[..chunk])?;
            remaining -= chunk;
        }

        Ok(())
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.writer.write_all(buf)?;
        Ok(())
    }
}

/// Format the given value as an HCL byte vector using default options.
///
/// # Errors
///
/// Formatting a value as byte vector cannot fail.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Format,
{
    let mut vec = Vec::with_capacity(128);
    to_writer(&mut vec, value)?;
    Ok(vec)
}

/// Format the given value as an HCL string using default options.
///
/// # Errors
///
/// Formatting a value as string cannot fail.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Format,
{
    to_string_with(value, &SerializerOptions::default())
}

/// Format the given value as an HCL string using the provided options.
///
/// # Errors
///
/// Returns an `Error::InvalidIndent` if the configured indent width is zero.
pub fn to_string_with<T>(value: &T, options: &SerializerOptions) -> Result<String>
where
    T: ?Sized + Format,
{
    let mut vec = Vec::with_capacity(128);
    let mut formatter = Formatter::with_options(&mut vec, options.clone())?;
    value.format(&mut formatter)?;
    let string = unsafe {
        // We do not emit invalid UTF-8.
        String::from_utf8_unchecked(vec)
    };
    Ok(string)
}

/// Format the given value as HCL into the IO stream using default options.
///
/// # Errors
///
/// Formatting fails if any operation on the writer fails.
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Format,
{
    let mut formatter = Formatter::new(writer);
    value.format(&mut formatter)
}

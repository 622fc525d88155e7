//! JSON encoding that matches Python's `json.dumps` with default arguments.
//!
//! `serde_json` writes compact output (`{"a":1}`), while `json.dumps` writes
//! `{"a": 1}` and escapes everything outside printable ASCII. Clients that
//! compare response bodies byte for byte need the latter.

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

use crate::error::Result;

/// `serde_json` formatter using `", "` / `": "` separators and, optionally,
/// `ensure_ascii` style escaping.
#[derive(Clone, Copy, Debug)]
pub struct PythonFormatter {
    ensure_ascii: bool,
}

impl PythonFormatter {
    pub fn new(ensure_ascii: bool) -> Self {
        Self { ensure_ascii }
    }
}

impl Default for PythonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Formatter for PythonFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if !self.ensure_ascii {
            return writer.write_all(fragment.as_bytes());
        }

        // Quotes, backslashes and control characters never reach this point;
        // serde_json escapes them through write_char_escape. DEL and anything
        // above it are left for us.
        let bytes = fragment.as_bytes();
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if (ch as u32) < 0x7f {
                continue;
            }
            writer.write_all(&bytes[start..idx])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(&bytes[start..])
    }
}

/// Serializes `value` the way `json.dumps(value)` would.
pub fn to_python_json_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_formatter(value, PythonFormatter::default())
}

pub fn to_string_with_formatter<T>(value: &T, formatter: PythonFormatter) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

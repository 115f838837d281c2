//! Single header line with a zero-copy view of its value.

use std::fmt;

use http::{HeaderName, HeaderValue};

use crate::error::{Error, Result};

/// Response header carrying cookies to store.
pub const SET_COOKIE: &str = "Set-Cookie";
/// Request header carrying cookies to send.
pub const COOKIE: &str = "Cookie";

/// One header line, `Name: value`, kept as a single buffer.
///
/// The cookie parser scans the buffer in place starting at the value
/// position instead of copying the value out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    line: String,
    name_end: usize,
    value_pos: Option<usize>,
}

impl Header {
    pub fn new(name: &str, value: &str) -> Self {
        let mut line = String::with_capacity(name.len() + 2 + value.len());
        line.push_str(name);
        line.push_str(": ");
        let value_pos = line.len();
        line.push_str(value);
        Self {
            line,
            name_end: name.len(),
            value_pos: Some(value_pos),
        }
    }

    /// A header that exists but carries no value at all.
    pub fn without_value(name: &str) -> Self {
        Self {
            line: name.to_string(),
            name_end: name.len(),
            value_pos: None,
        }
    }

    /// Split a raw `Name: value` line. Whitespace after the colon is skipped.
    pub fn parse_line(line: impl Into<String>) -> Result<Self> {
        let line = line.into();
        let colon = line
            .find(':')
            .ok_or_else(|| Error::invalid_argument(format!("header line has no ':' separator: '{}'", line)))?;
        let name_end = line[..colon].trim_end().len();
        if name_end == 0 {
            return Err(Error::invalid_argument(format!("header line has no name: '{}'", line)));
        }
        let after = &line[colon + 1..];
        let value_pos = colon + 1 + (after.len() - after.trim_start().len());
        Ok(Self {
            line,
            name_end,
            value_pos: Some(value_pos),
        })
    }

    /// Convert from the `http` crate's representation.
    pub fn from_http(name: &HeaderName, value: &HeaderValue) -> Result<Self> {
        let value = value
            .to_str()
            .map_err(|e| Error::malformed_header(format!("non-visible ASCII in '{}' value: {}", name, e)))?;
        Ok(Self::new(name.as_str(), value))
    }

    /// Convert into the `http` crate's representation.
    pub fn to_http(&self) -> Result<(HeaderName, HeaderValue)> {
        let name = HeaderName::from_bytes(self.name().as_bytes())?;
        let value = HeaderValue::from_str(self.value().unwrap_or(""))?;
        Ok((name, value))
    }

    pub fn name(&self) -> &str {
        &self.line[..self.name_end]
    }

    pub fn value(&self) -> Option<&str> {
        self.value_pos.map(|pos| &self.line[pos..])
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
    }

    /// The whole line the value view points into.
    pub fn buffer(&self) -> &str {
        &self.line
    }

    /// Byte offset of the value inside [`Header::buffer`].
    pub fn value_pos(&self) -> Option<usize> {
        self.value_pos
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

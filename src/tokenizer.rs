//! Delimiter-aware token extraction for header values.
//!
//! Two flavours are provided:
//!
//! - [`parse_data`] copies nothing and interprets nothing: it returns the raw
//!   slice up to the next delimiter. Cookie names and values go through this,
//!   so they reach the caller exactly as the server sent them (modulo the
//!   trim done at the call site).
//! - [`parse_token`] drops leading and trailing whitespace and folds every
//!   internal whitespace run into one space. Attribute names and values go
//!   through this.
//!
//! Neither consumes the delimiter it stopped on; call [`skip_delimiter`].

use std::borrow::Cow;

use crate::cursor::Cursor;

/// Set of ASCII stop characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters(u128);

impl Delimiters {
    /// Build a set from ASCII bytes. Non-ASCII bytes are ignored.
    pub const fn of(bytes: &[u8]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] < 128 {
                bits |= 1u128 << bytes[i];
            }
            i += 1;
        }
        Self(bits)
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        byte < 128 && self.0 & (1u128 << byte) != 0
    }
}

#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Byte at the cursor, or `None` at the end.
pub(crate) fn current(buf: &str, cursor: &Cursor) -> Option<u8> {
    if cursor.at_end() {
        None
    } else {
        buf.as_bytes().get(cursor.pos()).copied()
    }
}

/// Raw text from the cursor up to (not including) the next delimiter.
///
/// Leaves the cursor on the delimiter, or at the bound.
pub fn parse_data<'a>(buf: &'a str, cursor: &mut Cursor, delimiters: Delimiters) -> &'a str {
    let bytes = buf.as_bytes();
    let start = cursor.pos();
    let end = bytes[start..cursor.upper_bound()]
        .iter()
        .position(|&b| delimiters.contains(b))
        .map_or(cursor.upper_bound(), |offset| start + offset);
    cursor.update_pos(end);
    &buf[start..end]
}

/// Whitespace-normalised token up to the next delimiter.
///
/// Borrows from `buf` unless an internal whitespace run had to be folded.
pub fn parse_token<'a>(buf: &'a str, cursor: &mut Cursor, delimiters: Delimiters) -> Cow<'a, str> {
    let bytes = buf.as_bytes();
    let mut token: Cow<'a, str> = Cow::Borrowed("");
    let mut pending_space = false;

    while let Some(byte) = current(buf, cursor) {
        if delimiters.contains(byte) {
            break;
        }
        if is_whitespace(byte) {
            skip_whitespace(buf, cursor);
            pending_space = true;
            continue;
        }

        let start = cursor.pos();
        let end = bytes[start..cursor.upper_bound()]
            .iter()
            .position(|&b| delimiters.contains(b) || is_whitespace(b))
            .map_or(cursor.upper_bound(), |offset| start + offset);
        cursor.update_pos(end);
        let chunk = &buf[start..end];

        if token.is_empty() {
            token = Cow::Borrowed(chunk);
        } else {
            let owned = token.to_mut();
            if pending_space {
                owned.push(' ');
            }
            owned.push_str(chunk);
        }
        pending_space = false;
    }
    token
}

/// Advance past any whitespace at the cursor.
pub(crate) fn skip_whitespace(buf: &str, cursor: &mut Cursor) {
    while let Some(byte) = current(buf, cursor) {
        if !is_whitespace(byte) {
            break;
        }
        cursor.advance();
    }
}

/// Consume one delimiter if the cursor sits on one, returning it.
pub fn skip_delimiter(buf: &str, cursor: &mut Cursor, delimiters: Delimiters) -> Option<u8> {
    let byte = current(buf, cursor)?;
    if delimiters.contains(byte) {
        cursor.advance();
        Some(byte)
    } else {
        None
    }
}

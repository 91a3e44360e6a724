//! XML escaping and buffer-oriented writing helpers

use std::borrow::Cow;

use crate::error::{Result, XlsxError};

/// Escape text for embedding in XML content or attribute values
///
/// Returns the input unchanged when no escaping is needed. Control
/// characters other than tab, newline and carriage return have no
/// representation in XML 1.0, escaped or not, and fail the run.
pub fn escape(text: &str) -> Result<Cow<'_, str>> {
    let pos = match text.find(|c: char| needs_escape(c) || is_unrepresentable(c)) {
        Some(pos) => pos,
        None => return Ok(Cow::Borrowed(text)),
    };

    let mut escaped = String::with_capacity(text.len() + 8);
    escaped.push_str(&text[..pos]);
    for c in text[pos..].chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c if is_unrepresentable(c) => {
                return Err(XlsxError::Unrepresentable {
                    codepoint: c as u32,
                });
            }
            c => escaped.push(c),
        }
    }
    Ok(Cow::Owned(escaped))
}

#[inline]
fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}

#[inline]
fn is_unrepresentable(c: char) -> bool {
    c.is_control() && !matches!(c, '\t' | '\n' | '\r')
}

/// In-memory XML writer used by the part renderer
///
/// All string inputs are written as-is; callers pass either fixed markup
/// or text that already went through [`escape`].
pub(crate) struct XmlBuffer {
    buf: Vec<u8>,
}

impl XmlBuffer {
    pub fn new() -> Self {
        XmlBuffer {
            buf: Vec::with_capacity(8192),
        }
    }

    /// Write the standard UTF-8 XML declaration with `standalone="yes"`
    pub fn declaration(&mut self) {
        self.raw(b"<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
    }

    /// Write raw bytes directly
    #[inline]
    pub fn raw(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Write string data
    #[inline]
    pub fn text(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    /// Write an integer without intermediate allocation
    #[inline]
    pub fn int(&mut self, value: impl itoa::Integer) {
        let mut num_buffer = itoa::Buffer::new();
        self.buf
            .extend_from_slice(num_buffer.format(value).as_bytes());
    }

    /// Write an attribute whose value is already XML-safe
    #[inline]
    pub fn attribute(&mut self, name: &str, value: &str) {
        self.raw(b" ");
        self.text(name);
        self.raw(b"=\"");
        self.text(value);
        self.raw(b"\"");
    }

    /// Write an attribute with an integer value
    #[inline]
    pub fn attribute_int(&mut self, name: &str, value: impl itoa::Integer) {
        self.raw(b" ");
        self.text(name);
        self.raw(b"=\"");
        self.int(value);
        self.raw(b"\"");
    }

    /// Write an element close tag
    #[inline]
    pub fn end_element(&mut self, name: &str) {
        self.raw(b"</");
        self.text(name);
        self.raw(b">");
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

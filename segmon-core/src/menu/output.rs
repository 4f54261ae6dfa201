//! Console output produced by one menu step

use core::fmt;

use heapless::Vec;

use crate::config::OUTPUT_CAPACITY;

/// Bytes to send to the console
///
/// Output past the capacity is dropped and flagged.
#[derive(Debug, Clone, Default)]
pub struct Output {
    buf: Vec<u8, OUTPUT_CAPACITY>,
    truncated: bool,
}

impl Output {
    /// Create an empty output buffer
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            truncated: false,
        }
    }

    /// Append a raw byte (e.g. an echoed character)
    pub fn push_byte(&mut self, byte: u8) {
        if self.buf.push(byte).is_err() {
            self.truncated = true;
        }
    }

    /// Append text
    pub fn push_str(&mut self, text: &str) {
        for byte in text.bytes() {
            self.push_byte(byte);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if any output was dropped
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.truncated = false;
    }
}

impl fmt::Write for Output {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

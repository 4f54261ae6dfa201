//! Bounded command-line buffer

use heapless::Vec;

/// Line buffer is full
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapacityExceeded;

/// Characters typed since the last terminator, at most `N`
#[derive(Debug, Clone, Default)]
pub struct LineBuffer<const N: usize> {
    buf: Vec<u8, N>,
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty line buffer
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Append a character
    ///
    /// Fails without storing anything once the buffer holds `N` characters.
    pub fn push(&mut self, byte: u8) -> Result<(), CapacityExceeded> {
        self.buf.push(byte).map_err(|_| CapacityExceeded)
    }

    /// Buffered characters
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Take the buffered line, leaving the buffer empty
    pub fn take(&mut self) -> Vec<u8, N> {
        core::mem::take(&mut self.buf)
    }
}

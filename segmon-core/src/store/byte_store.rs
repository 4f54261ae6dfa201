//! Byte store with write-completion handshake
//!
//! An EEPROM write cycle runs for milliseconds after the hardware accepts
//! it. No read or write may start while one is in flight, so every
//! operation first busy-waits on the device's write-in-progress flag. The
//! wait is lazy: `write` returns as soon as the new cycle is started and
//! the next operation pays for its completion.

use segmon_hal::{Address, EepromDevice};

/// Byte-addressed access to an EEPROM device
///
/// Addresses must be below [`ByteStore::capacity`]; validating operator
/// input is the caller's job.
#[derive(Debug)]
pub struct ByteStore<D> {
    device: D,
}

impl<D: EepromDevice> ByteStore<D> {
    /// Create a byte store over an EEPROM device
    pub fn new(device: D) -> Self {
        Self { device }
    }

    /// Size of the underlying device in bytes
    pub fn capacity(&self) -> usize {
        self.device.capacity()
    }

    /// Block until any in-flight write has completed
    ///
    /// Returns the number of busy polls spent waiting. Call this before
    /// relying on a just-written value when no further operation follows.
    pub fn wait_ready(&mut self) -> Result<u32, D::Error> {
        let mut polls = 0u32;
        while self.device.write_in_progress()? {
            polls = polls.saturating_add(1);
            core::hint::spin_loop();
        }
        Ok(polls)
    }

    /// Read the byte at `address`
    pub fn read(&mut self, address: Address) -> Result<u8, D::Error> {
        debug_assert!((address as usize) < self.capacity());
        self.wait_ready()?;
        self.device.read_byte(address)
    }

    /// Start writing `value` at `address`
    ///
    /// Waits for any previous write, then returns once the device has
    /// accepted the new one.
    pub fn write(&mut self, address: Address, value: u8) -> Result<(), D::Error> {
        debug_assert!((address as usize) < self.capacity());
        self.wait_ready()?;
        self.device.begin_write(address, value)
    }

    /// Get access to the underlying device
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Get mutable access to the underlying device
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Consume the store and return the device
    pub fn into_inner(self) -> D {
        self.device
    }
}

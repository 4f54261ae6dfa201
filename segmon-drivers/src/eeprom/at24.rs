//! 24xx-series I2C EEPROM
//!
//! Covers the 24xx32 through 24xx512 parts: two address bytes, one byte
//! per write. The device stops acknowledging its bus address while an
//! internal write cycle runs, which is used as the write-in-progress flag.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use segmon_hal::{Address, EepromDevice};

/// Bus address with A2..A0 tied low
pub const DEFAULT_ADDRESS: u8 = 0x50;

/// 24xx EEPROM on an I2C bus
pub struct At24<I2C> {
    i2c: I2C,
    address: u8,
    capacity: usize,
}

impl<I2C: I2c> At24<I2C> {
    /// Create a driver for a device of `capacity` bytes at [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C, capacity: usize) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS, capacity)
    }

    /// Create a driver for a device at a specific bus address
    pub fn with_address(i2c: I2C, address: u8, capacity: usize) -> Self {
        Self {
            i2c,
            address,
            capacity,
        }
    }

    /// Bus address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> EepromDevice for At24<I2C> {
    type Error = I2C::Error;

    fn capacity(&self) -> usize {
        self.capacity
    }

    /// Any address NACK reads as busy. A device missing from the bus is
    /// indistinguishable from one stuck in a write cycle, so callers that
    /// spin on this never return in that case.
    fn write_in_progress(&mut self) -> Result<bool, Self::Error> {
        // Address-only write: sets the internal pointer, starts no cycle
        match self.i2c.write(self.address, &[0, 0]) {
            Ok(()) => Ok(false),
            Err(e) if matches!(e.kind(), ErrorKind::NoAcknowledge(_)) => Ok(true),
            Err(e) => Err(e),
        }
    }

    fn begin_write(&mut self, address: Address, value: u8) -> Result<(), Self::Error> {
        let [hi, lo] = address.to_be_bytes();
        self.i2c.write(self.address, &[hi, lo, value])
    }

    fn read_byte(&mut self, address: Address) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &address.to_be_bytes(), &mut buf)?;
        Ok(buf[0])
    }
}

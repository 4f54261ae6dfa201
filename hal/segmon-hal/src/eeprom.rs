//! EEPROM device abstraction
//!
//! Models a byte-addressed EEPROM whose writes take a hardware write cycle
//! to complete. The device only exposes the raw primitives; sequencing
//! (never starting an operation while a write is still in flight) is the
//! job of the byte store built on top of it.

/// Byte address, relative to the start of the EEPROM
pub type Address = u16;

/// Byte-addressed EEPROM with a write-busy handshake
///
/// Implementations map these calls onto the hardware: control registers on
/// an MCU with on-chip EEPROM, or bus transactions for an external part.
pub trait EepromDevice {
    /// Error type for device access (bus faults, etc.)
    type Error;

    /// Size of the device in bytes
    fn capacity(&self) -> usize;

    /// Poll the write handshake
    ///
    /// Returns `Ok(true)` while a previously started write cycle is still
    /// running.
    fn write_in_progress(&mut self) -> Result<bool, Self::Error>;

    /// Start a write cycle
    ///
    /// Returns once the hardware has accepted the write. Completion is
    /// observed through [`EepromDevice::write_in_progress`]. Must not be
    /// called while a write is in progress.
    fn begin_write(&mut self, address: Address, value: u8) -> Result<(), Self::Error>;

    /// Read a single byte
    ///
    /// Must not be called while a write is in progress.
    fn read_byte(&mut self, address: Address) -> Result<u8, Self::Error>;
}

impl<T: EepromDevice + ?Sized> EepromDevice for &mut T {
    type Error = T::Error;

    fn capacity(&self) -> usize {
        T::capacity(self)
    }

    fn write_in_progress(&mut self) -> Result<bool, Self::Error> {
        T::write_in_progress(self)
    }

    fn begin_write(&mut self, address: Address, value: u8) -> Result<(), Self::Error> {
        T::begin_write(self, address, value)
    }

    fn read_byte(&mut self, address: Address) -> Result<u8, Self::Error> {
        T::read_byte(self, address)
    }
}

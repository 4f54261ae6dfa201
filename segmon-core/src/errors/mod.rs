//! Error store
//!
//! Faults detected while serving operator commands are not returned to the
//! caller of the menu. They are recorded in an error store and queried later
//! with the `ge` command.

pub mod latch;

pub use latch::ErrorLatch;

/// Error codes surfaced to the operator
///
/// The numeric value is what `ge` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ErrorCode {
    /// No error recorded
    #[default]
    NoError = 0,
    /// Address is in the segment table region or past the end of the EEPROM
    AddressOutOfRange = 1,
    /// Character has no entry in the segment table
    InvalidCharacter = 2,
    /// Address entry is not a decimal number
    InvalidNumber = 3,
    /// The EEPROM device reported a fault
    StorageFault = 4,
}

impl ErrorCode {
    /// Get the code as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Check if this code represents an actual fault
    pub fn is_error(self) -> bool {
        self != ErrorCode::NoError
    }
}

/// Error store collaborator
///
/// Process-wide facility shared with the rest of the firmware; the menu only
/// needs these three operations.
pub trait ErrorStore {
    /// Current error code
    fn get_error(&self) -> ErrorCode;

    /// Acknowledge and clear the current error
    fn clear_error(&mut self);

    /// Record an error
    fn report_error(&mut self, code: ErrorCode);
}

impl<T: ErrorStore + ?Sized> ErrorStore for &mut T {
    fn get_error(&self) -> ErrorCode {
        T::get_error(self)
    }

    fn clear_error(&mut self) {
        T::clear_error(self)
    }

    fn report_error(&mut self, code: ErrorCode) {
        T::report_error(self, code)
    }
}

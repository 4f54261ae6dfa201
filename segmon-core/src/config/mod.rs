//! Configuration
//!
//! The monitor has no persisted configuration: everything is fixed at build
//! time. Console constants live here, the EEPROM partitioning in [`layout`].

pub mod layout;

pub use layout::{AddressOutOfRange, Layout};

/// EEPROM size in bytes (4 KiB, e.g. ATmega2560 on-chip or a 24xx32)
pub const EEPROM_SIZE: usize = 4096;

/// Maximum number of characters buffered for one command line
///
/// Characters typed past this are dropped without echo.
pub const LINE_CAPACITY: usize = 20;

/// Character that completes a command line (carriage return)
pub const LINE_TERMINATOR: u8 = b'\r';

/// Sequence that moves the terminal cursor to a new line
pub const NEWLINE: &str = "\n\r";

/// Prompt printed whenever the menu returns to the top level
pub const PROMPT: &str = "cmd> ";

/// Capacity of the output buffer produced by one menu step
pub const OUTPUT_CAPACITY: usize = 128;

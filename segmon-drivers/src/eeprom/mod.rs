//! EEPROM device drivers

mod at24;

pub use at24::{At24, DEFAULT_ADDRESS};

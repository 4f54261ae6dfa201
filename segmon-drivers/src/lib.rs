//! Hardware driver implementations
//!
//! Concrete implementations of the segmon-hal traits on top of
//! `embedded-hal` 1.0 buses and pins:
//!
//! - 24xx-series I2C EEPROM with ACK polling
//! - Heartbeat LED

#![no_std]
#![deny(unsafe_code)]

pub mod eeprom;
pub mod heartbeat;

pub use eeprom::At24;
pub use heartbeat::Heartbeat;

//! Segmon Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the monitor core is
//! written against. Board crates (or the simulated devices used in host
//! tests) implement them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  segmon-firmware (board binary)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segmon-core (menu, table, byte store)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segmon-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ segmon-drivers│       │  SimEeprom    │
//! │  (At24, I2C)  │       │  (host tests) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`eeprom::EepromDevice`] - Byte-addressed persistent storage with a
//!   write-completion handshake
//! - [`uart::SerialRx`], [`uart::SerialTx`] - Serial console

#![no_std]
#![deny(unsafe_code)]

pub mod eeprom;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use eeprom::{Address, EepromDevice};
pub use uart::{SerialRx, SerialTx, UartConfig};

#[cfg(feature = "embedded-io")]
pub use uart::IoSerial;

//! Persistent byte storage
//!
//! [`ByteStore`] wraps an [`EepromDevice`](segmon_hal::EepromDevice) and
//! enforces the write-completion handshake. [`SimEeprom`] is a simulated
//! device with configurable write latency for host tests.

pub mod byte_store;
pub mod sim;

pub use byte_store::ByteStore;
pub use sim::{SimEeprom, SimStats};

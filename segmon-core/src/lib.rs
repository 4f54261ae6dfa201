//! Board-agnostic core logic for the EEPROM monitor firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Byte store with the EEPROM write-completion handshake
//! - Character to segment-pattern table, lookup and provisioning
//! - Error store collaborator and the latching implementation
//! - EEPROM layout and console constants
//! - Serial command menu state machine

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod menu;
pub mod segment;
pub mod store;

//! Character to segment-pattern table
//!
//! The table lives in the low end of the EEPROM rather than in RAM or
//! program memory. [`table`] knows its encoding (two bytes per character,
//! little-endian, four nibbles per pattern); [`provision`] writes it.

pub mod provision;
pub mod table;

pub use provision::{is_provisioned, provision, table_image};
pub use table::{
    LookupError, SegmentEntry, SegmentTable, ENTRY_COUNT, ENTRY_SIZE, FIRST_CHAR, LAST_CHAR,
    SEGMENT_PATTERNS, TABLE_SIZE,
};

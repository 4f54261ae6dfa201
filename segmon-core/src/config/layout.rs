//! EEPROM layout
//!
//! ```text
//! 0              table_size                           eeprom_size
//! ├──────────────┼────────────────────────────────────┤
//! │ segment table│ scratch area (operator wc / rc)    │
//! └──────────────┴────────────────────────────────────┘
//! ```

use core::ops::Range;

use segmon_hal::Address;

use crate::segment::TABLE_SIZE;

/// Address falls outside the scratch area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressOutOfRange;

/// Partitioning of the EEPROM between the segment table and scratch bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    eeprom_size: usize,
    table_size: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(super::EEPROM_SIZE)
    }
}

impl Layout {
    /// Layout for an EEPROM of `eeprom_size` bytes holding the standard table
    pub const fn new(eeprom_size: usize) -> Self {
        Self::with_table_size(eeprom_size, TABLE_SIZE)
    }

    /// Layout with an explicit table size
    pub const fn with_table_size(eeprom_size: usize, table_size: usize) -> Self {
        Self {
            eeprom_size,
            table_size,
        }
    }

    /// Total EEPROM size in bytes
    pub const fn eeprom_size(&self) -> usize {
        self.eeprom_size
    }

    /// Bytes reserved for the segment table
    pub const fn table_size(&self) -> usize {
        self.table_size
    }

    /// Addresses free for operator reads and writes
    pub const fn scratch_region(&self) -> Range<usize> {
        self.table_size..self.eeprom_size
    }

    /// First scratch address
    pub const fn first_scratch(&self) -> usize {
        self.table_size
    }

    /// Last valid EEPROM address
    pub const fn last_address(&self) -> usize {
        self.eeprom_size.saturating_sub(1)
    }

    /// Validate an operator-supplied address against the scratch area
    pub fn check_scratch(&self, address: u32) -> Result<Address, AddressOutOfRange> {
        let address = address as usize;
        if !self.scratch_region().contains(&address) {
            return Err(AddressOutOfRange);
        }
        Address::try_from(address).map_err(|_| AddressOutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = Layout::default();
        assert_eq!(layout.eeprom_size(), 4096);
        assert_eq!(layout.table_size(), 110);
        assert_eq!(layout.scratch_region(), 110..4096);
        assert_eq!(layout.last_address(), 4095);
    }

    #[test]
    fn test_table_region_rejected() {
        let layout = Layout::default();
        assert_eq!(layout.check_scratch(0), Err(AddressOutOfRange));
        assert_eq!(layout.check_scratch(109), Err(AddressOutOfRange));
        assert_eq!(layout.check_scratch(110), Ok(110));
    }

    #[test]
    fn test_past_end_rejected() {
        let layout = Layout::default();
        assert_eq!(layout.check_scratch(4095), Ok(4095));
        assert_eq!(layout.check_scratch(4096), Err(AddressOutOfRange));
        assert_eq!(layout.check_scratch(u32::MAX), Err(AddressOutOfRange));
    }
}

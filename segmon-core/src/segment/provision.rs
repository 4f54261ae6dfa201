//! Segment table provisioning
//!
//! Populates the low end of the EEPROM with the compiled table. Only
//! cells that differ are rewritten, so running it on every boot costs one
//! verification pass and no write cycles once the table is in place.

use segmon_hal::{Address, EepromDevice};

use super::table::{ENTRY_COUNT, ENTRY_SIZE, SEGMENT_PATTERNS, TABLE_SIZE};
use crate::store::ByteStore;

/// The table as it is laid out in the EEPROM
pub const fn table_image() -> [u8; TABLE_SIZE] {
    let mut image = [0u8; TABLE_SIZE];
    let mut i = 0;
    while i < ENTRY_COUNT {
        let [low, high] = SEGMENT_PATTERNS[i].to_le_bytes();
        image[i * ENTRY_SIZE] = low;
        image[i * ENTRY_SIZE + 1] = high;
        i += 1;
    }
    image
}

/// Check whether the store already holds the table
pub fn is_provisioned<D: EepromDevice>(store: &mut ByteStore<D>) -> Result<bool, D::Error> {
    for (address, &expected) in table_image().iter().enumerate() {
        if store.read(address as Address)? != expected {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Write the table into the store
///
/// Rewrites only the bytes that differ and waits for the last write to
/// complete. Returns the number of bytes written.
pub fn provision<D: EepromDevice>(store: &mut ByteStore<D>) -> Result<usize, D::Error> {
    let mut written = 0;

    for (address, &expected) in table_image().iter().enumerate() {
        let address = address as Address;
        if store.read(address)? != expected {
            store.write(address, expected)?;
            written += 1;
        }
    }

    store.wait_ready()?;
    Ok(written)
}

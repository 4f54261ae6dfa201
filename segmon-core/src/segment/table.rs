//! Segment table encoding and lookup
//!
//! Each pattern is 16 bits, split into four nibbles. Nibble 0 (low byte,
//! low nibble) goes to the lowest display-driver register, nibble 3 (high
//! byte, high nibble) to the highest. Entries are stored in character order
//! starting at `'*'`, low byte at the lower address. Downstream display
//! drivers depend on this packing bit for bit.

use core::fmt;

use segmon_hal::{Address, EepromDevice};

use crate::store::ByteStore;

/// First character with a table entry
pub const FIRST_CHAR: u8 = b'*';

/// Last character with a table entry
pub const LAST_CHAR: u8 = b'`';

/// Number of table entries
pub const ENTRY_COUNT: usize = (LAST_CHAR - FIRST_CHAR) as usize + 1;

/// Bytes per table entry
pub const ENTRY_SIZE: usize = 2;

/// Bytes the table occupies in the EEPROM
pub const TABLE_SIZE: usize = ENTRY_COUNT * ENTRY_SIZE;

/// EEPROM address of the first entry
const TABLE_BASE: Address = 0;

/// Segment patterns for `'*'` through `` '`' ``
pub const SEGMENT_PATTERNS: [u16; ENTRY_COUNT] = [
    0xEAA8, // '*'
    0x2A80, // '+'
    0x4000, // ','
    0x0A00, // '-'
    0x2000, // '.'
    0x4008, // '/'
    0x5559, // '0'
    0x0118, // '1'
    0x1E11, // '2'
    0x1B11, // '3'
    0x0B50, // '4'
    0x1B41, // '5'
    0x1F41, // '6'
    0x0111, // '7'
    0x1F51, // '8'
    0x1B51, // '9'
    0x2080, // ':'
    0x4080, // ';'
    0x8008, // '<'
    0x1001, // '='
    0x4020, // '>'
    0x2811, // '?'
    // No glyph for '@'; shows an hourglass. Meaning undocumented, keep the value.
    0xD029, // '@'
    0x0F51, // 'A'
    0x3991, // 'B'
    0x1441, // 'C'
    0x3191, // 'D'
    0x1E41, // 'E'
    0x0E41, // 'F'
    0x1D41, // 'G'
    0x0F50, // 'H'
    0x2080, // 'I'
    0x1510, // 'J'
    0x8648, // 'K'
    0x1440, // 'L'
    0x0578, // 'M'
    0x8570, // 'N'
    0x1551, // 'O'
    0x0E51, // 'P'
    0x9551, // 'Q'
    0x8E51, // 'R'
    0x9021, // 'S'
    0x2081, // 'T'
    0x1550, // 'U'
    0x4448, // 'V'
    0xC550, // 'W'
    0xC028, // 'X'
    0x2028, // 'Y'
    0x5009, // 'Z'
    0x1441, // '['
    0x8020, // '\'
    0x1111, // ']'
    0xC000, // '^'
    0x1000, // '_'
    0x0008, // '`'
];

/// Errors from a table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LookupError<E> {
    /// Character has no table entry
    InvalidCharacter,
    /// Reading the entry from the byte store failed
    Storage(E),
}

/// A character and its segment pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentEntry {
    /// Character (lower case folded to upper case)
    pub character: u8,
    /// 16-bit segment pattern
    pub pattern: u16,
}

impl SegmentEntry {
    /// Entry for a blank display (space)
    pub const fn blank() -> Self {
        Self {
            character: b' ',
            pattern: 0,
        }
    }

    /// Rebuild an entry from its two stored bytes
    pub const fn from_bytes(character: u8, low: u8, high: u8) -> Self {
        Self {
            character,
            pattern: u16::from_le_bytes([low, high]),
        }
    }

    /// Byte stored at the lower address
    pub const fn low_byte(&self) -> u8 {
        self.pattern.to_le_bytes()[0]
    }

    /// Byte stored at the higher address
    pub const fn high_byte(&self) -> u8 {
        self.pattern.to_le_bytes()[1]
    }

    /// Display-driver register values, nibble 0 first
    pub const fn nibbles(&self) -> [u8; 4] {
        let low = self.low_byte();
        let high = self.high_byte();
        [low & 0x0F, (low >> 4) & 0x0F, high & 0x0F, (high >> 4) & 0x0F]
    }

    /// Check if no segment is lit
    pub const fn is_blank(&self) -> bool {
        self.pattern == 0
    }
}

/// Renders the nibbles as hex digits, nibble 3 first (e.g. `0F51`)
impl fmt::Display for SegmentEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [n0, n1, n2, n3] = self.nibbles();
        write!(f, "{:X}{:X}{:X}{:X}", n3, n2, n1, n0)
    }
}

/// Segment table resident in the byte store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentTable;

impl SegmentTable {
    /// Create a handle to the EEPROM-resident table
    pub const fn new() -> Self {
        SegmentTable
    }

    /// Bytes the table occupies in the byte store
    pub const fn table_size(&self) -> usize {
        TABLE_SIZE
    }

    /// Fold lower case into the table range
    pub const fn fold(character: u8) -> u8 {
        if character.is_ascii_lowercase() {
            character - 0x20
        } else {
            character
        }
    }

    /// Table index of a character, if it has an entry
    pub const fn index_of(character: u8) -> Option<usize> {
        let folded = Self::fold(character);
        if folded >= FIRST_CHAR && folded <= LAST_CHAR {
            Some((folded - FIRST_CHAR) as usize)
        } else {
            None
        }
    }

    /// Address of the low byte of a character's entry
    pub const fn entry_address(character: u8) -> Option<Address> {
        match Self::index_of(character) {
            Some(index) => Some(TABLE_BASE + (index * ENTRY_SIZE) as Address),
            None => None,
        }
    }

    /// Compiled-in pattern for a character, without touching the store
    pub const fn pattern(character: u8) -> Option<u16> {
        if character == b' ' {
            return Some(0);
        }
        match Self::index_of(character) {
            Some(index) => Some(SEGMENT_PATTERNS[index]),
            None => None,
        }
    }

    /// Look up a character's entry in the byte store
    ///
    /// A space yields the blank pattern without any store access. Lower
    /// case letters fold to upper case. Anything outside `'*'..='`'` and
    /// `'a'..='z'` is [`LookupError::InvalidCharacter`].
    pub fn lookup<D: EepromDevice>(
        &self,
        store: &mut ByteStore<D>,
        character: u8,
    ) -> Result<SegmentEntry, LookupError<D::Error>> {
        if character == b' ' {
            return Ok(SegmentEntry::blank());
        }

        let address = Self::entry_address(character).ok_or(LookupError::InvalidCharacter)?;
        let low = store.read(address).map_err(LookupError::Storage)?;
        let high = store.read(address + 1).map_err(LookupError::Storage)?;

        Ok(SegmentEntry::from_bytes(Self::fold(character), low, high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::provision;
    use crate::store::SimEeprom;

    fn provisioned_store() -> ByteStore<SimEeprom<4096>> {
        let mut store = ByteStore::new(SimEeprom::with_latency(1));
        provision(&mut store).unwrap();
        store.device_mut().reset_stats();
        store
    }

    #[test]
    fn test_table_dimensions() {
        assert_eq!(ENTRY_COUNT, 55);
        assert_eq!(TABLE_SIZE, 110);
        assert_eq!(SegmentTable::new().table_size(), 110);
    }

    #[test]
    fn test_entry_addresses() {
        assert_eq!(SegmentTable::entry_address(b'*'), Some(0));
        assert_eq!(SegmentTable::entry_address(b'A'), Some(46));
        assert_eq!(SegmentTable::entry_address(b'a'), Some(46));
        assert_eq!(SegmentTable::entry_address(b'`'), Some(108));
        assert_eq!(SegmentTable::entry_address(b'{'), None);
        assert_eq!(SegmentTable::entry_address(b' '), None);
    }

    #[test]
    fn test_lookup_a() {
        let mut store = provisioned_store();
        let entry = SegmentTable::new().lookup(&mut store, b'A').unwrap();
        assert_eq!(entry.character, b'A');
        assert_eq!(entry.pattern, 0x0F51);
        assert_eq!(entry.nibbles(), [0x1, 0x5, 0xF, 0x0]);
    }

    #[test]
    fn test_lookup_reads_two_bytes() {
        let mut store = provisioned_store();
        SegmentTable::new().lookup(&mut store, b'7').unwrap();
        assert_eq!(store.device().stats().reads, 2);
    }

    #[test]
    fn test_space_is_blank_without_store_access() {
        let mut store = provisioned_store();
        let entry = SegmentTable::new().lookup(&mut store, b' ').unwrap();
        assert!(entry.is_blank());
        assert_eq!(entry.nibbles(), [0; 4]);
        assert_eq!(store.device().stats().reads, 0);
    }

    #[test]
    fn test_lower_case_folds() {
        let mut store = provisioned_store();
        let table = SegmentTable::new();
        let lower = table.lookup(&mut store, b'q').unwrap();
        let upper = table.lookup(&mut store, b'Q').unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.pattern, 0x9551);
    }

    #[test]
    fn test_invalid_characters() {
        let mut store = provisioned_store();
        let table = SegmentTable::new();
        for c in [b'!', b')', b'{', b'~', 0x00, 0x7F, 0xC3] {
            assert_eq!(
                table.lookup(&mut store, c),
                Err(LookupError::InvalidCharacter)
            );
        }
        assert_eq!(store.device().stats().reads, 0);
    }

    #[test]
    fn test_hourglass_pattern_kept() {
        assert_eq!(SegmentTable::pattern(b'@'), Some(0xD029));
    }

    #[test]
    fn test_display_order() {
        let entry = SegmentEntry {
            character: b'A',
            pattern: 0x0F51,
        };
        let mut text: heapless::String<8> = heapless::String::new();
        core::fmt::write(&mut text, format_args!("{}", entry)).unwrap();
        assert_eq!(text.as_str(), "0F51");
    }
}

//! Decimal address entry

/// Errors from parsing an operator-entered address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseAddressError {
    /// Nothing but spaces was entered
    Empty,
    /// Entry contains something other than decimal digits
    InvalidDigit,
    /// Value does not fit in 32 bits
    Overflow,
}

/// Parse a decimal address
///
/// Leading and trailing spaces are ignored. Everything in between must be
/// a decimal digit.
pub fn parse_address(line: &[u8]) -> Result<u32, ParseAddressError> {
    let digits = trim_spaces(line);
    if digits.is_empty() {
        return Err(ParseAddressError::Empty);
    }

    let mut value: u32 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return Err(ParseAddressError::InvalidDigit);
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(byte - b'0')))
            .ok_or(ParseAddressError::Overflow)?;
    }

    Ok(value)
}

fn trim_spaces(mut bytes: &[u8]) -> &[u8] {
    while let [b' ', rest @ ..] = bytes {
        bytes = rest;
    }
    while let [rest @ .., b' '] = bytes {
        bytes = rest;
    }
    bytes
}

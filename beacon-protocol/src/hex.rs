//! ASCII hexadecimal codec
//!
//! Decoders accept upper- and lowercase digits and read exactly their field
//! width; encoders always produce uppercase, most significant nibble first.

/// Hex decoding failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HexError {
    /// A byte in the field is not a hex digit
    InvalidDigit,
    /// The input ends before the field does
    Truncated,
}

/// Decode one hex digit
pub const fn decode_nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 0x0A),
        b'a'..=b'f' => Some(digit - b'a' + 0x0A),
        _ => None,
    }
}

/// Decode two hex digits, high nibble first
pub fn decode_byte(digits: &[u8]) -> Result<u8, HexError> {
    let field = digits.get(..2).ok_or(HexError::Truncated)?;
    Ok(decode_field(field)? as u8)
}

/// Decode four hex digits, most significant nibble first
pub fn decode_word(digits: &[u8]) -> Result<u16, HexError> {
    let field = digits.get(..4).ok_or(HexError::Truncated)?;
    decode_field(field)
}

fn decode_field(field: &[u8]) -> Result<u16, HexError> {
    field.iter().try_fold(0u16, |acc, &digit| {
        let nibble = decode_nibble(digit).ok_or(HexError::InvalidDigit)?;
        Ok((acc << 4) | nibble as u16)
    })
}

/// Encode the low nibble of `value` as an uppercase hex digit
pub const fn encode_nibble(value: u8) -> u8 {
    let nibble = value & 0x0F;
    if nibble < 0x0A {
        b'0' + nibble
    } else {
        b'A' + nibble - 0x0A
    }
}

/// Encode a byte as two hex digits
pub const fn encode_byte(value: u8) -> [u8; 2] {
    [encode_nibble(value >> 4), encode_nibble(value)]
}

/// Encode a word as four hex digits
pub const fn encode_word(value: u16) -> [u8; 4] {
    [
        encode_nibble((value >> 12) as u8),
        encode_nibble((value >> 8) as u8),
        encode_nibble((value >> 4) as u8),
        encode_nibble(value as u8),
    ]
}

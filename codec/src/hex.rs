//! `#AARRGGBB` hex string formatting and parsing.

use crate::{color::ArgbColor, Error, Result};

/// Number of hex digits in a full ARGB color.
const HEX_DIGITS: usize = 8;

/// Format a color as `#` followed by 8 uppercase hex digits in alpha, red, green, blue order.
#[must_use]
pub fn to_hex(color: ArgbColor) -> String {
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        color.alpha, color.red, color.green, color.blue
    )
}

/// Parse an `AARRGGBB` string with an optional leading `#`.
///
/// The whole string must match: exactly 8 hex digits, case-insensitive, with nothing before
/// or after them.
pub fn from_hex(text: &str) -> Result<ArgbColor> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    let len = digits.chars().count();
    if len != HEX_DIGITS {
        return Err(Error::InvalidHexLength(len));
    }

    let mut value = 0u32;
    for (position, digit) in digits.chars().enumerate() {
        let nibble = digit
            .to_digit(16)
            .ok_or(Error::InvalidHexDigit { digit, position })?;
        value = (value << 4) | nibble;
    }
    Ok(ArgbColor::unpack(value))
}

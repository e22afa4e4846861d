//! Normalization of raw text typed into the channel and integer fields.

use crate::{Error, Result};
use std::num::IntErrorKind;

/// The meaning of text typed into the packed integer field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub enum IntegerInput {
    /// The field was cleared, which resets the color to all zeroes.
    Empty,
    /// A packed ARGB value.
    Value(u32),
}

fn parse_decimal(text: &str) -> Result<i64> {
    text.parse::<i64>().map_err(|source| Error::InvalidInteger {
        text: text.to_string(),
        source,
    })
}

/// Parse a base-10 channel value. Values outside `0..=255` are rejected rather than clamped.
pub fn parse_channel(text: &str) -> Result<u8> {
    let value = parse_decimal(text.trim())?;
    u8::try_from(value).map_err(|_| Error::ChannelOutOfRange(value))
}

/// Reduce a signed decimal string that overflowed `i64` modulo 2^32.
fn wrap_decimal(text: &str) -> u32 {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let value = digits.bytes().fold(0u32, |value, digit| {
        value.wrapping_mul(10).wrapping_add(u32::from(digit - b'0'))
    });
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Parse the packed integer field.
///
/// Any decimal integer is accepted and wrapped modulo 2^32, so both the signed (`-1`) and
/// unsigned (`4294967295`) spellings of a color land on the same value.
pub fn parse_integer(text: &str) -> Result<IntegerInput> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(IntegerInput::Empty);
    }
    match text.parse::<i64>() {
        // Two's complement truncation to the low 32 bits.
        Ok(value) => Ok(IntegerInput::Value(value as u32)),
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(IntegerInput::Value(wrap_decimal(text)))
        }
        Err(source) => Err(Error::InvalidInteger {
            text: text.to_string(),
            source,
        }),
    }
}

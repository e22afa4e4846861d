//! Color types and methods.

use crate::{hex, Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Convert separate ARGB values to a single u32.
///
/// Each channel is masked to its low byte, so out-of-range values never spill into a
/// neighbouring channel.
#[inline]
#[must_use]
pub fn argb_to_u32(a: u32, r: u32, g: u32, b: u32) -> u32 {
    ((a & 0xFF) << 24) | ((r & 0xFF) << 16) | ((g & 0xFF) << 8) | (b & 0xFF)
}

/// Convert a single u32 into separate ARGB values.
#[inline]
#[must_use]
pub fn u32_to_argb(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// One of the four 8-bit channels of an [ArgbColor].
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
#[must_use]
pub enum Channel {
    #[display(fmt = "alpha")]
    Alpha,
    #[display(fmt = "red")]
    Red,
    #[display(fmt = "green")]
    Green,
    #[display(fmt = "blue")]
    Blue,
}

impl Channel {
    /// All channels in packing order, most significant first.
    pub const ALL: [Self; 4] = [Self::Alpha, Self::Red, Self::Green, Self::Blue];
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "alpha" => Ok(Self::Alpha),
            "r" | "red" => Ok(Self::Red),
            "g" | "green" => Ok(Self::Green),
            "b" | "blue" => Ok(Self::Blue),
            _ => Err(Error::UnknownChannel(s.to_string())),
        }
    }
}

/// A 32-bit color with 8 bits each of alpha, red, green and blue.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct ArgbColor {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ArgbColor {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Pack the channels into a single unsigned value, alpha in the most significant byte.
    #[inline]
    #[must_use]
    pub fn pack(self) -> u32 {
        argb_to_u32(
            self.alpha.into(),
            self.red.into(),
            self.green.into(),
            self.blue.into(),
        )
    }

    /// Split a packed value back into its channels.
    #[inline]
    pub fn unpack(value: u32) -> Self {
        let [alpha, red, green, blue] = u32_to_argb(value);
        Self::new(alpha, red, green, blue)
    }

    /// The packed value reinterpreted as a signed integer, as used by Android's `@ColorInt`.
    #[inline]
    #[must_use]
    pub fn to_signed(self) -> i32 {
        i32::from_be_bytes(self.pack().to_be_bytes())
    }

    #[inline]
    pub fn from_signed(value: i32) -> Self {
        Self::unpack(u32::from_be_bytes(value.to_be_bytes()))
    }

    #[inline]
    #[must_use]
    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Alpha => self.alpha,
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    #[inline]
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Alpha => self.alpha = value,
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }

    /// Format as `#AARRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        hex::to_hex(self)
    }

    /// A CSS `rgba()` descriptor for previewing the color, e.g. `rgba(255, 0, 0, 1)`.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.red,
            self.green,
            self.blue,
            f64::from(self.alpha) / 255.0
        )
    }
}

impl From<u32> for ArgbColor {
    fn from(value: u32) -> Self {
        Self::unpack(value)
    }
}

impl From<ArgbColor> for u32 {
    fn from(color: ArgbColor) -> Self {
        color.pack()
    }
}

impl fmt::Display for ArgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ArgbColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hex::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_is_unsigned() {
        assert_eq!(ArgbColor::new(255, 255, 0, 0).pack(), 0xFFFF_0000);
        assert_eq!(ArgbColor::new(255, 255, 255, 255).pack(), u32::MAX);
        assert_eq!(ArgbColor::TRANSPARENT.pack(), 0);
    }

    #[test]
    fn unpack_channels() {
        assert_eq!(
            ArgbColor::unpack(0x8080_FF80),
            ArgbColor::new(128, 128, 255, 128)
        );
        assert_eq!(ArgbColor::unpack(0x0102_0304), ArgbColor::new(1, 2, 3, 4));
    }

    #[test]
    fn argb_to_u32_masks_channels() {
        assert_eq!(argb_to_u32(0x1FF, 0x100, 0x2AB, 0xFFFF_FF01), 0xFF00_AB01);
        assert_eq!(u32_to_argb(0xFF00_AB01), [0xFF, 0x00, 0xAB, 0x01]);
    }

    #[test]
    fn channel_round_trip() {
        for channel in Channel::ALL {
            for value in 0..=u8::MAX {
                let mut color = ArgbColor::new(17, 34, 51, 68);
                color.set_channel(channel, value);
                assert_eq!(color.channel(channel), value);
                assert_eq!(ArgbColor::unpack(color.pack()), color);
            }
        }
    }

    #[test]
    fn packed_round_trip() {
        let mut value = 0u32;
        loop {
            assert_eq!(ArgbColor::unpack(value).pack(), value);
            value = match value.checked_add(0x0001_0F0B) {
                Some(value) => value,
                None => break,
            };
        }
        assert_eq!(ArgbColor::unpack(u32::MAX).pack(), u32::MAX);
    }

    #[test]
    fn signed_interpretation() {
        assert_eq!(ArgbColor::new(255, 255, 0, 0).to_signed(), -65536);
        assert_eq!(ArgbColor::new(255, 0, 0, 0).to_signed(), -16_777_216);
        assert_eq!(ArgbColor::new(0, 0, 0, 255).to_signed(), 255);
        assert_eq!(ArgbColor::from_signed(-1), ArgbColor::new(255, 255, 255, 255));
    }

    #[test]
    fn css_descriptor() {
        assert_eq!(
            ArgbColor::new(255, 255, 0, 0).to_css(),
            "rgba(255, 0, 0, 1)"
        );
        assert_eq!(ArgbColor::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
        assert_eq!(
            ArgbColor::new(128, 128, 255, 128).to_css(),
            "rgba(128, 255, 128, 0.5019607843137255)"
        );
    }

    #[test]
    fn parse_channel_names() {
        assert_eq!("alpha".parse::<Channel>(), Ok(Channel::Alpha));
        assert_eq!("R".parse::<Channel>(), Ok(Channel::Red));
        assert_eq!("Green".parse::<Channel>(), Ok(Channel::Green));
        assert_eq!("b".parse::<Channel>(), Ok(Channel::Blue));
        assert_eq!(
            "hue".parse::<Channel>(),
            Err(Error::UnknownChannel("hue".into()))
        );
        assert_eq!(Channel::Blue.to_string(), "blue");
    }
}

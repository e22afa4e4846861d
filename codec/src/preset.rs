//! Named color presets.

use crate::{color::ArgbColor, Error, Result};
use serde::Serialize;

/// A named, immutable color offered for one-click selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[must_use]
pub struct Preset {
    pub name: &'static str,
    pub color: ArgbColor,
}

const fn preset(name: &'static str, alpha: u8, red: u8, green: u8, blue: u8) -> Preset {
    Preset {
        name,
        color: ArgbColor::new(alpha, red, green, blue),
    }
}

// Order is significant, presets are selected by index.
static PRESETS: [Preset; 13] = [
    preset("Red", 255, 255, 0, 0),
    preset("Green", 255, 0, 255, 0),
    preset("Blue", 255, 0, 0, 255),
    preset("Yellow", 255, 255, 255, 0),
    preset("Cyan", 255, 0, 255, 255),
    preset("Magenta", 255, 255, 0, 255),
    preset("White", 255, 255, 255, 255),
    preset("Black", 255, 0, 0, 0),
    preset("Grey", 255, 128, 128, 128),
    preset("Light Grey", 255, 192, 192, 192),
    preset("Dark Grey", 255, 64, 64, 64),
    preset("Transparent", 0, 0, 0, 0),
    preset("Semi-Transparent", 128, 0, 0, 0),
];

impl Preset {
    /// All presets in display order.
    #[inline]
    #[must_use]
    pub fn all() -> &'static [Preset] {
        &PRESETS
    }

    /// The preset at a given position in [Preset::all].
    pub fn get(index: usize) -> Result<&'static Preset> {
        PRESETS
            .get(index)
            .ok_or_else(|| Error::UnknownPreset(index.to_string()))
    }

    /// Resolve a preset identifier to its index. Accepts either a position in [Preset::all] or
    /// a case-insensitive name, e.g. `11` or `transparent`.
    pub fn find(ident: &str) -> Result<usize> {
        let ident = ident.trim();
        if let Ok(index) = ident.parse::<usize>() {
            return Self::get(index).map(|_| index);
        }
        PRESETS
            .iter()
            .position(|preset| preset.name.eq_ignore_ascii_case(ident))
            .ok_or_else(|| Error::UnknownPreset(ident.to_string()))
    }
}

//! Form configuration.

use argb_codec::{color::ArgbColor, hex};
use serde::{Deserialize, Serialize};
use std::env;

/// Color shown when the form is first opened.
pub const DEFAULT_COLOR: ArgbColor = ArgbColor::new(128, 128, 255, 128);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub struct Config {
    pub(crate) initial_color: ArgbColor,
    pub(crate) integer_format: IntegerFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_color: env::var("ARGB_DEFAULT_COLOR")
                .ok()
                .and_then(|color| hex::from_hex(&color).ok())
                .unwrap_or(DEFAULT_COLOR),
            integer_format: if env::var("ARGB_SIGNED_INT").is_ok() {
                IntegerFormat::Signed
            } else {
                IntegerFormat::Unsigned
            },
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_color(mut self, color: ArgbColor) -> Self {
        self.initial_color = color;
        self
    }

    pub fn with_integer_format(mut self, format: IntegerFormat) -> Self {
        self.integer_format = format;
        self
    }

    #[inline]
    pub fn initial_color(&self) -> ArgbColor {
        self.initial_color
    }

    #[inline]
    pub fn integer_format(&self) -> IntegerFormat {
        self.integer_format
    }
}

/// How the packed integer field displays its value.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[must_use]
pub enum IntegerFormat {
    #[default]
    Unsigned,
    /// Android `@ColorInt` style, e.g. opaque red is `-65536`.
    Signed,
}

impl IntegerFormat {
    #[must_use]
    pub fn format(self, color: ArgbColor) -> String {
        match self {
            Self::Unsigned => color.pack().to_string(),
            Self::Signed => color.to_signed().to_string(),
        }
    }
}

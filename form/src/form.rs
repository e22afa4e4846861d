//! The synchronized color form.
//!
//! [ColorForm] owns the canonical [ArgbColor] and the text of the integer and hex fields.
//! Every mutating method ends by re-deriving whichever fields the user was not editing, so
//! the three representations are consistent whenever a method returns.

use crate::config::{Config, IntegerFormat};
use argb_codec::{
    color::{ArgbColor, Channel},
    hex,
    input::{self, IntegerInput},
    preset::Preset,
    Result,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ColorForm {
    color: ArgbColor,
    integer_text: String,
    hex_text: String,
    integer_format: IntegerFormat,
}

impl Default for ColorForm {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ColorForm {
    pub fn new(config: Config) -> Self {
        let mut form = Self {
            color: config.initial_color,
            integer_text: String::new(),
            hex_text: String::new(),
            integer_format: config.integer_format,
        };
        form.sync();
        form
    }

    #[inline]
    pub fn color(&self) -> ArgbColor {
        self.color
    }

    #[inline]
    #[must_use]
    pub fn packed(&self) -> u32 {
        self.color.pack()
    }

    /// Text currently shown in the integer field.
    #[inline]
    #[must_use]
    pub fn integer_text(&self) -> &str {
        &self.integer_text
    }

    /// Text currently shown in the hex field.
    #[inline]
    #[must_use]
    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    /// Re-derive both text fields from the canonical color.
    fn sync(&mut self) {
        self.integer_text = self.integer_format.format(self.color);
        self.hex_text = hex::to_hex(self.color);
    }

    pub fn set_color_and_sync(&mut self, color: ArgbColor) {
        self.color = color;
        self.sync();
    }

    pub fn set_channel_and_sync(&mut self, channel: Channel, value: u8) {
        self.color.set_channel(channel, value);
        self.sync();
    }

    /// Apply text typed into a channel field. Unparsable or out-of-range text leaves the form
    /// untouched.
    pub fn edit_channel(&mut self, channel: Channel, text: &str) -> Result<()> {
        let value = input::parse_channel(text)?;
        self.set_channel_and_sync(channel, value);
        Ok(())
    }

    /// Apply text typed into the integer field.
    ///
    /// Clearing the field resets the color to all zeroes. Unparsable text leaves the form
    /// untouched. Otherwise the field keeps the text as typed while the color and hex field
    /// follow it.
    pub fn edit_integer(&mut self, text: &str) -> Result<()> {
        match input::parse_integer(text)? {
            IntegerInput::Empty => self.set_color_and_sync(ArgbColor::TRANSPARENT),
            IntegerInput::Value(value) => {
                self.color = ArgbColor::unpack(value);
                self.hex_text = hex::to_hex(self.color);
                self.integer_text = text.to_string();
            }
        }
        Ok(())
    }

    /// Apply text typed into the hex field.
    ///
    /// The field always shows the typed text, uppercased, but the color only changes once
    /// the text is a complete `#AARRGGBB` value.
    pub fn edit_hex(&mut self, text: &str) -> Result<()> {
        self.hex_text = text.to_uppercase();
        let color = hex::from_hex(text)?;
        self.color = color;
        self.integer_text = self.integer_format.format(color);
        Ok(())
    }

    /// Overwrite the color with the preset at `index` in [Preset::all].
    pub fn apply_preset(&mut self, index: usize) -> Result<()> {
        let preset = Preset::get(index)?;
        self.set_color_and_sync(preset.color);
        Ok(())
    }

    pub fn view(&self) -> FormView {
        FormView {
            alpha: self.color.alpha,
            red: self.color.red,
            green: self.color.green,
            blue: self.color.blue,
            packed: self.color.pack(),
            integer: self.integer_text.clone(),
            hex: self.hex_text.clone(),
            css: self.color.to_css(),
        }
    }
}

/// Snapshot of everything the presentation layer displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[must_use]
pub struct FormView {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub packed: u32,
    pub integer: String,
    pub hex: String,
    pub css: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use argb_codec::Error;

    fn form() -> ColorForm {
        ColorForm::new(
            Config::new()
                .with_initial_color(crate::config::DEFAULT_COLOR)
                .with_integer_format(IntegerFormat::Unsigned),
        )
    }

    fn assert_synced(form: &ColorForm) {
        assert_eq!(form.hex_text(), form.color().to_hex());
        assert_eq!(form.integer_text(), form.packed().to_string());
    }

    #[test]
    fn initial_state() {
        let form = form();
        assert_eq!(form.color(), ArgbColor::new(128, 128, 255, 128));
        assert_eq!(form.hex_text(), "#8080FF80");
        assert_eq!(form.integer_text(), "2155937664");
        assert_synced(&form);
    }

    #[test]
    fn channel_edit_syncs() {
        let mut form = form();
        assert_eq!(form.edit_channel(Channel::Alpha, "255"), Ok(()));
        assert_eq!(form.edit_channel(Channel::Green, "0"), Ok(()));
        assert_eq!(form.color(), ArgbColor::new(255, 128, 0, 128));
        assert_eq!(form.hex_text(), "#FF800080");
        assert_synced(&form);
    }

    #[test]
    fn channel_edit_rejects_bad_input() {
        let mut form = form();
        let before = form.clone();
        assert_eq!(
            form.edit_channel(Channel::Red, "300"),
            Err(Error::ChannelOutOfRange(300))
        );
        assert!(form.edit_channel(Channel::Red, "").is_err());
        assert!(form.edit_channel(Channel::Red, "red").is_err());
        assert_eq!(form, before);
    }

    #[test]
    fn set_channel_and_sync() {
        let mut form = form();
        for channel in Channel::ALL {
            form.set_channel_and_sync(channel, 0x12);
            assert_synced(&form);
        }
        assert_eq!(form.hex_text(), "#12121212");
        assert_eq!(form.packed(), 0x1212_1212);
    }

    #[test]
    fn empty_integer_resets() {
        let mut form = form();
        assert_eq!(form.edit_integer(""), Ok(()));
        assert_eq!(form.color(), ArgbColor::TRANSPARENT);
        assert_eq!(form.packed(), 0);
        assert_eq!(form.integer_text(), "0");
        assert_eq!(form.hex_text(), "#00000000");
    }

    #[test]
    fn integer_edit_keeps_typed_text() {
        let mut form = form();
        assert_eq!(form.edit_integer("-1"), Ok(()));
        assert_eq!(form.color(), ArgbColor::new(255, 255, 255, 255));
        assert_eq!(form.packed(), u32::MAX);
        assert_eq!(form.integer_text(), "-1");
        assert_eq!(form.hex_text(), "#FFFFFFFF");

        assert_eq!(form.edit_integer("4294901760"), Ok(()));
        assert_eq!(form.hex_text(), "#FFFF0000");
        assert_synced(&form);
    }

    #[test]
    fn integer_edit_ignores_garbage() {
        let mut form = form();
        let before = form.clone();
        assert!(form.edit_integer("12abc").is_err());
        assert_eq!(form, before);
    }

    #[test]
    fn partial_hex_does_not_commit() {
        let mut form = form();
        let color = form.color();
        let packed = form.packed();

        assert!(form.edit_hex("12").is_err());
        assert_eq!(form.hex_text(), "12");
        assert_eq!(form.color(), color);
        assert_eq!(form.packed(), packed);
        assert_eq!(form.integer_text(), packed.to_string());

        assert!(form.edit_hex("#ff00").is_err());
        assert_eq!(form.hex_text(), "#FF00");
        assert_eq!(form.color(), color);

        assert_eq!(form.edit_hex("#ff0000ff"), Ok(()));
        assert_eq!(form.hex_text(), "#FF0000FF");
        assert_eq!(form.color(), ArgbColor::new(255, 0, 0, 255));
        assert_eq!(form.packed(), 0xFF00_00FF);
        assert_eq!(form.integer_text(), "4278190335");
    }

    #[test]
    fn other_edits_replace_partial_hex() {
        let mut form = form();
        assert!(form.edit_hex("#GG").is_err());
        assert_eq!(form.edit_channel(Channel::Blue, "0"), Ok(()));
        assert_eq!(form.hex_text(), "#8080FF00");
        assert_synced(&form);
    }

    #[test]
    fn presets() {
        let mut form = form();
        assert_eq!(Preset::find("Transparent"), Ok(11));
        assert_eq!(form.apply_preset(11), Ok(()));
        assert_eq!(form.color(), ArgbColor::TRANSPARENT);
        assert_eq!(form.hex_text(), "#00000000");
        assert_eq!(form.packed(), 0);

        assert_eq!(form.apply_preset(0), Ok(()));
        assert_eq!(form.hex_text(), "#FFFF0000");
        assert_synced(&form);

        let before = form.clone();
        assert!(form.apply_preset(Preset::all().len()).is_err());
        assert_eq!(form, before);
    }

    #[test]
    fn signed_integer_field() {
        let mut form = ColorForm::new(
            Config::new()
                .with_initial_color(ArgbColor::new(255, 255, 0, 0))
                .with_integer_format(IntegerFormat::Signed),
        );
        assert_eq!(form.integer_text(), "-65536");
        assert_eq!(form.edit_hex("FF0000FF"), Ok(()));
        assert_eq!(form.integer_text(), "-16776961");
    }

    #[test]
    fn view_snapshot() {
        let view = form().view();
        assert_eq!(
            view,
            FormView {
                alpha: 128,
                red: 128,
                green: 255,
                blue: 128,
                packed: 0x8080_FF80,
                integer: "2155937664".into(),
                hex: "#8080FF80".into(),
                css: "rgba(128, 255, 128, 0.5019607843137255)".into(),
            }
        );
    }
}

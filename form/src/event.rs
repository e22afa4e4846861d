//! Form events

use argb_codec::color::Channel;

/// An edit made by the user in one of the form's fields.
///
/// Text is carried raw, exactly as typed. Validation happens when the event is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
#[non_exhaustive]
pub enum FormEvent {
    ChannelEdited { channel: Channel, text: String },
    /// An empty string is meaningful and resets the color.
    IntegerEdited(String),
    HexEdited(String),
    PresetSelected(usize),
    Quit,
}

impl FormEvent {
    pub fn channel(channel: Channel, text: impl Into<String>) -> Self {
        Self::ChannelEdited {
            channel,
            text: text.into(),
        }
    }

    pub fn integer(text: impl Into<String>) -> Self {
        Self::IntegerEdited(text.into())
    }

    pub fn hex(text: impl Into<String>) -> Self {
        Self::HexEdited(text.into())
    }
}

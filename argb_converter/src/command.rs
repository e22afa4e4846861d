//! Terminal commands.

use anyhow::{bail, Result};
use argb_form::prelude::*;

pub(crate) const HELP: &str = "\
commands:
  alpha|red|green|blue <0-255>   edit a channel (a, r, g, b for short)
  int [<integer>]                edit the packed integer, empty resets to 0
  hex [<#AARRGGBB>]              edit the hex string
  preset <index|name>            apply a preset
  presets                        list presets
  show                           print the current color
  json                           print the current color as JSON
  help                           print this message
  quit                           exit";

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub(crate) enum Command {
    /// An edit forwarded to the form.
    Edit(FormEvent),
    Presets,
    Show,
    Json,
    Help,
}

/// Parse one line of input. Returns `None` for blank lines.
///
/// Everything after the command word is passed to the form verbatim, so `hex #12` and
/// `int` (clearing the field) behave the same as typing into the field.
pub(crate) fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "int" | "integer" => Command::Edit(FormEvent::integer(rest)),
        "hex" => Command::Edit(FormEvent::hex(rest)),
        "preset" => {
            if rest.is_empty() {
                bail!("missing preset, try `presets`");
            }
            Command::Edit(FormEvent::PresetSelected(Preset::find(rest)?))
        }
        "presets" => Command::Presets,
        "show" => Command::Show,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Edit(FormEvent::Quit),
        other => match other.parse::<Channel>() {
            Ok(channel) => Command::Edit(FormEvent::channel(channel, rest)),
            Err(_) => bail!("unknown command `{word}`, try `help`"),
        },
    };
    Ok(Some(command))
}

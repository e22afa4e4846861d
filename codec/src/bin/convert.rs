use anyhow::{bail, Context, Result};
use argb_codec::prelude::*;
use std::env;
use tracing_subscriber::EnvFilter;

/// Interpret a command-line value as a color. A leading `#` forces hex, otherwise decimal
/// integers win over bare hex digits, and anything else is tried as a preset name.
fn resolve(value: &str) -> Result<ArgbColor> {
    if value.starts_with('#') {
        return Ok(from_hex(value)?);
    }
    if let Ok(IntegerInput::Value(packed)) = parse_integer(value) {
        return Ok(ArgbColor::unpack(packed));
    }
    if let Ok(color) = from_hex(value) {
        return Ok(color);
    }
    let index = Preset::find(value).with_context(|| format!("`{value}` is not a color"))?;
    Ok(Preset::get(index)?.color)
}

fn main() -> Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )?;

    let mut json = false;
    let mut value = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ if value.is_none() => value = Some(arg),
            _ => bail!("unexpected argument `{arg}`"),
        }
    }
    let Some(value) = value else {
        bail!("must provide a hex string, integer or preset name to convert");
    };

    let color = resolve(&value)?;
    tracing::debug!("resolved `{value}` to {color:?}");

    if json {
        let output = serde_json::json!({
            "color": color,
            "packed": color.pack(),
            "signed": color.to_signed(),
            "hex": color.to_hex(),
            "css": color.to_css(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("hex:    {}", color.to_hex());
        println!("int:    {}", color.pack());
        println!("signed: {}", color.to_signed());
        println!(
            "argb:   {}, {}, {}, {}",
            color.alpha, color.red, color.green, color.blue
        );
        println!("css:    {}", color.to_css());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(value: &str) -> Option<String> {
        resolve(value).ok().map(ArgbColor::to_hex)
    }

    #[test]
    fn leading_hash_forces_hex() {
        assert_eq!(hex("#12345678").as_deref(), Some("#12345678"));
        assert_eq!(hex("#ff0000ff").as_deref(), Some("#FF0000FF"));
        assert!(resolve("#123").is_err());
    }

    #[test]
    fn decimal_wins_over_bare_hex() {
        assert_eq!(hex("12345678").as_deref(), Some("#00BC614E"));
        assert_eq!(hex("-65536").as_deref(), Some("#FFFF0000"));
        assert_eq!(hex("4294901760").as_deref(), Some("#FFFF0000"));
    }

    #[test]
    fn bare_hex_digits() {
        assert_eq!(hex("FF00FF00").as_deref(), Some("#FF00FF00"));
        assert_eq!(hex("8080ff80").as_deref(), Some("#8080FF80"));
    }

    #[test]
    fn preset_names() {
        assert_eq!(hex("Red").as_deref(), Some("#FFFF0000"));
        assert_eq!(hex("semi-transparent").as_deref(), Some("#80000000"));
    }

    #[test]
    fn garbage_is_rejected() {
        for value in ["", "orange", "12abc", "#GG8080FF"] {
            assert!(resolve(value).is_err(), "{value:?} should not resolve");
        }
    }
}

//! Terminal presentation of the form.

use argb_form::{prelude::*, Result};
use std::io::Write;

/// Prints the form after every edit.
#[derive(Debug)]
#[must_use]
pub(crate) struct Terminal<W> {
    out: W,
}

impl<W: Write> Terminal<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }

    pub(crate) fn print_view(&mut self, view: &FormView) -> Result<()> {
        writeln!(
            self.out,
            "  argb  {} {} {} {}",
            view.alpha, view.red, view.green, view.blue
        )?;
        writeln!(self.out, "  int   {}", view.integer)?;
        writeln!(self.out, "  hex   {}", view.hex)?;
        writeln!(self.out, "  css   {}", view.css)?;
        Ok(())
    }

    pub(crate) fn print_json(&mut self, view: &FormView) -> Result<()> {
        let json = serde_json::to_string_pretty(view).map_err(anyhow::Error::from)?;
        writeln!(self.out, "{json}")?;
        Ok(())
    }

    pub(crate) fn print_presets(&mut self) -> Result<()> {
        for (index, preset) in Preset::all().iter().enumerate() {
            writeln!(
                self.out,
                "  {index:>2}  {:<16}  {}",
                preset.name,
                preset.color.to_hex()
            )?;
        }
        Ok(())
    }

    pub(crate) fn print_line(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    pub(crate) fn prompt(&mut self) -> Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OnUpdate for Terminal<W> {
    fn on_start(&mut self, cx: &mut Context) -> Result<()> {
        self.print_line("ARGB Color Converter, type `help` for commands")?;
        self.print_view(&cx.view())
    }

    fn on_update(&mut self, event: &FormEvent, cx: &mut Context) -> Result<()> {
        if matches!(event, FormEvent::Quit) {
            return Ok(());
        }
        self.print_view(&cx.view())
    }

    fn on_stop(&mut self, _cx: &mut Context) {
        let _ = self.out.flush();
    }
}

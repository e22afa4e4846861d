//! Form context

use crate::{
    config::Config,
    event::FormEvent,
    form::{ColorForm, FormView},
};

#[derive(Debug)]
#[must_use]
pub struct Context {
    pub(crate) config: Config,
    pub(crate) form: ColorForm,
    pub(crate) events_handled: usize,
    pub(crate) should_quit: bool,
}

impl Context {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            config,
            form: ColorForm::new(config),
            events_handled: 0,
            should_quit: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn form(&self) -> &ColorForm {
        &self.form
    }

    #[inline]
    pub fn view(&self) -> FormView {
        self.form.view()
    }

    #[inline]
    #[must_use]
    pub fn events_handled(&self) -> usize {
        self.events_handled
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply a single edit to the form. Rejected edits are logged and otherwise ignored, the
    /// form keeps its last valid color.
    pub(crate) fn handle_event(&mut self, event: &FormEvent) {
        tracing::trace!("received event: {event:?}");
        self.events_handled += 1;
        let result = match event {
            FormEvent::ChannelEdited { channel, text } => self.form.edit_channel(*channel, text),
            FormEvent::IntegerEdited(text) => self.form.edit_integer(text),
            FormEvent::HexEdited(text) => self.form.edit_hex(text),
            FormEvent::PresetSelected(index) => self.form.apply_preset(*index),
            FormEvent::Quit => {
                self.quit();
                Ok(())
            }
        };
        if let Err(err) = result {
            tracing::debug!("ignoring edit {event:?}: {err}");
        }
    }
}

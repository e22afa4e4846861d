//! Core form features

use crate::{config::Config, context::Context, event::FormEvent, Result};

/// The presentation layer, notified after every change to the form.
pub trait OnUpdate {
    /// Called once with the initial form before any events are handled.
    fn on_start(&mut self, _cx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// Called after each event has been applied to the form.
    fn on_update(&mut self, event: &FormEvent, cx: &mut Context) -> Result<()>;

    /// Called when the session ends.
    fn on_stop(&mut self, _cx: &mut Context) {}
}

/// Drives a [ColorForm](crate::form::ColorForm) from a stream of [FormEvent]s, one event at
/// a time.
#[derive(Debug)]
#[must_use]
pub struct Engine<A> {
    cx: Context,
    app: A,
}

impl<A: OnUpdate> Engine<A> {
    /// Create the form and notify the application of its initial state.
    pub fn start(config: Config, mut app: A) -> Result<Self> {
        let mut cx = Context::new(config);
        tracing::debug!("starting form with {:?}", cx.form().color());
        app.on_start(&mut cx)?;
        Ok(Self { cx, app })
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.cx
    }

    #[inline]
    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.cx.is_running()
    }

    /// Apply one event and recompute the view before returning.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<()> {
        if !self.cx.is_running() {
            tracing::warn!("dropping event after quit: {event:?}");
            return Ok(());
        }
        self.cx.handle_event(&event);
        self.app.on_update(&event, &mut self.cx)
    }

    /// End the session and hand the application back.
    pub fn stop(mut self) -> A {
        tracing::debug!("stopping form after {} events", self.cx.events_handled());
        self.app.on_stop(&mut self.cx);
        self.app
    }

    /// Run a whole session over `events`, stopping early on [FormEvent::Quit].
    pub fn run(config: Config, app: A, events: impl IntoIterator<Item = FormEvent>) -> Result<A> {
        let mut engine = Self::start(config, app)?;
        for event in events {
            engine.dispatch(event)?;
            if !engine.is_running() {
                break;
            }
        }
        Ok(engine.stop())
    }
}

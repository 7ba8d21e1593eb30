//! Stateful deferred value for consumers that live across the transition.
//!
//! An [`Observer`] starts NON_INTERACTIVE and shows its raw value verbatim.
//! The owner calls [`Observer::hydrate`] once it is live; from then on the
//! value is presented against the clock, and it stays that way. There is
//! no edge back.

use rateview_types::{Outcome, PresentedValue, RawValue, RenderEnvironment, Update, UpdateCause};
use std::fmt;

use crate::present::Presenter;

/// Receives every [`Update`] an observer publishes
pub trait Listener {
    fn on_update(&mut self, update: &Update);
}

impl<F> Listener for F
where
    F: FnMut(&Update),
{
    fn on_update(&mut self, update: &Update) {
        self(update)
    }
}

pub struct Observer {
    presenter: Presenter,
    raw: RawValue,
    environment: RenderEnvironment,
    current: Outcome<PresentedValue>,
    listener: Option<Box<dyn Listener>>,
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("raw", &self.raw)
            .field("environment", &self.environment)
            .field("current", &self.current)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Observer {
    /// Start observing `raw`. Publishes nothing.
    pub fn new(raw: impl Into<RawValue>, presenter: Presenter) -> Self {
        let raw = raw.into();
        let current = Outcome::Ok(PresentedValue::verbatim(&raw));

        Self {
            presenter,
            raw,
            environment: RenderEnvironment::NonInteractive,
            current,
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: impl Listener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn set_listener(&mut self, listener: impl Listener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn raw(&self) -> &RawValue {
        &self.raw
    }

    pub fn presented(&self) -> &PresentedValue {
        self.current.value()
    }

    pub fn outcome(&self) -> &Outcome<PresentedValue> {
        &self.current
    }

    pub fn environment(&self) -> RenderEnvironment {
        self.environment
    }

    pub fn is_interactive(&self) -> bool {
        self.environment.is_interactive()
    }

    /// Fire the NON_INTERACTIVE -> INTERACTIVE transition.
    ///
    /// Publishes exactly one update the first time, even when the text
    /// does not change. Later calls are no-ops and return `None`.
    pub fn hydrate(&mut self) -> Option<Update> {
        if self.environment.is_interactive() {
            tracing::debug!(raw = %self.raw, "hydrate ignored: observer already interactive");
            return None;
        }

        self.environment = RenderEnvironment::Interactive;
        tracing::debug!(raw = %self.raw, "observer hydrated");
        Some(self.recompute(UpdateCause::Hydrated))
    }

    /// Replace the observed value. Same value, no update.
    pub fn set_raw(&mut self, raw: impl Into<RawValue>) -> Option<Update> {
        let raw = raw.into();
        if raw == self.raw {
            return None;
        }

        self.raw = raw;
        Some(self.recompute(UpdateCause::RawChanged))
    }

    /// Recompute against the current clock while interactive.
    ///
    /// Publishes only when the presented text moved ("4 minutes ago" ->
    /// "5 minutes ago"). A degraded value depends on the raw text alone,
    /// so it is left as is.
    pub fn refresh(&mut self) -> Option<Update> {
        if !self.environment.is_interactive() || self.current.is_degraded() {
            return None;
        }

        let next = self.presenter.present_outcome(self.raw.as_str(), self.environment);
        if next.value() == self.current.value() {
            return None;
        }

        self.current = next;
        Some(self.publish(UpdateCause::Refreshed))
    }

    fn recompute(&mut self, cause: UpdateCause) -> Update {
        self.current = self
            .presenter
            .present_outcome(self.raw.as_str(), self.environment);
        self.publish(cause)
    }

    fn publish(&mut self, cause: UpdateCause) -> Update {
        let update = Update {
            cause,
            environment: self.environment,
            outcome: self.current.clone(),
        };

        if let Some(listener) = self.listener.as_mut() {
            listener.on_update(&update);
        }

        update
    }
}

/// Observe `raw` with the system clock and default style
pub fn observe(raw: impl Into<RawValue>) -> Observer {
    Observer::new(raw, Presenter::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    fn observer_at(raw: &str, now: &str) -> Observer {
        let clock = Arc::new(ManualClock::at_rfc3339(now).unwrap());
        Observer::new(raw, Presenter::new(clock))
    }

    #[test]
    fn test_starts_verbatim_and_non_interactive() {
        let observer = observer_at("2024-05-01T12:00:00Z", "2024-05-01T13:00:00Z");
        assert_eq!(observer.environment(), RenderEnvironment::NonInteractive);
        assert_eq!(observer.presented(), "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_listener_sees_same_update_as_return_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut observer = observer_at("2024-05-01T12:00:00Z", "2024-05-01T13:00:00Z")
            .with_listener(move |update: &Update| sink.borrow_mut().push(update.clone()));

        let update = observer.hydrate().unwrap();

        assert_eq!(seen.borrow().as_slice(), &[update]);
    }

    #[test]
    fn test_set_raw_same_value_is_silent() {
        let mut observer = observer_at("2024-05-01T12:00:00Z", "2024-05-01T13:00:00Z");
        observer.hydrate();
        assert!(observer.set_raw("2024-05-01T12:00:00Z").is_none());
    }
}

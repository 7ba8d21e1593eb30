use crate::{Outcome, PresentedValue, RenderEnvironment};

/// What made an observer publish a new value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateCause {
    /// The observed raw value changed
    RawChanged,
    /// The one-time NON_INTERACTIVE -> INTERACTIVE transition fired
    Hydrated,
    /// Consumer asked for a recompute and the text differs
    Refreshed,
}

impl UpdateCause {
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateCause::RawChanged => "raw_changed",
            UpdateCause::Hydrated => "hydrated",
            UpdateCause::Refreshed => "refreshed",
        }
    }
}

/// Notification delivered to the owner of an observer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub cause: UpdateCause,
    pub environment: RenderEnvironment,
    pub outcome: Outcome<PresentedValue>,
}

impl Update {
    pub fn presented(&self) -> &PresentedValue {
        self.outcome.value()
    }
}

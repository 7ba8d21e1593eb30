//! Fixtures for time-dependent tests.
//!
//! Everything is anchored on [`REFERENCE_NOW`] so relative phrasing is
//! deterministic.

use chrono::{DateTime, TimeDelta, Utc};
use rateview_core::{ManualClock, Presenter};
use rateview_types::Update;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// The "now" every fixture is relative to
pub const REFERENCE_NOW: &str = "2024-05-01T12:00:00Z";

/// Raw values that must never parse as a point in time
pub const MALFORMED: &[&str] = &["not-a-date", "", "   ", "2024-02-30T00:00:00Z", "yesterday"];

pub fn reference_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(REFERENCE_NOW)
        .expect("REFERENCE_NOW is valid RFC 3339")
        .with_timezone(&Utc)
}

/// RFC 3339 timestamp `ago` before [`REFERENCE_NOW`]
pub fn timestamp_before(ago: TimeDelta) -> String {
    (reference_now() - ago).to_rfc3339()
}

/// RFC 3339 timestamp `ahead` after [`REFERENCE_NOW`]
pub fn timestamp_after(ahead: TimeDelta) -> String {
    (reference_now() + ahead).to_rfc3339()
}

/// A presenter pinned at [`REFERENCE_NOW`], plus the clock to move it
pub fn fixed_presenter() -> (Presenter, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(reference_now()));
    (Presenter::new(clock.clone()), clock)
}

/// Observer listener that keeps every update it receives.
///
/// Clones share the same log, so keep one and hand the other to the
/// observer.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    updates: Rc<RefCell<Vec<Update>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<Update> {
        self.updates.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.updates.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.borrow().is_empty()
    }
}

impl rateview_core::Listener for RecordingListener {
    fn on_update(&mut self, update: &Update) {
        self.updates.borrow_mut().push(update.clone());
    }
}

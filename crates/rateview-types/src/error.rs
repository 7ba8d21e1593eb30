use std::fmt;

/// Why a raw value could not be turned into a relative time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Nothing but whitespace
    Empty,
    /// Not a recognised ISO-8601 / RFC 3339 point in time
    Unparseable(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Empty => write!(f, "empty timestamp"),
            FailureReason::Unparseable(detail) => write!(f, "unparseable timestamp: {}", detail),
        }
    }
}

/// The only presentation error: the raw value cannot be formatted.
///
/// Never surfaced as an `Err` to consumers; it travels inside
/// [`crate::Outcome::Degraded`] next to the fallback value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatFailure {
    pub raw: String,
    pub reason: FailureReason,
}

impl FormatFailure {
    pub fn new(raw: impl Into<String>, reason: FailureReason) -> Self {
        Self {
            raw: raw.into(),
            reason,
        }
    }
}

impl fmt::Display for FormatFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot format {:?} as relative time: {}", self.raw, self.reason)
    }
}

impl std::error::Error for FormatFailure {}

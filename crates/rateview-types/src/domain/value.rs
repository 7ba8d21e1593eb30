use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied value as received (typically an ISO-8601 timestamp)
///
/// No format is enforced here; parsing only happens when an interactive
/// presentation is requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawValue(String);

impl RawValue {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RawValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Text handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresentedValue(String);

impl PresentedValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The environment-agnostic presentation: the raw text, byte for byte
    pub fn verbatim(raw: &RawValue) -> Self {
        Self(raw.as_str().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PresentedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PresentedValue {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for PresentedValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PresentedValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PresentedValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_keeps_raw_bytes() {
        let raw = RawValue::new("  2024-05-01T12:00:00Z \n");
        assert_eq!(PresentedValue::verbatim(&raw).as_str(), raw.as_str());
    }

    #[test]
    fn test_serializes_transparently() {
        let raw = RawValue::from("not-a-date");
        assert_eq!(serde_json::to_string(&raw).unwrap(), "\"not-a-date\"");
    }
}

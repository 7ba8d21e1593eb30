use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the consumer can see the end user's live environment (clock, locale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderEnvironment {
    /// Initial or static rendering; nothing environment-dependent may be read
    #[default]
    NonInteractive,
    /// The consumer is live
    Interactive,
}

impl RenderEnvironment {
    pub fn is_interactive(self) -> bool {
        matches!(self, RenderEnvironment::Interactive)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenderEnvironment::NonInteractive => "non_interactive",
            RenderEnvironment::Interactive => "interactive",
        }
    }
}

impl fmt::Display for RenderEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Wording used for interactive presentations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeStyle {
    /// "3 hours ago", "in 2 days"
    #[default]
    Long,
    /// "3h ago", "in 2d"
    Short,
}

impl fmt::Display for RelativeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeStyle::Long => f.pad("long"),
            RelativeStyle::Short => f.pad("short"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_non_interactive() {
        assert_eq!(RenderEnvironment::default(), RenderEnvironment::NonInteractive);
        assert!(!RenderEnvironment::default().is_interactive());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&RenderEnvironment::NonInteractive).unwrap(),
            "\"non_interactive\""
        );
        let style: RelativeStyle = serde_json::from_str("\"short\"").unwrap();
        assert_eq!(style, RelativeStyle::Short);
    }
}

use crate::FormatFailure;

/// Result of a presentation that cannot fail outright.
///
/// `Degraded` means formatting failed and `fallback` was substituted, so
/// callers can tell "formatted" apart from "fell back" without either one
/// being an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Ok(T),
    Degraded { fallback: T, reason: FormatFailure },
}

impl<T> Outcome<T> {
    /// The value to display, whichever branch produced it
    pub fn value(&self) -> &T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    pub fn failure(&self) -> Option<&FormatFailure> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Degraded { reason, .. } => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Degraded { fallback, reason } => Outcome::Degraded {
                fallback: f(fallback),
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureReason;

    #[test]
    fn test_degraded_exposes_fallback_and_reason() {
        let outcome = Outcome::Degraded {
            fallback: "not-a-date".to_string(),
            reason: FormatFailure::new(
                "not-a-date",
                FailureReason::Unparseable("input contains invalid characters".into()),
            ),
        };

        assert!(outcome.is_degraded());
        assert_eq!(outcome.value(), "not-a-date");
        assert_eq!(outcome.failure().unwrap().raw, "not-a-date");
    }

    #[test]
    fn test_map_preserves_branch() {
        let ok: Outcome<&str> = Outcome::Ok("1 hour ago");
        assert_eq!(ok.map(str::len), Outcome::Ok(10));
    }
}

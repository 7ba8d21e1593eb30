use chrono::{DateTime, TimeDelta, Utc};
use rateview_types::RelativeStyle;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Coarse magnitude of an elapsed interval, truncated toward zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    UnderAMinute,
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Months(u64),
    Years(u64),
}

impl Span {
    fn from_seconds(seconds: u64) -> Self {
        let days = seconds / DAY;

        if seconds < MINUTE {
            Span::UnderAMinute
        } else if seconds < HOUR {
            Span::Minutes(seconds / MINUTE)
        } else if seconds < DAY {
            Span::Hours(seconds / HOUR)
        } else if days < 30 {
            Span::Days(days)
        } else if days < 365 {
            Span::Months(days / 30)
        } else {
            Span::Years(days / 365)
        }
    }

    fn render(self, style: RelativeStyle) -> String {
        match style {
            RelativeStyle::Long => match self {
                Span::UnderAMinute => "less than a minute".to_string(),
                Span::Minutes(n) => plural(n, "minute"),
                Span::Hours(n) => plural(n, "hour"),
                Span::Days(n) => plural(n, "day"),
                Span::Months(n) => plural(n, "month"),
                Span::Years(n) => plural(n, "year"),
            },
            RelativeStyle::Short => match self {
                Span::UnderAMinute => "<1m".to_string(),
                Span::Minutes(n) => format!("{}m", n),
                Span::Hours(n) => format!("{}h", n),
                Span::Days(n) => format!("{}d", n),
                Span::Months(n) => format!("{}mo", n),
                Span::Years(n) => format!("{}y", n),
            },
        }
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// Format `then` relative to `now` ("2 hours ago", "in 3 days")
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>, style: RelativeStyle) -> String {
    format_elapsed(now.signed_duration_since(then), style)
}

/// Format an elapsed interval; negative means the moment is still ahead.
///
/// Zero counts as past so "right now" still carries the "ago" marker.
pub fn format_elapsed(elapsed: TimeDelta, style: RelativeStyle) -> String {
    let span = Span::from_seconds(elapsed.num_seconds().unsigned_abs()).render(style);

    if elapsed >= TimeDelta::zero() {
        format!("{} ago", span)
    } else {
        format!("in {}", span)
    }
}

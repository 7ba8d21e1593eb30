use rateview_types::{FormatFailure, Outcome, PresentedValue, RelativeStyle, RenderEnvironment};
use std::fmt;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::parse::parse_timestamp;
use crate::relative::format_relative;

/// Turns raw values into presented values for a given environment.
///
/// Cheap to clone; the clock is shared.
#[derive(Clone)]
pub struct Presenter {
    clock: Arc<dyn Clock>,
    style: RelativeStyle,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl fmt::Debug for Presenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presenter")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl Presenter {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            style: RelativeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: RelativeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> RelativeStyle {
        self.style
    }

    /// Present `raw` for `env`; failures fall back to `raw` itself
    pub fn present(&self, raw: &str, env: RenderEnvironment) -> PresentedValue {
        self.present_outcome(raw, env).into_value()
    }

    /// Like [`Presenter::present`], but says whether the fallback was taken.
    ///
    /// NON_INTERACTIVE is the identity and never touches the clock.
    /// INTERACTIVE parses `raw` and formats it against `now`; a
    /// [`FormatFailure`] is logged and returned as `Outcome::Degraded`
    /// carrying `raw` unchanged.
    pub fn present_outcome(&self, raw: &str, env: RenderEnvironment) -> Outcome<PresentedValue> {
        match env {
            RenderEnvironment::NonInteractive => Outcome::Ok(PresentedValue::new(raw)),
            RenderEnvironment::Interactive => self.present_interactive(raw),
        }
    }

    fn present_interactive(&self, raw: &str) -> Outcome<PresentedValue> {
        match parse_timestamp(raw) {
            Ok(then) => {
                let text = format_relative(then, self.clock.now(), self.style);
                Outcome::Ok(PresentedValue::new(text))
            }
            Err(reason) => {
                tracing::warn!(raw = %raw, reason = %reason, "relative time unavailable, showing raw value");
                Outcome::Degraded {
                    fallback: PresentedValue::new(raw),
                    reason: FormatFailure::new(raw, reason),
                }
            }
        }
    }
}

/// Present `raw` against the system clock in the default style
pub fn present(raw: &str, env: RenderEnvironment) -> PresentedValue {
    Presenter::default().present(raw, env)
}

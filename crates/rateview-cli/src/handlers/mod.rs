pub mod config;
pub mod observe;
pub mod present;

use crate::args::RenderArgs;
use anyhow::Result;
use rateview_core::{Clock, Config, ManualClock, Presenter, SystemClock};
use rateview_types::RelativeStyle;
use std::sync::Arc;

/// Build a presenter from command-line overrides on top of the config file
fn build_presenter(render: &RenderArgs, config: &Config) -> Result<Presenter> {
    let clock: Arc<dyn Clock> = match render.now.as_deref() {
        Some(now) => Arc::new(ManualClock::at_rfc3339(now)?),
        None => Arc::new(SystemClock),
    };

    let style = render
        .style
        .map(RelativeStyle::from)
        .unwrap_or(config.display.style);

    Ok(Presenter::new(clock).with_style(style))
}

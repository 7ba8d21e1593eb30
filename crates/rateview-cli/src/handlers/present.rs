use super::build_presenter;
use crate::args::RenderArgs;
use crate::output::{HandlerContext, PlainView};
use anyhow::Result;
use owo_colors::OwoColorize;
use rateview_core::Config;
use rateview_types::{Outcome, PresentedValue, RenderEnvironment};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PresentView {
    pub raw: String,
    pub environment: RenderEnvironment,
    pub presented: String,
    pub degraded: bool,
    pub reason: Option<String>,
}

impl PresentView {
    pub fn new(raw: &str, environment: RenderEnvironment, outcome: Outcome<PresentedValue>) -> Self {
        let reason = outcome.failure().map(|failure| failure.reason.to_string());
        Self {
            raw: raw.to_string(),
            environment,
            degraded: outcome.is_degraded(),
            presented: outcome.into_value().into_inner(),
            reason,
        }
    }
}

impl PlainView for PresentView {
    fn plain(&self, color: bool) -> Result<String> {
        Ok(if color && self.degraded {
            self.presented.yellow().to_string()
        } else {
            self.presented.clone()
        })
    }
}

pub fn handle(
    ctx: &HandlerContext,
    config: &Config,
    raw: &str,
    interactive: bool,
    render: &RenderArgs,
) -> Result<()> {
    let presenter = build_presenter(render, config)?;
    let environment = if interactive {
        RenderEnvironment::Interactive
    } else {
        RenderEnvironment::NonInteractive
    };

    let outcome = presenter.present_outcome(raw, environment);
    ctx.render(&PresentView::new(raw, environment, outcome))
}

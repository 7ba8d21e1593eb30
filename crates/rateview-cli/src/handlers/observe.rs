use super::build_presenter;
use crate::args::RenderArgs;
use crate::output::{HandlerContext, PlainView};
use anyhow::Result;
use owo_colors::OwoColorize;
use rateview_core::{Config, Observer};
use rateview_types::{Outcome, PresentedValue, RenderEnvironment, Update};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateView {
    /// Number of raw values applied so far
    pub step: usize,
    pub cause: &'static str,
    pub environment: RenderEnvironment,
    pub presented: String,
    pub degraded: bool,
}

impl UpdateView {
    fn initial(outcome: &Outcome<PresentedValue>) -> Self {
        Self {
            step: 1,
            cause: "initial",
            environment: RenderEnvironment::NonInteractive,
            presented: outcome.value().to_string(),
            degraded: outcome.is_degraded(),
        }
    }

    fn from_update(step: usize, update: &Update) -> Self {
        Self {
            step,
            cause: update.cause.as_str(),
            environment: update.environment,
            presented: update.presented().to_string(),
            degraded: update.outcome.is_degraded(),
        }
    }
}

impl PlainView for UpdateView {
    fn plain(&self, color: bool) -> Result<String> {
        let presented = if color && self.degraded {
            self.presented.yellow().to_string()
        } else {
            self.presented.clone()
        };
        Ok(format!(
            "{:>3}  {:<11}  {:<15}  {}",
            self.step, self.cause, self.environment, presented
        ))
    }
}

/// Feed `values` into one observer, firing the transition once
/// `hydrate_after` values have been applied. Prints the initial value and
/// then every notification.
pub fn handle(
    ctx: &HandlerContext,
    config: &Config,
    values: &[String],
    hydrate_after: u64,
    render: &RenderArgs,
) -> Result<()> {
    let presenter = build_presenter(render, config)?;

    let Some((first, rest)) = values.split_first() else {
        anyhow::bail!("observe needs at least one value");
    };

    let mut observer = Observer::new(first.as_str(), presenter);
    ctx.render(&UpdateView::initial(observer.outcome()))?;

    let hydrate_at = usize::try_from(hydrate_after).unwrap_or(usize::MAX);
    let mut applied = 1;

    if applied == hydrate_at
        && let Some(update) = observer.hydrate()
    {
        ctx.render(&UpdateView::from_update(applied, &update))?;
    }

    for raw in rest {
        applied += 1;

        if let Some(update) = observer.set_raw(raw.as_str()) {
            ctx.render(&UpdateView::from_update(applied, &update))?;
        }

        if applied == hydrate_at
            && let Some(update) = observer.hydrate()
        {
            ctx.render(&UpdateView::from_update(applied, &update))?;
        }
    }

    tracing::debug!(
        applied,
        interactive = observer.is_interactive(),
        "observe replay finished"
    );
    Ok(())
}

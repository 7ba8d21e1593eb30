use crate::output::{HandlerContext, PlainView};
use anyhow::Result;
use rateview_core::Config;
use rateview_core::config::CONFIG_FILE_NAME;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(transparent)]
struct ConfigView<'a> {
    config: &'a Config,
}

impl PlainView for ConfigView<'_> {
    fn plain(&self, _color: bool) -> Result<String> {
        let toml = self.config.to_toml()?;
        Ok(toml.trim_end().to_string())
    }
}

#[derive(Serialize)]
struct InitView {
    path: String,
    created: bool,
}

impl PlainView for InitView {
    fn plain(&self, _color: bool) -> Result<String> {
        Ok(if self.created {
            format!("Created {}", self.path)
        } else {
            format!("Config already exists: {}", self.path)
        })
    }
}

pub fn show(ctx: &HandlerContext, config: &Config) -> Result<()> {
    ctx.render(&ConfigView { config })
}

pub fn init(ctx: &HandlerContext, data_dir: &Path) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE_NAME);
    let created = !path.exists();

    if created {
        Config::default().save_to(&path)?;
    }

    ctx.render(&InitView {
        path: path.display().to_string(),
        created,
    })
}

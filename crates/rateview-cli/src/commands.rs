use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use super::logging;
use crate::output::HandlerContext;
use anyhow::Result;
use rateview_core::{Config, resolve_data_dir};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config = Config::load(&data_dir)?;

    let directive = cli.log_level.as_deref().unwrap_or(&config.log.level);
    logging::init(directive);

    let ctx = HandlerContext::new(cli.format);

    match cli.command {
        Commands::Present {
            raw,
            interactive,
            render,
        } => handlers::present::handle(&ctx, &config, &raw, interactive, &render),

        Commands::Observe {
            values,
            hydrate_after,
            render,
        } => handlers::observe::handle(&ctx, &config, &values, hydrate_after, &render),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx, &config),
            ConfigCommand::Init => handlers::config::init(&ctx, &data_dir),
        },
    }
}

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "rateview")]
#[command(about = "Render review timestamps without hydration mismatches", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml (default: $RATEVIEW_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, value_enum, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Log filter directive, e.g. "warn" or "rateview_core=debug" (overrides config)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

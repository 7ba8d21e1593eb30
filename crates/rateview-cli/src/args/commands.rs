use super::StyleArg;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Present a single raw value
    Present {
        /// Raw value, typically an ISO-8601 timestamp; may start with `-`
        #[arg(allow_hyphen_values = true)]
        raw: String,

        /// Render as a live consumer would (relative time); default is the static rendering
        #[arg(long)]
        interactive: bool,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Replay raw values into one observer and print every notification
    Observe {
        /// Raw values in the order the consumer receives them; options go before the values
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// Fire the interactive transition once this many values have been applied
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        hydrate_after: u64,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file if none exists
    Init,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    /// Reference time for relative formatting (RFC 3339); default is the system clock
    #[arg(long)]
    pub now: Option<String>,

    /// Relative-time wording (overrides config)
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,
}

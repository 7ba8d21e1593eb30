// NOTE: Why the CLI owns the transition
//
// In the web product the rendering runtime decides when a component is live
// and fires the NON_INTERACTIVE -> INTERACTIVE edge. Here the command line
// plays that role: `present --interactive` picks the environment for one
// value, and `observe --hydrate-after N` replays a sequence of raw values
// into one observer and fires the edge at a chosen point.

mod args;
mod commands;
mod handlers;
pub mod logging;
mod output;

pub use args::{Cli, Commands, ConfigCommand, OutputFormat, RenderArgs, StyleArg};
pub use commands::run;

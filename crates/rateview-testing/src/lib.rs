//! Testing infrastructure for rateview tests.
//!
//! - `TestWorld`: isolated data directory and CLI execution
//! - `assertions`: checks over the CLI's JSON output
//! - `fixtures`: a fixed reference time, timestamps around it, and a
//!   listener that records observer notifications

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

//! # causemap-cli
//!
//! Argument parsing and command execution for the `causemap` binary. Kept
//! as a library so commands can be driven from tests without a subprocess.

pub mod commands;

pub use commands::{run, Cli, Command, Outcome};

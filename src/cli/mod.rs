//! CLI module for devkit - command-line interface and subcommands.
//!
//! Without a subcommand the TUI is launched; the subcommands print the
//! same projections non-interactively.

pub mod commands;

pub use commands::{Cli, Commands};

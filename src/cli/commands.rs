//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: print the catalog, optionally filtered by tag
//! - tags: print the tag vocabulary
//! - show: print one tool in full
//! - open: open a tool's URL

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// devkit - browse, filter and pin developer tools
#[derive(Parser, Debug)]
#[command(name = "devkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file to load instead of the bundled one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (launches the TUI when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tools, keeping those with any of the given tags
    List {
        /// Tag to filter by (repeatable, matches any)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// List every tag in display order
    Tags,

    /// Show one tool with its full description
    Show {
        /// Tool id
        id: String,
    },

    /// Open a tool's URL in the browser
    Open {
        /// Tool id
        id: String,
    },
}

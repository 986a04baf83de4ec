//! devkit - a terminal catalog browser for developer tools
//!
//! A fixed catalog of tools can be filtered by tag, pinned as favorites and
//! read in full by expanding truncated descriptions. All state is
//! in-memory and lasts for one session.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod opener;
pub mod tags;
pub mod tui;
pub mod view_state;

pub use error::{DevkitError, Result};

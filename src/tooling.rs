//! Tooling & Integration Layer
//!
//! Command-line entry points over the index session.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};

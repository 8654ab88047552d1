//! CLI Tooling
//!
//! Command-line surface of the index: sync the tree, search by tag, list the
//! stored records. Every command runs against one [`IndexSession`].

use crate::config::{ConfigLoader, TagdexConfig};
use crate::error::ApiError;
use crate::format::{
    format_matches_text, format_records_json, format_records_text, format_search_json,
    format_sync_report_json, format_sync_report_text,
};
use crate::logging::LoggingConfig;
use crate::session::IndexSession;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// Tagdex CLI - incremental tag index for a directory tree
#[derive(Parser, Debug)]
#[command(name = "tagdex")]
#[command(about = "Index a directory tree by content hash and search files by tag")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Root directory to index (overrides index.root from config)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Store directory (overrides index.store_path from config)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run one reconciliation cycle and report what changed
    Sync {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Sync, then list files whose tags contain TAG (case-insensitive)
    Search {
        /// Tag substring to look for
        tag: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
        /// Search the store as it is, without syncing first
        #[arg(long)]
        no_sync: bool,
    },
    /// List every record in the index
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

/// CLI context owning the resolved configuration and the index session
pub struct CliContext {
    config: TagdexConfig,
    session: IndexSession,
}

impl CliContext {
    /// Resolve configuration from `cli` and open the index session.
    pub fn new(cli: &Cli) -> Result<Self, ApiError> {
        Self::from_config(resolve_config(cli)?)
    }

    /// Open the index session described by an already resolved config.
    pub fn from_config(config: TagdexConfig) -> Result<Self, ApiError> {
        let root = config.index.resolve_root()?;
        let store_path = config.index.resolve_store_path()?;
        let session = IndexSession::open(root, &store_path, config.index.walker_config())?;
        Ok(Self { config, session })
    }

    pub fn config(&self) -> &TagdexConfig {
        &self.config
    }

    pub fn logging_config(&self) -> &LoggingConfig {
        &self.config.logging
    }

    pub fn session(&self) -> &IndexSession {
        &self.session
    }

    /// Execute a CLI command and return its rendered output
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(command = command_name(command), root = %self.session.root().display(), "Executing command");
        match command {
            Commands::Sync { format } => {
                let report = self.session.sync()?;
                match format.as_str() {
                    "json" => format_sync_report_json(&report),
                    _ => Ok(format_sync_report_text(&report)),
                }
            }
            Commands::Search {
                tag,
                format,
                no_sync,
            } => {
                let report = if *no_sync {
                    None
                } else {
                    Some(self.session.sync()?)
                };
                let matches = self.session.search(tag)?;
                match format.as_str() {
                    "json" => format_search_json(report.as_ref(), &matches),
                    _ => {
                        let mut out = String::new();
                        if let Some(report) = &report {
                            out.push_str(&format_sync_report_text(report));
                            out.push('\n');
                        }
                        out.push_str(&format_matches_text(&matches));
                        Ok(out)
                    }
                }
            }
            Commands::List { format } => {
                let records = self.session.list()?;
                match format.as_str() {
                    "json" => format_records_json(&records),
                    _ => Ok(format_records_text(&records)),
                }
            }
        }
    }
}

/// Load config and apply CLI overrides on top of it.
pub fn resolve_config(cli: &Cli) -> Result<TagdexConfig, ApiError> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => {
            let dir = cli.root.as_deref().unwrap_or_else(|| Path::new("."));
            ConfigLoader::load(dir)?
        }
    };

    if let Some(root) = &cli.root {
        config.index.root = root.clone();
    }
    if let Some(store) = &cli.store {
        config.index.store_path = Some(store.clone());
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        config.logging.output = output.clone();
    }
    if let Some(file) = &cli.log_file {
        config.logging.file = Some(file.clone());
    }
    Ok(config)
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Sync { .. } => "sync",
        Commands::Search { .. } => "search",
        Commands::List { .. } => "list",
    }
}

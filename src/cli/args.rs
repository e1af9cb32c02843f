//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `dedupe`: Remove duplicate keys and rewrite the files in place
//! - `check`: Report duplicate keys without touching the files
//! - `init`: Initialize keydedup configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Dedupe(args)) => args.common.verbose,
            Some(Command::Check(args)) => args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `dedupe` and `check`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Translation files to process (paths or glob patterns)
    #[arg(required = true, value_name = "PATH", env = "KEYDEDUP_PATH")]
    pub paths: Vec<PathBuf>,

    /// Config file to use instead of searching for .keydeduprc.json
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Marker that starts a language header (overrides config file)
    #[arg(long, value_name = "TEXT")]
    pub header_prefix: Option<String>,

    /// Marker that ends a language header and opens its block (overrides config file)
    #[arg(long, value_name = "TEXT")]
    pub header_suffix: Option<String>,

    /// Line comment marker (overrides config file)
    #[arg(long, value_name = "TEXT")]
    pub comment_prefix: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct DedupeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Keep a copy of each file as <file>.<backupExtension> before rewriting it
    #[arg(long)]
    pub backup: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Remove duplicate keys from language blocks and rewrite the files
    Dedupe(DedupeArgs),
    /// Report duplicate keys without modifying files (exits 1 if any are found)
    Check(CheckArgs),
    /// Initialize a new .keydeduprc.json configuration file
    Init,
}

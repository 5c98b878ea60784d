//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Xgen
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `generate`: Scan for test pools and (re)write runner files
//! - `list`: Print discovered test pools without writing anything
//! - `init`: Initialize xgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Dialect;

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
            Some(Command::Generate(cmd)) => cmd.args.common.verbose,
            Some(Command::List(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source tree root to scan for test files (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directory the runner files are written to (overrides config file)
    #[arg(long)]
    pub output_root: Option<PathBuf>,

    /// Dialects to process (default: all configured)
    /// Can be specified multiple times: --dialects c --dialects cpp
    #[arg(long, value_enum)]
    pub dialects: Vec<Dialect>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Verify runners are up to date instead of writing them
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub args: ListArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan for XTEST_DEFINE_POOL declarations and regenerate runner files
    Generate(GenerateCommand),
    /// Print the test pools each dialect's runner would register
    List(ListCommand),
    /// Initialize a new .xgenrc.json configuration file
    Init,
}

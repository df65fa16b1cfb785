//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::spec::DEFAULT_SPEC_FILE;
use crate::ui::OutputMode;

/// checkenv - Ensures specified environment variables are present during runtime.
#[derive(Debug, Parser)]
#[command(name = "checkenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the specification file
    #[arg(
        short,
        long,
        global = true,
        env = "CHECKENV_SPEC",
        default_value = DEFAULT_SPEC_FILE
    )]
    pub spec: PathBuf,

    /// Only show missing variables and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show nothing except errors
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output mode selected by the global flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.silent {
            OutputMode::Silent
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the environment against the specification (default)
    Check(CheckArgs),

    /// Validate the specification file without checking the environment
    Validate(ValidateArgs),

    /// List declared variables and their rules
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Report format for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Colored two-section report
    #[default]
    Human,
    /// `{"missing": [...], "optional": [...], "failed": bool}`
    Json,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Output violations as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output the specification as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

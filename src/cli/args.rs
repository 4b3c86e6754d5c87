//! CLI argument definitions
//!
//! Global CLI options shared by every subcommand.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "agecal")]
#[command(about = "Age and next-birthday tracker for the terminal", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Evaluate against this date instead of today (MM/DD/YYYY)
    #[arg(long, global = true, value_name = "DATE")]
    pub(crate) as_of: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

impl Cli {
    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

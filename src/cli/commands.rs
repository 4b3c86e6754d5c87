//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the full age panel (default)
    Show,
    /// Validate and save a birth date
    Set {
        /// Birth date as MM/DD/YYYY
        date: String,
    },
    /// Validate an entry without saving it
    Check {
        /// Possibly partial date entry
        input: String,
    },
    /// Output a single line for statusbar/tmux integration
    Widget {
        /// Append the stored date of birth
        #[arg(long)]
        show_date: bool,
    },
    /// Print the age in years as plain text (pipe to a clipboard tool)
    Years,
}

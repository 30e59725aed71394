//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Archive and rename the listed files (default)
    Run,
    /// Show what `run` would do without touching any file
    Plan,
    /// Print the effective archive and rename lists
    Lists,
}

/// Resolve the command, falling back to `run` when none was given
pub(crate) fn parse_command(cmd: Option<Commands>) -> Commands {
    cmd.unwrap_or(Commands::Run)
}

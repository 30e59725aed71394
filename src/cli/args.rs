//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigGuardMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub(crate) enum GuardMode {
    /// Skip names containing `_YYYYMMDD_` anywhere (default)
    #[default]
    Anywhere,
    /// Skip only names ending in `_YYYYMMDD_HHMMSS` before the extension
    Suffix,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
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
#[command(name = "docorg")]
#[command(
    about = "Archive superseded docs and date-stamp current ones",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Directory the file lists are relative to
    #[arg(short, long, global = true, value_name = "DIR", default_value = ".")]
    pub(crate) root: PathBuf,

    /// Config file (default: <root>/.docorg.toml, then ~/.config/docorg/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Output the run report as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Use this timestamp instead of the clock (YYYYMMDD_HHMMSS)
    #[arg(long, global = true, value_name = "STAMP")]
    pub(crate) at: Option<String>,

    /// Timezone for the clock (e.g., "UTC", "Europe/Berlin"; default local)
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// How rename-list names are recognized as already dated
    #[arg(long, global = true, value_enum, default_value = "anywhere")]
    pub(crate) guard: GuardMode,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // For enum values, only override if CLI is at default
        if let Some(guard) = config.guard
            && self.guard == GuardMode::Anywhere
        {
            self.guard = match guard {
                ConfigGuardMode::Anywhere => GuardMode::Anywhere,
                ConfigGuardMode::Suffix => GuardMode::Suffix,
            };
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

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

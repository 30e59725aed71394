use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::PROJECT_CONFIG_FILE;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigGuardMode {
    Anywhere,
    Suffix,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Replaces the built-in archive list when set
    #[serde(default)]
    pub(crate) archive: Option<Vec<String>>,
    /// Replaces the built-in rename list when set
    #[serde(default)]
    pub(crate) rename: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) archive_prefix: Option<String>,
    #[serde(default)]
    pub(crate) guard: Option<ConfigGuardMode>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
}

impl Config {
    /// Load the explicit config file, or the first discoverable one.
    ///
    /// An explicit path must exist and parse. Discovered files that fail to
    /// parse are warned about and skipped.
    pub(crate) fn load(explicit: Option<&Path>, root: &Path, quiet: bool) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            let content =
                fs::read_to_string(path).map_err(|e| AppError::io("read", path, e))?;
            return Self::parse(&content, path);
        }

        for path in Self::get_config_paths(root) {
            if path.is_file()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content, &path) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return Ok(config);
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: {e}");
                        }
                    }
                }
            }
        }

        Ok(Self::default())
    }

    fn parse(content: &str, path: &Path) -> Result<Self, AppError> {
        toml::from_str::<Config>(content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn get_config_paths(root: &Path) -> Vec<PathBuf> {
        // 1. Project file: <root>/.docorg.toml
        let mut paths = vec![root.join(PROJECT_CONFIG_FILE)];

        // 2. XDG config: ~/.config/docorg/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("docorg").join("config.toml"));
        }

        // 3. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("docorg").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 4. Home directory: ~/.docorg.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(PROJECT_CONFIG_FILE));
        }

        paths
    }
}

/// Superseded one-off reports moved out of the repository root
pub(crate) fn default_archive_list() -> Vec<String> {
    [
        "BRANCH_SYNC_SUMMARY.md",
        "IMPLEMENTATION_SUMMARY.md",
        "MIGRATION_NOTES.md",
        "REFACTOR_PLAN.md",
        "CLEANUP_REPORT.md",
        "TEST_RESULTS.md",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Living documents that get a timestamp suffix
pub(crate) fn default_rename_list() -> Vec<String> {
    ["AGENTS.md", "STATUS.md", "ROADMAP.md", "TODO.md"]
        .into_iter()
        .map(String::from)
        .collect()
}

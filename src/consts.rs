/// Calendar date stamp for the archive directory: "20240601"
pub(crate) const DATE_STAMP_FORMAT: &str = "%Y%m%d";

/// Full stamp inserted into renamed files: "20240601_100000"
pub(crate) const FULL_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Archive directory is this prefix followed by the date stamp
pub(crate) const DEFAULT_ARCHIVE_PREFIX: &str = "docs/archived-info-";

/// Extension split off before inserting the stamp
pub(crate) const MARKDOWN_EXT: &str = ".md";

/// Per-project config file looked up in the working root
pub(crate) const PROJECT_CONFIG_FILE: &str = ".docorg.toml";

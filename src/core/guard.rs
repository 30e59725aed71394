//! "Already dated" detection for rename-list entries

use std::sync::LazyLock;

use regex::Regex;

use crate::cli::GuardMode;

/// `_` + eight digits + `_` anywhere in the name
static DATED_ANYWHERE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_[0-9]{8}_").unwrap());

/// `_YYYYMMDD_HHMMSS` right before the extension (or at the end)
static DATED_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_[0-9]{8}_[0-9]{6}(?:\.[^.]+)?$").unwrap());

/// Check whether a file name already carries a date marker
pub(crate) fn is_dated(file_name: &str, mode: GuardMode) -> bool {
    match mode {
        GuardMode::Anywhere => DATED_ANYWHERE_RE.is_match(file_name),
        GuardMode::Suffix => DATED_SUFFIX_RE.is_match(file_name),
    }
}

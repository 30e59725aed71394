use std::path::{Path, PathBuf};

use crate::consts::MARKDOWN_EXT;

/// Insert `_<stamp>` before a trailing `.md`, or append it when there is none.
pub(crate) fn dated_name(file_name: &str, stamp: &str) -> String {
    match file_name.strip_suffix(MARKDOWN_EXT) {
        Some(base) if !base.is_empty() => format!("{base}_{stamp}{MARKDOWN_EXT}"),
        _ => format!("{file_name}_{stamp}"),
    }
}

/// Dated sibling of `entry`, in the same directory
pub(crate) fn dated_path(entry: &Path, file_name: &str, stamp: &str) -> PathBuf {
    entry.with_file_name(dated_name(file_name, stamp))
}

/// Where an archived entry ends up: the archive directory plus its file name
pub(crate) fn archive_destination(archive_dir: &Path, file_name: &str) -> PathBuf {
    archive_dir.join(file_name)
}

/// `<prefix><YYYYMMDD>`
pub(crate) fn archive_dir_for(prefix: &str, date_stamp: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}{date_stamp}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_goes_before_md() {
        assert_eq!(
            dated_name("AGENTS.md", "20240601_100000"),
            "AGENTS_20240601_100000.md"
        );
    }

    #[test]
    fn only_last_md_is_split() {
        assert_eq!(
            dated_name("notes.md.md", "20240601_100000"),
            "notes.md_20240601_100000.md"
        );
    }

    #[test]
    fn other_extensions_get_suffix_appended() {
        assert_eq!(
            dated_name("TODO.txt", "20240601_100000"),
            "TODO.txt_20240601_100000"
        );
        assert_eq!(dated_name("README", "20240601_100000"), "README_20240601_100000");
        // case-sensitive
        assert_eq!(
            dated_name("A.MD", "20240601_100000"),
            "A.MD_20240601_100000"
        );
    }

    #[test]
    fn bare_extension_is_not_split() {
        assert_eq!(dated_name(".md", "20240601_100000"), ".md_20240601_100000");
    }

    #[test]
    fn dated_path_stays_in_directory() {
        let p = dated_path(Path::new("docs/PLAN.md"), "PLAN.md", "20240601_100000");
        assert_eq!(p, PathBuf::from("docs/PLAN_20240601_100000.md"));
    }

    #[test]
    fn archive_paths() {
        let dir = archive_dir_for("docs/archived-info-", "20240601");
        assert_eq!(dir, PathBuf::from("docs/archived-info-20240601"));
        assert_eq!(
            archive_destination(&dir, "BRANCH_SYNC_SUMMARY.md"),
            PathBuf::from("docs/archived-info-20240601/BRANCH_SYNC_SUMMARY.md")
        );
    }
}

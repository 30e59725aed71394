//! The two organizer passes
//!
//! Archive pass: move every archive-list file that exists into
//! `<prefix><YYYYMMDD>/`. Rename pass: give every rename-list file that
//! exists and is not already dated a `_<YYYYMMDD_HHMMSS>` suffix.
//!
//! A listed file that is missing is not an error; it is recorded as
//! skipped and the run goes on. Any filesystem failure aborts the run
//! immediately, leaving earlier moves in place.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::GuardMode;
use crate::error::AppError;
use crate::files::FileSystem;
use crate::utils::{Clock, RunStamp};

use super::guard::is_dated;
use super::naming::{archive_destination, archive_dir_for, dated_path};
use super::types::{Action, ActionKind, OrganizerLists, RunReport, entry_file_name};

#[derive(Debug, Clone)]
pub(crate) struct OrganizerOptions {
    pub(crate) archive_prefix: String,
    pub(crate) guard: GuardMode,
    /// Compute actions without touching the filesystem
    pub(crate) dry_run: bool,
    /// Suppress per-file progress lines
    pub(crate) quiet: bool,
}

pub(crate) struct Organizer<'a> {
    fs: &'a dyn FileSystem,
    lists: &'a OrganizerLists,
    options: OrganizerOptions,
}

impl<'a> Organizer<'a> {
    pub(crate) fn new(
        fs: &'a dyn FileSystem,
        lists: &'a OrganizerLists,
        options: OrganizerOptions,
    ) -> Self {
        Self { fs, lists, options }
    }

    /// Run both passes with a single stamp taken from `clock`
    pub(crate) fn run(&self, clock: &dyn Clock) -> Result<RunReport, AppError> {
        self.lists.validate()?;

        let stamp = RunStamp::new(clock.now());
        let archive_dir = archive_dir_for(&self.options.archive_prefix, &stamp.date());
        debug!(
            stamp = %stamp.full(),
            archive_dir = %archive_dir.display(),
            dry_run = self.options.dry_run,
            "starting run"
        );

        let mut report = RunReport::new(archive_dir, stamp, self.options.dry_run);

        if !self.options.dry_run {
            self.fs
                .create_dir_all(&report.archive_dir)
                .map_err(|e| AppError::io("create", report.archive_dir.clone(), e))?;
        }

        self.archive_pass(&mut report)?;
        self.rename_pass(&mut report)?;

        debug!(changed = report.changed(), "run finished");
        Ok(report)
    }

    fn archive_pass(&self, report: &mut RunReport) -> Result<(), AppError> {
        for entry in &self.lists.archive {
            let file_name = entry_file_name(entry)?;
            let from = PathBuf::from(entry);

            if !self.fs.is_file(&from) {
                info!(entry = %entry, "not present, skipping archive");
                report.actions.push(skipped(entry, from, ActionKind::SkippedMissing));
                continue;
            }

            let to = archive_destination(&report.archive_dir, file_name);
            self.move_file(&from, &to, "move")?;
            self.progress("Archived", &from, &to);
            report.actions.push(Action {
                entry: entry.clone(),
                kind: ActionKind::Archived,
                from,
                to: Some(to),
            });
        }
        Ok(())
    }

    fn rename_pass(&self, report: &mut RunReport) -> Result<(), AppError> {
        let stamp = report.stamp.full();
        for entry in &self.lists.rename {
            let file_name = entry_file_name(entry)?;
            let from = PathBuf::from(entry);

            if !self.fs.is_file(&from) {
                info!(entry = %entry, "not present, skipping rename");
                report.actions.push(skipped(entry, from, ActionKind::SkippedMissing));
                continue;
            }
            if is_dated(file_name, self.options.guard) {
                info!(entry = %entry, "already dated, skipping rename");
                report.actions.push(skipped(entry, from, ActionKind::SkippedDated));
                continue;
            }

            let to = dated_path(&from, file_name, &stamp);
            self.move_file(&from, &to, "rename")?;
            self.progress("Renamed", &from, &to);
            report.actions.push(Action {
                entry: entry.clone(),
                kind: ActionKind::Renamed,
                from,
                to: Some(to),
            });
        }
        Ok(())
    }

    /// Move `from` to `to`, never replacing an existing entry
    fn move_file(&self, from: &Path, to: &Path, action: &'static str) -> Result<(), AppError> {
        if self.fs.exists(to) {
            return Err(AppError::DestinationExists {
                path: to.to_path_buf(),
            });
        }
        if self.options.dry_run {
            return Ok(());
        }
        self.fs
            .rename(from, to)
            .map_err(|e| AppError::io(action, from, e))
    }

    fn progress(&self, verb: &str, from: &Path, to: &Path) {
        if self.options.quiet {
            return;
        }
        let prefix = if self.options.dry_run { "Would be " } else { "" };
        let verb = if self.options.dry_run {
            verb.to_lowercase()
        } else {
            verb.to_string()
        };
        println!("{prefix}{verb}: {} -> {}", from.display(), to.display());
    }
}

fn skipped(entry: &str, from: PathBuf, kind: ActionKind) -> Action {
    Action {
        entry: entry.to_string(),
        kind,
        from,
        to: None,
    }
}

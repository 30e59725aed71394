use serde::Serialize;

use crate::core::{ActionKind, OrganizerLists, RunReport};
use crate::error::AppError;

#[derive(Serialize)]
struct Totals {
    archived: usize,
    renamed: usize,
    skipped_missing: usize,
    skipped_dated: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a RunReport,
    totals: Totals,
}

pub(crate) fn output_report_json(report: &RunReport) -> Result<String, AppError> {
    let out = JsonReport {
        report,
        totals: Totals {
            archived: report.count(ActionKind::Archived),
            renamed: report.count(ActionKind::Renamed),
            skipped_missing: report.count(ActionKind::SkippedMissing),
            skipped_dated: report.count(ActionKind::SkippedDated),
        },
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

pub(crate) fn output_lists_json(lists: &OrganizerLists) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(lists)?)
}

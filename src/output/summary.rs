use comfy_table::{Color, Table};

use crate::core::{ActionKind, RunReport};
use crate::output::format::{create_styled_table, header_cell, right_cell, styled_cell};

const KINDS: [ActionKind; 4] = [
    ActionKind::Archived,
    ActionKind::Renamed,
    ActionKind::SkippedMissing,
    ActionKind::SkippedDated,
];

fn kind_color(kind: ActionKind, use_color: bool) -> Option<Color> {
    if !use_color {
        return None;
    }
    match kind {
        ActionKind::Archived => Some(Color::Yellow),
        ActionKind::Renamed => Some(Color::Green),
        ActionKind::SkippedMissing | ActionKind::SkippedDated => Some(Color::DarkGrey),
    }
}

pub(crate) fn build_summary_table(report: &RunReport, use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Result", use_color),
        header_cell("Files", use_color),
    ]);
    for kind in KINDS {
        let color = kind_color(kind, use_color);
        table.add_row(vec![
            styled_cell(kind.label(), color, false),
            right_cell(&report.count(kind).to_string(), color, false),
        ]);
    }
    table
}

/// Final summary after the per-file progress lines
pub(crate) fn print_summary(report: &RunReport, use_color: bool) {
    let title = if report.dry_run {
        "Planned changes"
    } else {
        "Organized docs"
    };
    println!("\n  {title} (stamp {})\n", report.stamp.full());
    println!("{}", build_summary_table(report, use_color));
    println!("\n  Archive directory: {}\n", report.archive_dir.display());
}

use crate::core::OrganizerLists;
use crate::output::format::{create_styled_table, header_cell, styled_cell};

/// Print the effective lists, one table row per entry
pub(crate) fn print_lists(lists: &OrganizerLists, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("List", use_color),
        header_cell("Entry", use_color),
    ]);
    for (label, entries) in [("archive", &lists.archive), ("rename", &lists.rename)] {
        for entry in entries {
            table.add_row(vec![styled_cell(label, None, false), styled_cell(entry, None, false)]);
        }
    }
    println!("{table}");
}

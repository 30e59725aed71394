mod format;
mod json;
mod lists;
mod summary;

pub(crate) use json::{output_lists_json, output_report_json};
pub(crate) use lists::print_lists;
pub(crate) use summary::print_summary;

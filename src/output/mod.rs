mod format;
mod json;
mod table;
mod widget;

pub(crate) use json::output_report_json;
pub(crate) use table::print_panel;
pub(crate) use widget::print_widget_line;

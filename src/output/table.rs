use chrono::NaiveDate;

use crate::core::{AgeReport, BirthDate, format_mdy};
use crate::output::format::{
    countdown_cell, create_styled_table, header_cell, value_cell, years_cell,
};

/// Print the full panel: one row of birth date, age, and the countdown
/// to the next birthday, followed by the projected date.
pub(crate) fn print_panel(birth: BirthDate, report: &AgeReport, next: NaiveDate, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Birth Date", use_color),
        header_cell("Age", use_color),
        header_cell("Next Birthday", use_color),
    ]);
    table.add_row(vec![
        value_cell(&birth.to_string()),
        years_cell(report.years),
        countdown_cell(report, use_color),
    ]);

    println!("\n  Age Calculator\n");
    println!("{table}");
    println!("\n  Next birthday on {}\n", format_mdy(next));
}

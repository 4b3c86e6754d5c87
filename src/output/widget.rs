use crate::core::{AgeReport, BirthDate};
use crate::output::format::compact_countdown;

/// Output a single line suitable for statusbar/tmux integration
/// Format: "Age: 34 | Next: 2m 14d" (optionally "| DOB: 06/15/1990")
pub(crate) fn print_widget_line(birth: BirthDate, report: &AgeReport, show_date: bool) {
    let mut parts = vec![
        format!("Age: {}", report.years),
        format!("Next: {}", compact_countdown(report)),
    ];
    if show_date {
        parts.push(format!("DOB: {birth}"));
    }
    println!("{}", parts.join(" | "));
}

use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::AgeReport;

/// Birthday celebration text shared by every renderer
pub(super) const BIRTHDAY_TEXT: &str = "Today! 🎉";

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Countdown in words: "11 months, 28 days", "6 days", or the birthday
/// celebration. Days are always shown once months appear, even at zero.
pub(super) fn countdown_phrase(report: &AgeReport) -> String {
    if report.is_birthday_today {
        return BIRTHDAY_TEXT.to_string();
    }
    let days = report.days_until_birthday;
    if report.months_until_birthday > 0 {
        let months = report.months_until_birthday;
        format!(
            "{months} month{}, {days} day{}",
            plural(months),
            plural(days)
        )
    } else {
        format!("{days} day{}", plural(days))
    }
}

/// Countdown in compact form: "11m 28d" or "6d"
pub(super) fn compact_countdown(report: &AgeReport) -> String {
    if report.is_birthday_today {
        return BIRTHDAY_TEXT.to_string();
    }
    if report.months_until_birthday > 0 {
        format!(
            "{}m {}d",
            report.months_until_birthday, report.days_until_birthday
        )
    } else {
        format!("{}d", report.days_until_birthday)
    }
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn value_cell(text: &str) -> Cell {
    Cell::new(text)
}

/// Right-aligned bold cell for the age-in-years column
pub(super) fn years_cell(years: i32) -> Cell {
    Cell::new(years.to_string())
        .set_alignment(CellAlignment::Right)
        .add_attribute(Attribute::Bold)
}

/// Countdown phrase cell, highlighted when today is the birthday
pub(super) fn countdown_cell(report: &AgeReport, use_color: bool) -> Cell {
    let mut cell = Cell::new(countdown_phrase(report));
    if report.is_birthday_today {
        cell = cell.add_attribute(Attribute::Bold);
        if use_color {
            cell = cell.fg(Color::Green);
        }
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(months: i64, days: i64, birthday: bool) -> AgeReport {
        AgeReport {
            years: 34,
            months_until_birthday: months,
            days_until_birthday: days,
            is_birthday_today: birthday,
        }
    }

    #[test]
    fn phrase_days_only() {
        assert_eq!(countdown_phrase(&report(0, 6, false)), "6 days");
        assert_eq!(countdown_phrase(&report(0, 1, false)), "1 day");
    }

    #[test]
    fn phrase_months_and_days() {
        assert_eq!(
            countdown_phrase(&report(11, 28, false)),
            "11 months, 28 days"
        );
        assert_eq!(countdown_phrase(&report(1, 1, false)), "1 month, 1 day");
    }

    #[test]
    fn phrase_keeps_zero_days_after_months() {
        assert_eq!(countdown_phrase(&report(2, 0, false)), "2 months, 0 days");
    }

    #[test]
    fn phrase_birthday_wins() {
        assert_eq!(countdown_phrase(&report(0, 0, true)), BIRTHDAY_TEXT);
    }

    #[test]
    fn compact_omits_zero_months() {
        assert_eq!(compact_countdown(&report(0, 6, false)), "6d");
        assert_eq!(compact_countdown(&report(11, 28, false)), "11m 28d");
        assert_eq!(compact_countdown(&report(0, 0, true)), BIRTHDAY_TEXT);
    }
}

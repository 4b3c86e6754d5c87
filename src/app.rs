use chrono::{Local, NaiveDate};

use crate::cli::Cli;
use crate::core::{
    BirthDate, Validation, evaluate, next_birthday, parse_input, parse_mdy, validate_input,
};
use crate::error::ParseError;
use crate::output::{output_report_json, print_panel, print_widget_line};
use crate::store;

const NO_DATE_HINT: &str = "No birth date set. Run `agecal set MM/DD/YYYY` first.";

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) today: NaiveDate,
}

/// Resolve the evaluation date: the --as-of override or the local
/// calendar day.
pub(crate) fn resolve_today(as_of: Option<&str>) -> Result<NaiveDate, ParseError> {
    match as_of {
        Some(input) => parse_mdy(input),
        None => Ok(Local::now().date_naive()),
    }
}

fn render_report(birth: BirthDate, ctx: &CommandContext<'_>) {
    let report = match evaluate(birth, ctx.today) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let next = next_birthday(birth, ctx.today);

    if ctx.cli.json {
        println!("{}", output_report_json(birth, &report, next));
    } else {
        print_panel(birth, &report, next, ctx.cli.use_color());
    }
}

pub(crate) fn handle_show(ctx: &CommandContext<'_>) {
    let Some(birth) = store::load() else {
        println!("{NO_DATE_HINT}");
        return;
    };
    render_report(birth, ctx);
}

pub(crate) fn handle_set(input: &str, ctx: &CommandContext<'_>) {
    let birth = match parse_input(input, ctx.today) {
        Ok(birth) => birth,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    match store::save(birth) {
        Ok(path) => eprintln!("Saved birth date to {}", path.display()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
    render_report(birth, ctx);
}

pub(crate) fn handle_check(input: &str, ctx: &CommandContext<'_>) {
    match validate_input(input, ctx.today) {
        Validation::Valid(birth) => println!("Valid: {birth}"),
        Validation::Incomplete => println!("Incomplete entry, expected MM/DD/YYYY."),
        Validation::Invalid(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

pub(crate) fn handle_widget(show_date: bool, ctx: &CommandContext<'_>) {
    let Some(birth) = store::load_quiet() else {
        println!("No birth date set");
        return;
    };
    let report = match evaluate(birth, ctx.today) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if ctx.cli.json {
        let next = next_birthday(birth, ctx.today);
        println!("{}", output_report_json(birth, &report, next));
    } else {
        print_widget_line(birth, &report, show_date);
    }
}

pub(crate) fn handle_years(ctx: &CommandContext<'_>) {
    let Some(birth) = store::load_quiet() else {
        println!("{NO_DATE_HINT}");
        return;
    };
    match evaluate(birth, ctx.today) {
        Ok(report) => println!("{}", report.years),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_today_parses_override() {
        let today = resolve_today(Some("02/29/2024")).unwrap();
        assert_eq!(today, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn resolve_today_rejects_other_formats() {
        assert_eq!(
            resolve_today(Some("2024-02-29")),
            Err(ParseError::InvalidFormat)
        );
    }

    #[test]
    fn resolve_today_defaults_to_local_date() {
        assert!(resolve_today(None).is_ok());
    }
}

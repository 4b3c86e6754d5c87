mod app;
mod cli;
mod consts;
mod core;
mod error;
mod output;
mod store;

use clap::Parser;

use app::CommandContext;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let today = match app::resolve_today(cli.as_of.as_deref()) {
        Ok(today) => today,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let ctx = CommandContext { cli: &cli, today };

    match cli.command.as_ref().unwrap_or(&Commands::Show) {
        Commands::Show => app::handle_show(&ctx),
        Commands::Set { date } => app::handle_set(date, &ctx),
        Commands::Check { input } => app::handle_check(input, &ctx),
        Commands::Widget { show_date } => app::handle_widget(*show_date, &ctx),
        Commands::Years => app::handle_years(&ctx),
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process::ExitCode;

use supplysoul::cli::{self, Cli, Command};
use supplysoul::config::Config;
use supplysoul::logging;

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let mut stdout = io::stdout().lock();

    match args.command {
        None => start_tui(&config, None),
        Some(Command::Tui { page }) => start_tui(&config, page),
        Some(Command::Ask { query }) => {
            logging::init_stderr("warn");
            cli::ask(&config, &query, &mut stdout)
        }
        Some(Command::List(list)) => {
            logging::init_stderr("warn");
            cli::list(&config, &list, &mut stdout)
        }
        Some(Command::Stats { json }) => {
            logging::init_stderr("warn");
            cli::stats(&config, json, &mut stdout)
        }
        Some(Command::Categories) => {
            logging::init_stderr("warn");
            cli::list_categories(&config, &mut stdout)?;
            Ok(())
        }
    }
}

fn start_tui(config: &Config, page: Option<supplysoul::ui::Page>) -> Result<()> {
    let log_path = logging::init_file(&config.logging).context("Failed to open log file")?;
    tracing::info!(log = %log_path.display(), "Logging initialised");
    supplysoul::ui::run(config, page.unwrap_or(config.ui.start_page))
        .context("Terminal UI failed")
}

//! # CLI Layer
//!
//! One possible UI client for the address book. It is the only place that
//! touches stdin/stdout, parses arguments and turns errors into exit codes.
//!
//! ## Structure
//!
//! - `run()`: parses arguments, builds the context, runs the loop
//! - `init_context()`: loads settings and opens the book
//! - `control`: the command loop and the record selection flow
//! - `console`: prompts and line input
//! - `render`: listing, banner and message output

mod console;
mod control;
mod render;
mod setup;

use abook::api::AbookApi;
use abook::config::Settings;
use abook::error::Result;
use abook::logging::{init_logging, Verbosity};
use abook::store::csv::CsvStore;
use clap::Parser;
use self::console::Console;
use setup::Cli;
use std::io;
use tracing::info;

/// Everything the loop needs, built once at startup.
struct AppContext {
    api: AbookApi<CsvStore>,
    initial_command: String,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_occurrences(cli.verbose));

    let mut ctx = init_context(&cli)?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    control::run_loop(&mut ctx.api, &mut console, &ctx.initial_command)
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let settings = Settings::load(&cli.config)?;
    let book_path = settings.resolve_book_path(&cli.config);
    info!(config = %cli.config.display(), book = %book_path.display(), "Starting");

    let api = AbookApi::open(settings.description, CsvStore::new(book_path))?;

    Ok(AppContext {
        api,
        initial_command: cli.mode.clone().unwrap_or(settings.mode),
    })
}

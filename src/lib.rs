//! articleimport library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;

use clap::Parser;
use cli::parser::Cli;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    if cli.dry_run {
        cli::commands::verify::handle(cli)
    } else {
        cli::commands::import::handle(cli)
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}

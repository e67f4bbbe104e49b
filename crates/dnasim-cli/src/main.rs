//! dnasim CLI - encode text as DNA bases and manage saved presets
//!
//! This is the command-line interface and HTTP server for dnasim. It wires
//! configuration, logging and the preset store to the core library.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod logging;
mod output;
mod server;

use clap::Parser;

use dnasim_core::DnaSimError;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::constants::exit_codes;

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.command {
        Commands::Serve(_) => "info",
        _ => "warn",
    };
    logging::init(cli.verbose, default_level);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Binary(args) => commands::handle_binary(args),
        Commands::Decode(args) => commands::handle_decode(args),
        Commands::Serve(args) => commands::handle_serve(&AppContext::from_cli(cli)?, args),
        Commands::Encode(args) => commands::handle_encode(&AppContext::from_cli(cli)?, args),
        Commands::Presets(command) => {
            commands::handle_presets(&AppContext::from_cli(cli)?, command)
        }
    }
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DnaSimError>() {
        Some(DnaSimError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(DnaSimError::Validation { .. }) | Some(DnaSimError::InvalidInput(_)) => {
            exit_codes::INVALID_INPUT
        }
        _ => 1,
    }
}

mod cli;
mod config;
mod menu;

use crate::cli::Cli;
use crate::config::Config;
use biblio_catalog::{Database, Repository};
use clap::Parser;
use std::io;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: failed to load configuration: {err}");
            return ExitCode::FAILURE;
        },
    };
    if let Some(database) = cli.database {
        config.database = database;
    }

    if let Some(parent) = config.database.parent()
        && !parent.as_os_str().is_empty()
        && let Err(err) = std::fs::create_dir_all(parent)
    {
        eprintln!("error: failed to create {}: {err}", parent.display());
        return ExitCode::FAILURE;
    }

    tracing::info!(database = %config.database.display(), "opening catalog");
    let db = match Database::connect(&config.database).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("error: failed to open catalog database: {err}");
            return ExitCode::FAILURE;
        },
    };
    let repo = Repository::new(db.pool().clone(), config.integrity);

    let outcome = menu::main_menu(&repo).await;
    db.close().await;
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        // Closing stdin is a normal way to leave the menu.
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    // Logs go to stderr so they never interleave with the menu itself.
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

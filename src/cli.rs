use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Manage a small library catalog of books, authors, categories and reviews."
)]
pub struct Cli {
    /// Path to the catalog database file (overrides the configured path).
    #[arg(long, short = 'd', value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Path to the TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

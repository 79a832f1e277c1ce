// src/cli/mod.rs
use std::path::PathBuf;
use clap::{ArgAction, Parser};

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;
pub use handlers::CliError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Word list for easy-to-remember passwords (one word per line)
    #[arg(long, global = true)]
    pub wordlist: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to execute; starts an interactive session when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

use std::path::Path;
use anyhow::{Context, Result};
use clap::Parser;
use inquire::InquireError;

use rust_passgen::cli::handlers::{self, ClassFlags};
use rust_passgen::cli::{menu, Args, CliCommand, CliError};
use rust_passgen::core::Config;
use rust_passgen::generators::{PasswordGenerator, WordList};
use rust_passgen::logging::{self, LogSettings};

fn main() -> Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();
    if let Some(path) = &args.wordlist {
        config.wordlist_path = Some(path.clone());
    }

    logging::init(&LogSettings::from_config(&config).with_verbosity(args.verbose))
        .context("Failed to initialize logging")?;
    log::info!("Starting password generator");
    log::debug!("Loaded config: {:?}", config);

    let words = match &config.wordlist_path {
        Some(path) => WordList::from_file(path)
            .with_context(|| format!("Failed to load word list from {}", path.display()))?,
        None => WordList::builtin(),
    };
    log::debug!("Using {} words (shortest {})", words.len(), words.shortest());
    let generator = PasswordGenerator::with_words(words);

    match args.command {
        Some(CliCommand::Generate { length, upper, no_lower, numbers, symbols, easy, count, json }) => {
            let flags = ClassFlags { upper, no_lower, numbers, symbols, easy };
            let classes = handlers::resolve_classes(&config.default_classes, flags);
            let outcomes = handlers::handle_generate(&generator, &config, length, &classes, count)?;
            for outcome in &outcomes {
                println!("{}", handlers::render_outcome(outcome, json)?);
            }
        }
        Some(CliCommand::Evaluate { password, easy, json }) => {
            let result = handlers::handle_evaluate(&password, easy);
            println!("{}", handlers::render_strength(&result, json)?);
        }
        None => match menu::run_cli_menu(&generator, &config) {
            Ok(()) => {}
            Err(CliError::Prompt(InquireError::OperationCanceled | InquireError::OperationInterrupted)) => {
                println!("👋 Goodbye!");
            }
            Err(e) => return Err(e).context("Interactive session failed"),
        },
    }

    log::info!("Done");
    Ok(())
}

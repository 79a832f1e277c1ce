// src/cli/menu.rs
use inquire::{Confirm, Text};

use super::handlers::{handle_generate, parse_length, Result};
use crate::core::Config;
use crate::generators::PasswordGenerator;
use crate::models::CharacterClassConfig;
use crate::utils::format_strength_meter;

pub fn run_cli_menu(generator: &PasswordGenerator, config: &Config) -> Result<()> {
    println!("🔐 Password Generator");
    println!("Length must be between {} and {}.\n", config.min_length, config.max_length);

    let mut classes = config.default_classes;
    let mut length = config.default_length;

    loop {
        let input = Text::new("Character length:")
            .with_default(&length.to_string())
            .prompt()?;

        length = match parse_length(config, &input) {
            Ok(length) => length,
            Err(e) => {
                println!("❌ {}", e);
                continue;
            }
        };

        classes = prompt_classes(&classes)?;

        let outcomes = handle_generate(generator, config, Some(length), &classes, 1)?;
        for outcome in &outcomes {
            println!("\nGenerated Password: {}", outcome.password);
            println!("Strength: {}\n", format_strength_meter(&outcome.strength));
        }

        let again = Confirm::new("Generate another?")
            .with_default(true)
            .prompt()?;

        if !again {
            break;
        }
    }

    Ok(())
}

fn prompt_classes(previous: &CharacterClassConfig) -> Result<CharacterClassConfig> {
    let upper_case = Confirm::new("Include upper case letters?")
        .with_default(previous.upper_case)
        .prompt()?;

    let lower_case = Confirm::new("Include lower case letters?")
        .with_default(previous.lower_case)
        .prompt()?;

    let numbers = Confirm::new("Include numbers?")
        .with_default(previous.numbers)
        .prompt()?;

    let symbols = Confirm::new("Include symbols?")
        .with_default(previous.symbols)
        .prompt()?;

    let easy_to_remember = Confirm::new("Make it easy to remember?")
        .with_default(previous.easy_to_remember)
        .prompt()?;

    Ok(CharacterClassConfig {
        upper_case,
        lower_case,
        numbers,
        symbols,
        easy_to_remember,
    })
}

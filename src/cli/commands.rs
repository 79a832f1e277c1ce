// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length (defaults to the configured length)
        #[arg(short, long)]
        length: Option<usize>,

        /// Include upper case letters
        #[arg(long)]
        upper: bool,

        /// Leave out lower case letters
        #[arg(long)]
        no_lower: bool,

        /// Include numbers
        #[arg(long)]
        numbers: bool,

        /// Include symbols
        #[arg(long)]
        symbols: bool,

        /// Start with dictionary words joined by hyphens
        #[arg(long)]
        easy: bool,

        /// Number of passwords to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Rate the strength of a password
    Evaluate {
        /// Password to rate
        #[arg(required = true)]
        password: String,

        /// Treat the password as easy to remember
        #[arg(long)]
        easy: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

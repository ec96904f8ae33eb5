//  ____                               _  _    _
// |  _ \   __ _  ___  ___  _ __ ___  (_)| |_ | |__
// | |_) | / _` |/ __|/ __|| '_ ` _ \ | || __|| '_ \
// |  __/ | (_| |\__ \\__ \| | | | | || || |_ | | | |
// |_|     \__,_||___/|___/|_| |_| |_||_| \__||_| |_|
//
// Date : 2026-08-20
// Version : 0.1.0
// License : MIT
//
// A random password generator with strength rating.

use anyhow::Result;
use clap::Parser;

use passmith::charset::{MAX_LENGTH, MIN_LENGTH};
use passmith::{commands, setclip};

#[derive(Debug, Parser)]
#[command(name = "passmith")]
#[command(about = "Generate random passwords and rate their strength", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Rate the strength of an existing password
    Score(ScoreArgs),
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password
    #[arg(
        short,
        long,
        default_value_t = 16,
        value_parser = clap::value_parser!(u8).range(MIN_LENGTH as i64..=MAX_LENGTH as i64)
    )]
    length: u8,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false)]
    no_symbols: bool,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Copy the password to the clipboard, clearing it after SECS seconds
    #[arg(short, long, value_name = "SECS", num_args = 0..=1, default_missing_value = "30")]
    copy: Option<u64>,
}

#[derive(Debug, Parser)]
struct ScoreArgs {
    /// Password to rate
    password: String,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    // Re-entry point for the detached clipboard-clear process.
    if setclip::run_clear_daemon_if_requested() {
        return Ok(());
    }

    let cli = Cli::parse();
    match cli {
        Cli::Gen(args) => commands::password_gen::generate_random(
            args.length as usize,
            args.no_uppercase,
            args.no_lowercase,
            args.no_numbers,
            args.no_symbols,
            args.json,
            args.copy,
        ),
        Cli::Score(args) => commands::testpass::test_password(&args.password, args.json),
    }
}

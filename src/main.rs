//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Auther : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-06-30
// Version : 0.1.0
// License : Mulan PSL v2
//
// Random password generator with guaranteed character classes.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use rpawomaster_passgen::commands;
use rpawomaster_passgen::logging::{self, LOG_ENV};
use rpawomaster_passgen::passgen::PasswordOptions;

#[derive(Debug, Parser)]
#[command(name = "rpawomaster-passgen")]
#[command(about = "Generate random passwords from selected character types", long_about = None)]
struct Cli {
    /// Log filter, e.g. `debug` or `rpawomaster_passgen=trace`
    #[arg(long, global = true, env = LOG_ENV)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate passwords from command line options
    Gen(GenArgs),

    /// Ask for length and character types interactively
    Prompt {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password
    #[arg(short, long, default_value_t = 16)]
    length: usize,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

impl From<&GenArgs> for PasswordOptions {
    fn from(args: &GenArgs) -> Self {
        Self {
            length: args.length,
            include_uppercase: !args.no_uppercase,
            include_lowercase: !args.no_lowercase,
            include_numbers: !args.no_numbers,
            include_special: !args.no_special,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref()).context("Failed to initialise logging")?;
    debug!(?cli, "parsed arguments");

    match cli.command {
        Some(Command::Gen(args)) => {
            let options = PasswordOptions::from(&args);
            let stdout = io::stdout();
            commands::password_gen::generate_random(&mut stdout.lock(), &options, args.count, args.seed)
        }
        Some(Command::Prompt { seed }) => commands::prompt::interactive(seed),
        None => commands::prompt::interactive(None),
    }
}

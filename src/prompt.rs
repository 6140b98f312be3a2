//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Interactive prompt

use std::io::{self, BufRead, Write};

use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::passgen::{self, PasswordOptions};

pub const MIN_PROMPT_LENGTH: i64 = 4;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("input ended before a password was generated")]
    UnexpectedEof,
}

/// Print `prompt` and read one trimmed line.
fn ask<I, O>(input: &mut I, output: &mut O, prompt: &str) -> Result<String, PromptError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
{
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::UnexpectedEof);
    }
    Ok(line.trim().to_string())
}

fn read_length<I, O>(input: &mut I, output: &mut O) -> Result<usize, PromptError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
{
    loop {
        let answer = ask(input, output, "Enter the desired password length: ")?;
        match answer.parse::<i64>() {
            Ok(n) if n < MIN_PROMPT_LENGTH => writeln!(
                output,
                "Invalid input for password length: Password length must be at least {}",
                MIN_PROMPT_LENGTH
            )?,
            Ok(n) => match usize::try_from(n) {
                Ok(length) => return Ok(length),
                Err(e) => writeln!(output, "Invalid input for password length: {}", e)?,
            },
            Err(e) => writeln!(output, "Invalid input for password length: {}", e)?,
        }
        debug!(input = %answer, "rejected password length");
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

const CLASS_QUESTIONS: [&str; 4] = [
    "Include uppercase letters? (y/n): ",
    "Include lowercase letters? (y/n): ",
    "Include digits? (y/n): ",
    "Include special characters? (y/n): ",
];

/// Runs the interactive loop until a password has been generated and printed.
///
/// All four class questions are asked before any answer is checked, and
/// they are asked again as a group whenever one of them is invalid.
pub fn run_prompt<I, O, R>(input: &mut I, output: &mut O, rng: &mut R) -> Result<String, PromptError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
    R: Rng + ?Sized,
{
    writeln!(output, "Random Password Generator")?;
    let length = read_length(input, output)?;

    loop {
        let mut answers = Vec::with_capacity(CLASS_QUESTIONS.len());
        for question in CLASS_QUESTIONS {
            answers.push(ask(input, output, question)?);
        }

        let flags: Option<Vec<bool>> = answers.iter().map(|a| parse_yes_no(a)).collect();
        let Some(flags) = flags else {
            writeln!(output, "Please enter 'y' or 'n' for each option.")?;
            continue;
        };
        if !flags.iter().any(|&on| on) {
            writeln!(output, "At least one type of character must be selected")?;
            continue;
        }

        let options = PasswordOptions {
            length,
            include_uppercase: flags[0],
            include_lowercase: flags[1],
            include_numbers: flags[2],
            include_special: flags[3],
        };
        if let Some(password) = generate_or_report(output, &options, rng)? {
            return Ok(password);
        }
    }
}

/// Prints the generated password, or the generator error so the caller can ask again.
fn generate_or_report<O, R>(
    output: &mut O,
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<Option<String>, PromptError>
where
    O: Write + ?Sized,
    R: Rng + ?Sized,
{
    match passgen::generate_password(options, rng) {
        Ok(password) => {
            writeln!(output, "Generated Password: {}", password)?;
            Ok(Some(password))
        }
        Err(e) => {
            warn!(error = %e, "password generation failed");
            writeln!(output, "Error generating password: {}", e)?;
            Ok(None)
        }
    }
}

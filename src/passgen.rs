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
// Password generator

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::debug;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A character class a password can be required to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    /// Returns the class `c` belongs to, if any.
    pub fn of(c: char) -> Option<CharClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassGenError {
    #[error("At least one character set must be included")]
    EmptyPool,
    #[error("Password length must be at least {required} to include all selected character types (got {length})")]
    InvalidLength { length: usize, required: usize },
    #[error("Password length {length} is too large to allocate")]
    LengthTooLarge { length: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_special: true,
        }
    }
}

impl PasswordOptions {
    /// Enabled classes, always in the order upper, lower, digit, special.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        let flags = [
            self.include_uppercase,
            self.include_lowercase,
            self.include_numbers,
            self.include_special,
        ];
        CharClass::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(class, on)| on.then_some(class))
            .collect()
    }
}

/// Generates a password holding at least one character of every enabled class.
///
/// The guaranteed characters are drawn first, the rest are drawn with
/// replacement from the combined pool, then the whole sequence is shuffled
/// so no class sits at a fixed position.
pub fn generate_password<R>(options: &PasswordOptions, rng: &mut R) -> Result<String, PassGenError>
where
    R: Rng + ?Sized,
{
    let classes = options.enabled_classes();
    if classes.is_empty() {
        return Err(PassGenError::EmptyPool);
    }
    if options.length < classes.len() {
        return Err(PassGenError::InvalidLength {
            length: options.length,
            required: classes.len(),
        });
    }

    let required_sets: Vec<Vec<char>> = classes
        .iter()
        .map(|class| class.alphabet().chars().collect())
        .collect();
    let all_chars: Vec<char> = required_sets.iter().flatten().copied().collect();

    let mut password_chars: Vec<char> = Vec::new();
    password_chars
        .try_reserve_exact(options.length)
        .map_err(|_| PassGenError::LengthTooLarge { length: options.length })?;

    // Add one character from each required set
    for chars in &required_sets {
        password_chars.extend(chars.choose(rng));
    }

    // Add remaining characters from combined pool
    for _ in 0..(options.length - required_sets.len()) {
        password_chars.extend(all_chars.choose(rng));
    }

    password_chars.shuffle(rng);

    debug!(
        length = options.length,
        classes = classes.len(),
        pool = all_chars.len(),
        "generated password"
    );
    Ok(password_chars.into_iter().collect())
}

/// Flag style entry point, see [`generate_password`].
pub fn generate<R>(
    length: usize,
    include_uppercase: bool,
    include_lowercase: bool,
    include_numbers: bool,
    include_special: bool,
    rng: &mut R,
) -> Result<String, PassGenError>
where
    R: Rng + ?Sized,
{
    let options = PasswordOptions {
        length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_special,
    };
    generate_password(&options, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_disjoint() {
        for c in CharClass::ALL.iter().flat_map(|class| class.alphabet().chars()) {
            let owners = CharClass::ALL.iter().filter(|class| class.contains(c)).count();
            assert_eq!(owners, 1, "{c:?} belongs to {owners} classes");
        }
    }

    #[test]
    fn special_is_ascii_punctuation() {
        assert_eq!(SPECIAL.len(), 32);
        assert!(SPECIAL.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn enabled_classes_keep_order() {
        let options = PasswordOptions {
            include_uppercase: false,
            include_lowercase: true,
            include_numbers: false,
            include_special: true,
            ..Default::default()
        };
        assert_eq!(
            options.enabled_classes(),
            vec![CharClass::Lowercase, CharClass::Special]
        );
    }

    #[test]
    fn class_of_unknown_char() {
        assert_eq!(CharClass::of(' '), None);
        assert_eq!(CharClass::of('é'), None);
        assert_eq!(CharClass::of('~'), Some(CharClass::Special));
    }
}

use std::io::Write;

use anyhow::{Context, Result};
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::info;

use crate::passgen::{self, PasswordOptions};

/// Picks the RNG for a run: seeded ChaCha20 when reproducible output is wanted, the OS RNG otherwise.
pub fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded ChaCha20 generator");
            Box::new(ChaCha20Rng::seed_from_u64(seed))
        }
        None => Box::new(OsRng),
    }
}

pub fn generate_random<W: Write>(
    out: &mut W,
    options: &PasswordOptions,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = make_rng(seed);
    for _ in 0..count {
        let password = passgen::generate_password(options, rng.as_mut())
            .context("Failed to generate password")?;
        writeln!(out, "{}", password).context("Failed to write password")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_password_per_line() {
        let mut out = Vec::new();
        let options = PasswordOptions { length: 12, ..Default::default() };
        generate_random(&mut out, &options, 3, Some(7)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 12));
    }

    #[test]
    fn same_seed_same_output() {
        let options = PasswordOptions::default();
        let mut a = Vec::new();
        let mut b = Vec::new();
        generate_random(&mut a, &options, 2, Some(42)).unwrap();
        generate_random(&mut b, &options, 2, Some(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generator_error_is_propagated() {
        let options = PasswordOptions { length: 2, ..Default::default() };
        let err = generate_random(&mut Vec::new(), &options, 1, Some(1)).unwrap_err();
        assert!(err.to_string().contains("Failed to generate password"));
    }
}

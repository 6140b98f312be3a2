use std::io;

use anyhow::{Context, Result};

use crate::commands::password_gen::make_rng;
use crate::prompt::run_prompt;

pub fn interactive(seed: Option<u64>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut rng = make_rng(seed);
    run_prompt(&mut stdin.lock(), &mut stdout.lock(), rng.as_mut())
        .context("Interactive password generation failed")?;
    Ok(())
}

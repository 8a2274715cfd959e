//! Reading and validating cell names from the player
//!
//! Nothing invalid gets past this module: unknown names and squares
//! outside the offered set are re-prompted, never handed to the engine.

use anyhow::{bail, Result};
use checkers_core::name_to_index;
use std::io::{self, BufRead, Write};

pub fn prompt_cell(label: &str, allowed: &[u8]) -> Result<u8> {
    let stdin = io::stdin();
    loop {
        print!("{label}");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("input stream closed");
        }

        match name_to_index(line.trim()) {
            Some(idx) if allowed.contains(&idx) => return Ok(idx),
            Some(_) => println!("That square is not one of the options."),
            None => println!("Unrecognized square name."),
        }
    }
}

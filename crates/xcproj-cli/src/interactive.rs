//! Interactive prompts for CLI commands
//!
//! Uses dialoguer when stdin is a terminal. Piped input is read as a plain
//! `y`/`n` answer so scripts can still respond.

use std::io::{BufRead, IsTerminal};

use colored::Colorize;
use dialoguer::Confirm;
use xcproj_fs::NormalizedPath;

use crate::error::Result;

/// Ask whether `destination` may be overwritten.
///
/// `assume_yes` answers without asking. Anything but `y` on piped input,
/// including end of input, is a decline.
pub fn confirm_overwrite(destination: &NormalizedPath, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    let prompt = format!("{} already exists. Do you want to overwrite?", destination);
    let stdin = std::io::stdin();

    if stdin.is_terminal() {
        let answer = Confirm::new().with_prompt(prompt).default(false).interact()?;
        return Ok(answer);
    }

    println!("{} {} (y/n)", "?".yellow().bold(), prompt);
    read_answer(stdin.lock())
}

/// Read one line and accept it only when it is `y`.
fn read_answer(mut input: impl BufRead) -> Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']) == "y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_answer() {
        assert!(read_answer(Cursor::new("y\n")).unwrap());
        assert!(read_answer(Cursor::new("y\r\n")).unwrap());
        assert!(!read_answer(Cursor::new("n\n")).unwrap());
        assert!(!read_answer(Cursor::new("yes\n")).unwrap());
        assert!(!read_answer(Cursor::new("")).unwrap());
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let path = NormalizedPath::new("/work/Resources/cert.pem");
        assert!(confirm_overwrite(&path, true).unwrap());
    }
}

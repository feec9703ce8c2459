//! Reads the number of darts from the console.

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use thiserror::Error;

pub const PROMPT: &str = "Enter the number of darts to simulate (e.g., 1000): ";

/// Why a line was rejected as a dart count.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Please enter a whole number (integer).")]
    NotAnInteger,

    #[error("Please enter a positive number for the darts.")]
    NotPositive,

    #[error("That is too many darts. Please enter a smaller number.")]
    TooLarge,
}

/// Parses a positive dart count, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns an error if the text is not an integer or is not positive.
pub fn parse_dart_count(text: &str) -> Result<i64, InputError> {
    let count = text.trim().parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => InputError::TooLarge,
        IntErrorKind::NegOverflow => InputError::NotPositive,
        _ => InputError::NotAnInteger,
    })?;

    if count > 0 {
        Ok(count)
    } else {
        Err(InputError::NotPositive)
    }
}

/// Prompts until the user enters a positive dart count.
///
/// Rejected lines are answered with a corrective message and the prompt is
/// shown again.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or with
/// [`io::ErrorKind::UnexpectedEof`] if input ends before a valid count.
pub fn prompt_dart_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<i64> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a dart count was entered",
            ));
        }

        match parse_dart_count(&line) {
            Ok(count) => return Ok(count),
            Err(error) => {
                tracing::debug!(input = line.trim(), %error, "rejected dart count");
                writeln!(output, "{error}")?;
            }
        }
    }
}

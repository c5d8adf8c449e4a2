//! Validated input: retry-forever readers for integers, bounded integers, and
//! yes/no answers.
//!
//! Every rejected line produces an `[ERROR]` message followed by a fresh
//! `Enter ...:` prompt, and the reader tries again. Malformed text, values
//! outside the bound, and read failures all recover this way. The one exit
//! besides a valid answer is end of input, reported as [`InputClosed`].

use std::io;

use thiserror::Error;

use crate::console::tag::ConsoleTag;
use crate::console::terminal::Terminal;

const TRUTHY: [&str; 4] = ["true", "yes", "y", "1"];
const FALSY: [&str; 4] = ["false", "no", "n", "0"];

/// Why a single input line was rejected. Always recovered by re-prompting.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Text that does not parse as an integer.
    #[error("Invalid number format. Please try again")]
    Parse,
    /// Integer outside the inclusive bound.
    #[error("Invalid number. Must be within [{min}..{max}].")]
    OutOfRange {
        /// Lowest accepted value.
        min: i32,
        /// Highest accepted value.
        max: i32,
    },
    /// Text that is not one of the accepted yes/no tokens.
    #[error("Invalid input. Please try again")]
    NotBoolean,
    /// The terminal failed to produce a line.
    #[error("Invalid input. Please try again")]
    Io(#[from] io::Error),
}

/// The input stream reached its end before a valid answer arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input stream closed")]
pub struct InputClosed;

/// Write a tagged message on its own line.
pub fn message<T: Terminal + ?Sized>(term: &mut T, tag: ConsoleTag, text: &str) {
    term.write(&format!("\n{tag} {text}"));
}

/// Write an `Enter <what>: ` prompt on a fresh line.
pub fn enter_prompt<T: Terminal + ?Sized>(term: &mut T, what: &str) {
    term.write(&format!("\nEnter {what}: "));
}

/// Parse one line as an `i32`, ignoring surrounding whitespace.
pub fn parse_int(line: &str) -> Result<i32, PromptError> {
    line.trim().parse::<i32>().map_err(|_| PromptError::Parse)
}

/// Accept `value` only inside `[min, max]`.
pub fn check_range(value: i32, min: i32, max: i32) -> Result<i32, PromptError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(PromptError::OutOfRange { min, max })
    }
}

/// Parse one line as a yes/no answer, case-insensitively.
pub fn parse_bool(line: &str) -> Result<bool, PromptError> {
    let token = line.trim();
    if TRUTHY.iter().any(|t| token.eq_ignore_ascii_case(t)) {
        return Ok(true);
    }
    if FALSY.iter().any(|t| token.eq_ignore_ascii_case(t)) {
        return Ok(false);
    }
    Err(PromptError::NotBoolean)
}

/// Read integers until one parses.
pub fn read_int<T: Terminal + ?Sized>(term: &mut T) -> Result<i32, InputClosed> {
    loop {
        match next_line(term)?.and_then(|line| parse_int(&line)) {
            Ok(value) => return Ok(value),
            Err(err) => reject(term, &err, "new integer"),
        }
    }
}

/// Read integers until one parses and lies within `[min, max]`.
pub fn read_int_in_range<T: Terminal + ?Sized>(
    term: &mut T,
    min: i32,
    max: i32,
) -> Result<i32, InputClosed> {
    loop {
        let value = read_int(term)?;
        match check_range(value, min, max) {
            Ok(value) => return Ok(value),
            Err(err) => reject(term, &err, "new integer"),
        }
    }
}

/// Read lines until one is an accepted yes/no token.
pub fn read_bool<T: Terminal + ?Sized>(term: &mut T) -> Result<bool, InputClosed> {
    loop {
        match next_line(term)?.and_then(|line| parse_bool(&line)) {
            Ok(answer) => return Ok(answer),
            Err(err) => reject(term, &err, "(y/n)"),
        }
    }
}

fn next_line<T: Terminal + ?Sized>(
    term: &mut T,
) -> Result<Result<String, PromptError>, InputClosed> {
    match term.read_line() {
        Ok(Some(line)) => Ok(Ok(line)),
        Ok(None) => Err(InputClosed),
        Err(err) => Ok(Err(PromptError::Io(err))),
    }
}

fn reject<T: Terminal + ?Sized>(term: &mut T, err: &PromptError, retry: &str) {
    message(term, ConsoleTag::Error, &err.to_string());
    enter_prompt(term, retry);
}

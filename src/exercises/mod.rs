//! The exercise catalog
//!
//! Every exercise is a small, self-contained program. Each module exposes the
//! computation as plain functions or types (so it can be tested directly) and
//! a unit struct implementing [`Exercise`] that prints the results into a
//! [`Transcript`].
//!
//! # Exercises
//!
//! - [`pointer_walk`]: sum, reverse and zero the middle of an 8-element array
//! - [`string_edit`]: character substitution on a fixed string
//! - [`inheritance`]: inherited and derived-only behavior
//! - [`line_analyzer`]: classify and clean one input line
//! - [`polymorphism`]: shape areas through base-typed handles
//! - [`protected`]: a base capability hidden behind a derived type
//! - [`scores`]: compare two students' averages
//! - [`matrix`]: matrix addition and multiplication
//! - [`student`]: student value type and report
//! - [`row_stats`]: row sums of a 2-D array
//! - [`long_words`]: take-while filter over input tokens
//! - [`vehicle`]: a vehicle started through a trait object
//! - [`coffee_machine`]: a machine with mutating start
//!
//! [`catalog::Catalog`] registers them by name.

use crate::output::Transcript;
use std::io::BufRead;

pub mod catalog;
pub mod coffee_machine;
pub mod constants;
pub mod errors;
pub mod inheritance;
pub mod line_analyzer;
pub mod long_words;
pub mod matrix;
pub mod pointer_walk;
pub mod polymorphism;
pub mod protected;
pub mod row_stats;
pub mod scores;
pub mod string_edit;
pub mod student;
pub mod vehicle;

pub use catalog::Catalog;
pub use errors::ExerciseError;

/// A runnable exercise
pub trait Exercise {
    /// Catalog name, used on the command line
    fn name(&self) -> &'static str;

    /// One-line description
    fn summary(&self) -> &'static str;

    /// How much input the exercise consumes
    fn input_mode(&self) -> InputMode {
        InputMode::None
    }

    fn reads_input(&self) -> bool {
        self.input_mode() != InputMode::None
    }

    /// Input offered by the browser before the user edits it
    fn sample_input(&self) -> &'static str {
        ""
    }

    /// Run the exercise against `input`, printing into `out`
    fn run(&self, input: &str, out: &mut Transcript) -> Result<(), ExerciseError>;
}

/// How an exercise consumes its input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Runs on fixed data only
    None,
    /// A single line
    Line,
    /// Whitespace-separated tokens, read until one is shorter than `min_len`
    Tokens { min_len: usize },
}

/// Read exactly as much of `reader` as `mode` needs, so an interactive
/// session ends as soon as the exercise has what it wants.
///
/// Input is read as raw bytes. Invalid UTF-8 is replaced with U+FFFD rather
/// than rejected; only I/O failures are errors.
pub fn read_input<R: BufRead>(mode: InputMode, reader: &mut R) -> Result<String, ExerciseError> {
    let mut input = String::new();
    match mode {
        InputMode::None => {}
        InputMode::Line => {
            if let Some(line) = read_raw_line(reader)? {
                input.push_str(&line);
            }
        }
        InputMode::Tokens { min_len } => {
            while let Some(line) = read_raw_line(reader)? {
                // Lengths are byte lengths
                let done = line.split_whitespace().any(|word| word.len() < min_len);
                input.push_str(&line);
                if done {
                    break;
                }
            }
        }
    }
    Ok(input)
}

/// One line including its terminator, or `None` at end of input
fn read_raw_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, ExerciseError> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

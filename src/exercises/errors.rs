//! Error types for exercise runs
//!
//! This module defines [`ExerciseError`]. Most exercises work on fixed
//! literals and cannot fail; the variants here cover the general-purpose
//! helpers (matrix shapes and overflow), catalog lookup and reading stdin.

use std::fmt;

/// Errors that can occur while running an exercise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseError {
    /// Operand shapes are incompatible for a matrix operation
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Rows of a matrix literal have different lengths
    RaggedMatrix {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A matrix result does not fit in `i64`
    Overflow { operation: &'static str },

    /// No exercise is registered under this name
    UnknownExercise { name: String },

    /// Reading the exercise input failed
    Input { message: String },
}

impl fmt::Display for ExerciseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseError::DimensionMismatch {
                operation,
                left,
                right,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {}: {}x{} and {}x{}",
                    operation, left.0, left.1, right.0, right.1
                )
            }
            ExerciseError::RaggedMatrix { row, expected, got } => {
                write!(
                    f,
                    "Ragged matrix: row {} has {} column{}, expected {}",
                    row,
                    got,
                    if *got == 1 { "" } else { "s" },
                    expected
                )
            }
            ExerciseError::Overflow { operation } => {
                write!(f, "Integer overflow in {}", operation)
            }
            ExerciseError::UnknownExercise { name } => {
                write!(f, "Unknown exercise '{}'", name)
            }
            ExerciseError::Input { message } => {
                write!(f, "Failed to read input: {}", message)
            }
        }
    }
}

impl std::error::Error for ExerciseError {}

impl From<std::io::Error> for ExerciseError {
    fn from(err: std::io::Error) -> Self {
        ExerciseError::Input {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = ExerciseError::DimensionMismatch {
            operation: "multiplication",
            left: (2, 3),
            right: (2, 3),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch in multiplication: 2x3 and 2x3"
        );
    }

    #[test]
    fn test_ragged_message_pluralizes() {
        let err = ExerciseError::RaggedMatrix {
            row: 1,
            expected: 3,
            got: 1,
        };
        assert_eq!(err.to_string(), "Ragged matrix: row 1 has 1 column, expected 3");
    }

    #[test]
    fn test_io_error_displays_as_message() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = ExerciseError::from(io);
        assert_eq!(format!("Error: {}", err), "Error: Failed to read input: pipe closed");
    }
}

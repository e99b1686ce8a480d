//! Take-while filter over input tokens
//!
//! Tokens are read in order and kept while they are at least
//! [`LONG_WORD_MIN_LEN`] bytes long. The first shorter token ends the
//! scan; nothing after it is looked at, even if it would qualify.

use super::constants::LONG_WORD_MIN_LEN;
use super::errors::ExerciseError;
use super::{Exercise, InputMode};
use crate::output::Transcript;

pub fn take_long_words(input: &str, min_len: usize) -> Vec<&str> {
    input
        .split_whitespace()
        .take_while(|word| word.len() >= min_len)
        .collect()
}

pub struct LongWords;

impl Exercise for LongWords {
    fn name(&self) -> &'static str {
        "long-words"
    }

    fn summary(&self) -> &'static str {
        "Keep input words of 8+ characters until the first short one"
    }

    fn input_mode(&self) -> InputMode {
        InputMode::Tokens {
            min_len: LONG_WORD_MIN_LEN,
        }
    }

    fn sample_input(&self) -> &'static str {
        "elephant dinosaurs cat giraffe"
    }

    fn run(&self, input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        let valid_words = take_long_words(input, LONG_WORD_MIN_LEN);

        out.println("Valid words:");
        for word in valid_words {
            out.println(word);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_at_first_short_word() {
        assert_eq!(
            take_long_words("elephant cat giraffe", LONG_WORD_MIN_LEN),
            vec!["elephant"]
        );
        assert!(take_long_words("cat elephant", LONG_WORD_MIN_LEN).is_empty());
    }

    #[test]
    fn test_reads_across_lines() {
        assert_eq!(
            take_long_words("elephant\n\tdinosaurs\n", LONG_WORD_MIN_LEN),
            vec!["elephant", "dinosaurs"]
        );
        assert!(take_long_words("", LONG_WORD_MIN_LEN).is_empty());
    }

    #[test]
    fn test_length_is_in_bytes() {
        // "naïveté" has 7 chars in 9 bytes
        assert_eq!(
            take_long_words("naïveté longword", LONG_WORD_MIN_LEN),
            vec!["naïveté", "longword"]
        );
    }
}

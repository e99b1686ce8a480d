//! Character classification and whitespace cleanup for one input line
//!
//! Classification runs on the raw bytes of the line: a comma counts as
//! neither letter, digit nor space, and every byte of a multibyte character
//! counts toward the total without landing in any class. Cleanup then turns commas into spaces, collapses
//! whitespace runs and strips one space from each end.

use super::errors::ExerciseError;
use super::{Exercise, InputMode};
use crate::output::Transcript;

/// Per-class character counts of a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharCounts {
    pub total: usize,
    pub letters: usize,
    pub digits: usize,
    pub spaces: usize,
}

/// Whitespace as the C locale defines it (includes vertical tab)
pub fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Count letters, digits and spaces per byte. A byte lands in the first class
/// that matches, checked in that order.
pub fn classify(line: &str) -> CharCounts {
    let mut counts = CharCounts {
        total: line.len(),
        ..CharCounts::default()
    };
    for b in line.bytes() {
        if b.is_ascii_alphabetic() {
            counts.letters += 1;
        } else if b.is_ascii_digit() {
            counts.digits += 1;
        } else if is_c_space(char::from(b)) {
            counts.spaces += 1;
        }
    }
    counts
}

/// Commas become spaces, whitespace runs become one space, and a single
/// leading and trailing space is removed
pub fn clean_line(line: &str) -> String {
    let mut cleaned = String::with_capacity(line.len());
    let mut in_space = false;

    for c in line.chars() {
        let c = if c == ',' { ' ' } else { c };
        if is_c_space(c) {
            if !in_space {
                cleaned.push(' ');
                in_space = true;
            }
        } else {
            cleaned.push(c);
            in_space = false;
        }
    }

    if cleaned.starts_with(' ') {
        cleaned.remove(0);
    }
    if cleaned.ends_with(' ') {
        cleaned.pop();
    }
    cleaned
}

/// First line of `input` without its `\n`. A `\r` before it stays part of
/// the line.
pub fn first_line(input: &str) -> &str {
    input.split('\n').next().unwrap_or("")
}

pub struct LineAnalyzer;

impl Exercise for LineAnalyzer {
    fn name(&self) -> &'static str {
        "line-analyzer"
    }

    fn summary(&self) -> &'static str {
        "Count letters/digits/spaces in a line and normalize its spacing"
    }

    fn input_mode(&self) -> InputMode {
        InputMode::Line
    }

    fn sample_input(&self) -> &'static str {
        "Hello,  world 2024,,  again "
    }

    fn run(&self, input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        let line = first_line(input);
        let counts = classify(line);

        out.println(format!("Total characters: {}", counts.total));
        out.println(format!(
            "Letters: {}, Digits: {}, Spaces: {}",
            counts.letters, counts.digits, counts.spaces
        ));
        out.println(format!("Final line: {}", clean_line(line)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_skips_commas() {
        let counts = classify("ab,  cd 12");
        assert_eq!(
            counts,
            CharCounts {
                total: 10,
                letters: 4,
                digits: 2,
                spaces: 3,
            }
        );
    }

    #[test]
    fn test_clean_line() {
        assert_eq!(clean_line("ab,  cd 12"), "ab cd 12");
        assert_eq!(clean_line("  a,,b\t\tc  "), "a b c");
        assert_eq!(clean_line(","), "");
        assert_eq!(clean_line(""), "");
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(classify(""), CharCounts::default());
    }

    #[test]
    fn test_classify_counts_bytes() {
        // 'é' is two bytes and neither a letter nor a space
        let counts = classify("héllo");
        assert_eq!(counts.total, 6);
        assert_eq!(counts.letters, 4);
        assert_eq!(counts.spaces, 0);
        assert_eq!(clean_line("héllo"), "héllo");
    }

    #[test]
    fn test_first_line_keeps_carriage_return() {
        assert_eq!(first_line("abc\r\nnext"), "abc\r");
        assert_eq!(first_line("abc\n"), "abc");
        assert_eq!(first_line(""), "");

        let counts = classify(first_line("abc\r\n"));
        assert_eq!(counts.total, 4);
        assert_eq!(counts.letters, 3);
        assert_eq!(counts.spaces, 1);
        assert_eq!(clean_line(first_line("abc\r\n")), "abc");
    }
}

//! Character substitution on a fixed string

use super::errors::ExerciseError;
use super::Exercise;
use crate::output::Transcript;

pub const SOURCE_TEXT: &str = "vector_and_arrays";

/// Characters replaced by [`mark_chars`]
pub const MARKED: [char; 3] = ['r', 'a', 'y'];

/// Replace every occurrence of a character in `targets` with `sentinel`.
/// Matching is case-sensitive.
pub fn mark_chars(text: &str, targets: &[char], sentinel: char) -> String {
    text.chars()
        .map(|c| if targets.contains(&c) { sentinel } else { c })
        .collect()
}

/// Replace every ASCII letter with `sentinel`
pub fn mask_letters(text: &str, sentinel: char) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphabetic() { sentinel } else { c })
        .collect()
}

pub struct StringEdit;

impl Exercise for StringEdit {
    fn name(&self) -> &'static str {
        "string-edit"
    }

    fn summary(&self) -> &'static str {
        "Replace r/a/y with R, then every letter with X"
    }

    fn run(&self, _input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        out.println(format!("Original string: {}", SOURCE_TEXT));

        let marked = mark_chars(SOURCE_TEXT, &MARKED, 'R');
        let masked = mask_letters(SOURCE_TEXT, 'X');
        out.println(format!("Modified string: {}", marked));
        out.println(format!("X version: {}", masked));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_chars() {
        assert_eq!(mark_chars(SOURCE_TEXT, &MARKED, 'R'), "vectoR_Rnd_RRRRRs");
        assert_eq!(mark_chars("RAY ray", &MARKED, 'R'), "RAY RRR");
    }

    #[test]
    fn test_mask_letters_keeps_punctuation() {
        assert_eq!(mask_letters(SOURCE_TEXT, 'X'), "XXXXXX_XXX_XXXXXX");
        assert_eq!(mask_letters("a1 b2!", 'X'), "X1 X2!");
        assert_eq!(mask_letters("", 'X'), "");
    }
}

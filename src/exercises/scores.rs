//! Compare two students by the average of three scores

use super::errors::ExerciseError;
use super::Exercise;
use crate::output::{format_general, Transcript};
use std::cmp::Ordering;

/// A student's name and three integer scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSheet {
    pub name: &'static str,
    pub scores: [i32; 3],
}

impl ScoreSheet {
    /// Integer sum divided as floating point by the score count
    pub fn average(&self) -> f64 {
        let total: i32 = self.scores.iter().sum();
        f64::from(total) / self.scores.len() as f64
    }
}

pub const ALICE: ScoreSheet = ScoreSheet {
    name: "Alice",
    scores: [85, 90, 78],
};

pub const BOB: ScoreSheet = ScoreSheet {
    name: "Bob",
    scores: [92, 88, 95],
};

/// The sheet with the strictly higher average, or `None` on a tie
pub fn higher<'a>(first: &'a ScoreSheet, second: &'a ScoreSheet) -> Option<&'a ScoreSheet> {
    match first.average().partial_cmp(&second.average()) {
        Some(Ordering::Greater) => Some(first),
        Some(Ordering::Less) => Some(second),
        _ => None,
    }
}

pub struct ScoreCompare;

impl Exercise for ScoreCompare {
    fn name(&self) -> &'static str {
        "score-compare"
    }

    fn summary(&self) -> &'static str {
        "Average three scores for Alice and Bob and report the higher"
    }

    fn run(&self, _input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        for sheet in [&ALICE, &BOB] {
            out.println(format!(
                "{} average: {}",
                sheet.name,
                format_general(sheet.average())
            ));
        }

        match higher(&ALICE, &BOB) {
            Some(winner) => out.println(format!("{} has a higher average ", winner.name)),
            None => out.println("Both students have the same average "),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_averages() {
        assert!((ALICE.average() - 84.333_333).abs() < 1e-5);
        assert!((BOB.average() - 91.666_667).abs() < 1e-5);
    }

    #[test]
    fn test_higher() {
        assert_eq!(higher(&ALICE, &BOB).map(|s| s.name), Some("Bob"));
        assert_eq!(higher(&BOB, &ALICE).map(|s| s.name), Some("Bob"));

        let twin = ScoreSheet {
            name: "Carol",
            scores: [90, 78, 85],
        };
        assert!(higher(&ALICE, &twin).is_none());
    }
}

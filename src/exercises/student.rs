//! Student value type and report

use super::errors::ExerciseError;
use super::Exercise;
use crate::output::{format_general, Transcript};

/// A student with an append-only list of scores
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    id: i32,
    scores: Vec<f64>,
}

impl Student {
    pub fn new(name: impl Into<String>, id: i32) -> Self {
        Student {
            name: name.into(),
            id,
            scores: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn add_score(&mut self, score: f64) {
        self.scores.push(score);
    }

    /// Arithmetic mean of the scores, 0.0 when there are none
    pub fn average(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().sum::<f64>() / self.scores.len() as f64
    }
}

pub fn print_report(student: &Student, out: &mut Transcript) {
    out.println(format!("Student Name: {}", student.name()));
    out.println(format!("ID          : {}", student.id()));
    out.println(format!("Average     : {}", format_general(student.average())));
}

pub struct StudentReport;

impl Exercise for StudentReport {
    fn name(&self) -> &'static str {
        "student-report"
    }

    fn summary(&self) -> &'static str {
        "Collect scores for a student and print a labeled report"
    }

    fn run(&self, _input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        let mut stu = Student::new("Alice", 12345);
        for score in [85.5, 92.0, 78.5] {
            stu.add_score(score);
        }

        print_report(&stu, out);
        Ok(())
    }
}

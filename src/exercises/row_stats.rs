//! Row sums and grand total of a fixed 2-D array

use super::errors::ExerciseError;
use super::Exercise;
use crate::output::format::format_spaced;
use crate::output::{format_general, Transcript};

pub const VALUES: [[f64; 4]; 2] = [[3.5, -1.0, 0.0, 2.25], [10.5, 7.0, -8.0, -4.5]];

pub fn row_sums<const C: usize>(rows: &[[f64; C]]) -> Vec<f64> {
    rows.iter().map(|row| row.iter().sum()).collect()
}

pub fn grand_total(sums: &[f64]) -> f64 {
    sums.iter().sum()
}

pub struct RowStats;

impl Exercise for RowStats {
    fn name(&self) -> &'static str {
        "row-stats"
    }

    fn summary(&self) -> &'static str {
        "Sum each row of a 2x4 array and the grand total"
    }

    fn run(&self, _input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        out.println("Array elements:");
        for row in &VALUES {
            out.println(format_spaced(row, |v| format_general(*v)));
        }

        let sums = row_sums(&VALUES);
        out.newline();
        out.println("Row sums:");
        for (i, sum) in sums.iter().enumerate() {
            out.println(format!("Row {}: {}", i + 1, format_general(*sum)));
        }

        out.newline();
        out.println(format!("Grand total: {}", format_general(grand_total(&sums))));
        Ok(())
    }
}

//! Array traversal with pointer-style walks
//!
//! Sums a fixed 8-element array, reverses it with two cursors converging from
//! both ends, then zeroes the four interior elements of the reversed array.

use super::errors::ExerciseError;
use super::Exercise;
use crate::output::format::format_spaced;
use crate::output::Transcript;
use std::ops::Range;

/// The array every run starts from
pub const INITIAL: [i32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Indices cleared after reversal
pub const INTERIOR: Range<usize> = 2..6;

pub fn sum(values: &[i32]) -> i32 {
    values.iter().sum()
}

/// Reverse in place by swapping the outermost pair and stepping both cursors
/// inward until they meet
pub fn reverse_in_place(values: &mut [i32]) {
    let half = values.len() / 2;
    let (front, back) = values.split_at_mut(values.len() - half);
    for (left, right) in front.iter_mut().zip(back.iter_mut().rev()) {
        std::mem::swap(left, right);
    }
}

/// Zero every element in `range`; the range is clamped to the slice
pub fn zero_range(values: &mut [i32], range: Range<usize>) {
    let end = range.end.min(values.len());
    let start = range.start.min(end);
    for v in &mut values[start..end] {
        *v = 0;
    }
}

pub struct PointerWalk;

impl Exercise for PointerWalk {
    fn name(&self) -> &'static str {
        "pointer-walk"
    }

    fn summary(&self) -> &'static str {
        "Sum, reverse and zero the middle of an 8-element array"
    }

    fn run(&self, _input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        let mut values = INITIAL;

        let total = sum(&values);
        out.println(format!("Sum = {}", total));

        reverse_in_place(&mut values);
        zero_range(&mut values, INTERIOR);

        out.println(format!(
            "Array = {}",
            format_spaced(&values, |v| v.to_string())
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&INITIAL), 36);
        assert_eq!(sum(&[]), 0);
    }

    #[test]
    fn test_reverse_even_and_odd() {
        let mut even = INITIAL;
        reverse_in_place(&mut even);
        assert_eq!(even, [8, 7, 6, 5, 4, 3, 2, 1]);

        let mut odd = [1, 2, 3];
        reverse_in_place(&mut odd);
        assert_eq!(odd, [3, 2, 1]);

        let mut empty: [i32; 0] = [];
        reverse_in_place(&mut empty);
    }

    #[test]
    fn test_zero_interior_after_reverse() {
        let mut values = INITIAL;
        reverse_in_place(&mut values);
        zero_range(&mut values, INTERIOR);
        assert_eq!(values, [8, 7, 0, 0, 0, 0, 2, 1]);
    }

    #[test]
    fn test_zero_range_clamps() {
        let mut values = [1, 2, 3];
        zero_range(&mut values, 1..10);
        assert_eq!(values, [1, 0, 0]);
    }
}

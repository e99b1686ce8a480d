//! Matrix addition and multiplication
//!
//! [`Matrix`] is a row-major integer matrix whose shape is checked when it is
//! built. `add` and `multiply` validate operand shapes and report a
//! [`ExerciseError::DimensionMismatch`] instead of reading out of bounds.
//! Arithmetic is checked; a result outside `i64` is an
//! [`ExerciseError::Overflow`].

use super::errors::ExerciseError;
use super::Exercise;
use crate::output::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Build from row literals. Every row must have the length of the first.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, ExerciseError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(ExerciseError::RaggedMatrix {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Matrix {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterate over rows as slices
    pub fn row_iter(&self) -> impl Iterator<Item = &[i64]> {
        // chunks(0) panics; an empty matrix has no rows to yield
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Element-wise sum; both operands must have the same shape
    pub fn add(&self, other: &Matrix) -> Result<Matrix, ExerciseError> {
        if self.shape() != other.shape() {
            return Err(ExerciseError::DimensionMismatch {
                operation: "addition",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| {
                a.checked_add(*b).ok_or(ExerciseError::Overflow {
                    operation: "addition",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Standard product: `result[i][j] = sum_k self[i][k] * other[k][j]`
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, ExerciseError> {
        if self.cols != other.rows {
            return Err(ExerciseError::DimensionMismatch {
                operation: "multiplication",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut result = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc: i64 = 0;
                for k in 0..self.cols {
                    acc = self.data[i * self.cols + k]
                        .checked_mul(other.data[k * other.cols + j])
                        .and_then(|term| acc.checked_add(term))
                        .ok_or(ExerciseError::Overflow {
                            operation: "multiplication",
                        })?;
                }
                result.data[i * other.cols + j] = acc;
            }
        }
        Ok(result)
    }

    /// Each row on its own line, values followed by a space
    pub fn render(&self, out: &mut Transcript) {
        for row in self.row_iter() {
            for v in row {
                out.print(format!("{} ", v));
            }
            out.newline();
        }
    }
}

pub struct MatrixOps;

impl Exercise for MatrixOps {
    fn name(&self) -> &'static str {
        "matrix"
    }

    fn summary(&self) -> &'static str {
        "Add two 2x3 matrices, then multiply a 2x3 by a 3x2"
    }

    fn run(&self, _input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        let a = Matrix::from_rows(&[[1_i64, 2, 3], [4, 5, 6]])?;
        let b = Matrix::from_rows(&[[7_i64, 8, 9], [10, 11, 12]])?;

        let c = a.add(&b)?;
        out.println("Resultant Matrix C:");
        c.render(out);

        let mut d = Matrix::from_rows(&[[1_i64, 2], [3, 4], [5, 6]])?;
        d = a.multiply(&d)?;

        out.newline();
        out.println("Matrix D = A x D:");
        d.render(out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows: Vec<Vec<i64>> = vec![vec![1, 2, 3], vec![4, 5]];
        assert_eq!(
            Matrix::from_rows(rows.as_slice()),
            Err(ExerciseError::RaggedMatrix {
                row: 1,
                expected: 3,
                got: 2,
            })
        );
    }

    #[test]
    fn test_get_bounds() {
        let m = Matrix::from_rows(&[[1_i64, 2], [3, 4]]).unwrap();
        assert_eq!(m.get(1, 0), Some(3));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_empty_matrix_has_no_rows() {
        let rows: [[i64; 0]; 0] = [];
        let m = Matrix::from_rows(&rows).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert_eq!(m.row_iter().count(), 0);
    }

    #[test]
    fn test_render_rows() {
        let m = Matrix::from_rows(&[[8_i64, 10, 12]]).unwrap();
        let mut out = Transcript::new();
        m.render(&mut out);
        assert_eq!(out.get_output(), vec!["8 10 12 "]);
    }

    #[test]
    fn test_multiply_overflow_is_an_error() {
        let a = Matrix::from_rows(&[[i64::MAX, 1]]).unwrap();
        let b = Matrix::from_rows(&[[2_i64], [1]]).unwrap();
        assert_eq!(
            a.multiply(&b),
            Err(ExerciseError::Overflow {
                operation: "multiplication",
            })
        );

        // Each term fits but the running sum does not
        let b = Matrix::from_rows(&[[1_i64], [1]]).unwrap();
        let a = Matrix::from_rows(&[[i64::MAX, 1]]).unwrap();
        assert!(matches!(
            a.multiply(&b),
            Err(ExerciseError::Overflow { .. })
        ));
    }

    #[test]
    fn test_add_overflow_is_an_error() {
        let a = Matrix::from_rows(&[[i64::MAX, 0]]).unwrap();
        let b = Matrix::from_rows(&[[1_i64, 0]]).unwrap();
        assert_eq!(
            a.add(&b).unwrap_err().to_string(),
            "Integer overflow in addition"
        );
    }
}

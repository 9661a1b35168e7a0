//! Dense matrices of [`GaussianRational`] entries, row-major.

use crate::error::{AlgebraError, AlgebraResult};
use crate::gaussian::GaussianRational;
use num_rational::BigRational;
use num_traits::Zero;

/// A dense `rows x cols` matrix over Q(i), stored row-major.
///
/// Invariants: `data.len() == rows * cols`; shape is fixed at construction
/// (see `SPEC_FULL.md` §3/§4.3).
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<GaussianRational>,
}

impl Matrix {
    /// Build a matrix from row-major data. Panics if `data.len() != rows *
    /// cols`; callers within this crate only ever build matrices from
    /// already-validated shapes.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<GaussianRational>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "Matrix::from_row_major: data length {} does not match {rows}x{cols}",
            data.len()
        );
        Self { rows, cols, data }
    }

    /// A `rows x cols` matrix of zeros.
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![GaussianRational::zero(); rows * cols],
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n, n);
        for i in 0..n {
            m.set(i, i, GaussianRational::one());
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> &GaussianRational {
        &self.data[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, v: GaussianRational) {
        self.data[i * self.cols + j] = v;
    }

    /// Row-major entries, in order.
    pub fn entries(&self) -> &[GaussianRational] {
        &self.data
    }

    /// `A * B`. Fails with [`AlgebraError::ShapeMismatch`] unless `A.cols ==
    /// B.rows`.
    pub fn multiply(&self, other: &Matrix) -> AlgebraResult<Matrix> {
        if self.cols != other.rows {
            return Err(AlgebraError::ShapeMismatch {
                context: "multiply",
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        let mut out = Matrix::zero(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = GaussianRational::zero();
                for k in 0..self.cols {
                    acc = acc + self.get(i, k) * other.get(k, j);
                }
                out.set(i, j, acc);
            }
        }
        Ok(out)
    }

    /// `A + B`. Fails with [`AlgebraError::ShapeMismatch`] unless the shapes
    /// are identical.
    pub fn add(&self, other: &Matrix) -> AlgebraResult<Matrix> {
        self.check_same_shape(other, "add")?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Matrix::from_row_major(self.rows, self.cols, data))
    }

    /// `A - B`. Fails with [`AlgebraError::ShapeMismatch`] unless the shapes
    /// are identical.
    pub fn subtract(&self, other: &Matrix) -> AlgebraResult<Matrix> {
        self.check_same_shape(other, "subtract")?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Matrix::from_row_major(self.rows, self.cols, data))
    }

    /// Scale every entry by a rational.
    pub fn scale(&self, r: &BigRational) -> Matrix {
        let data = self.data.iter().map(|a| a.scale(r)).collect();
        Matrix::from_row_major(self.rows, self.cols, data)
    }

    /// Conjugate transpose: shape `(cols, rows)`, `B[j,i] = conj(A[i,j])`.
    pub fn dagger(&self) -> Matrix {
        let mut out = Matrix::zero(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.set(j, i, self.get(i, j).conj());
            }
        }
        out
    }

    /// Kronecker product: shape `(A.rows*B.rows, A.cols*B.cols)`, entry at
    /// `(i*B.rows+k, j*B.cols+l) == A[i,j] * B[k,l]`.
    pub fn kronecker(&self, other: &Matrix) -> Matrix {
        let out_rows = self.rows * other.rows;
        let out_cols = self.cols * other.cols;
        let mut out = Matrix::zero(out_rows, out_cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let a = self.get(i, j);
                if a.is_zero() {
                    continue;
                }
                for k in 0..other.rows {
                    for l in 0..other.cols {
                        let v = a * other.get(k, l);
                        out.set(i * other.rows + k, j * other.cols + l, v);
                    }
                }
            }
        }
        out
    }

    /// Outer product `u * v†` of two column vectors (represented as `n x 1`
    /// matrices), yielding an `n x n` matrix.
    pub fn outer(u: &Matrix, v: &Matrix) -> AlgebraResult<Matrix> {
        if u.cols != 1 || v.cols != 1 {
            return Err(AlgebraError::ShapeMismatch {
                context: "outer (expects column vectors)",
                lhs_rows: u.rows,
                lhs_cols: u.cols,
                rhs_rows: v.rows,
                rhs_cols: v.cols,
            });
        }
        u.multiply(&v.dagger())
    }

    /// Full trace. Fails with [`AlgebraError::NotSquare`] unless the matrix
    /// is square.
    pub fn trace(&self) -> AlgebraResult<GaussianRational> {
        if self.rows != self.cols {
            return Err(AlgebraError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut acc = GaussianRational::zero();
        for i in 0..self.rows {
            acc = acc + self.get(i, i).clone();
        }
        Ok(acc)
    }

    fn check_same_shape(&self, other: &Matrix, context: &'static str) -> AlgebraResult<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(AlgebraError::ShapeMismatch {
                context,
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        Ok(())
    }
}

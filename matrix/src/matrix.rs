use crate::{ops::Transpose, MatrixError};
use ark_std::{
    fmt,
    ops::{Add, Index, Mul, MulAssign, Sub},
    rand::Rng,
    string::*,
    vec::*,
    UniformRand,
};
use matmath_scalar::Scalar;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Dense row-major matrix.
///
/// Every transformation returns a fresh value; the only in-place operation
/// on the public surface is the `*=` scaling operator. Two matrices compare
/// equal iff they have the same order and the same elements; an order
/// mismatch is simply inequality, never an error.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Matrix<R> {
    pub nrows: usize,
    pub ncols: usize,
    pub vals: Vec<Vec<R>>,
}

impl<R> Matrix<R> {
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// The `(rows, columns)` pair.
    pub fn order(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
}

impl<R: Scalar> Matrix<R> {
    /// Validates and wraps a rectangular row-major buffer.
    ///
    /// Fails with [`MatrixError::Empty`] when given no rows or no columns,
    /// and with [`MatrixError::RaggedRows`] when row lengths differ. This is
    /// the only validation point; every operation below may assume a
    /// well-formed receiver.
    pub fn new(vals: Vec<Vec<R>>) -> Result<Self, MatrixError> {
        let nrows = vals.len();
        let ncols = vals.first().map_or(0, |row| row.len());
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::Empty);
        }
        for (i, row) in vals.iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::RaggedRows(i, row.len(), ncols));
            }
        }
        Ok(Self { nrows, ncols, vals })
    }

    pub fn zero(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            vals: vec![vec![R::zero(); ncols]; nrows],
        }
    }

    /// Identity matrix of order `n`.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n, n);
        for i in 0..n {
            m.vals[i][i] = R::one();
        }
        m
    }

    /// Matrix with every element equal to `value`.
    pub fn fill(value: R, nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            vals: vec![vec![value; ncols]; nrows],
        }
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// `true` iff the matrix is square and every off-diagonal element is
    /// zero.
    ///
    /// Like all the shape predicates except [`is_square`](Self::is_square),
    /// a non-square matrix is simply not diagonal; no error is raised.
    pub fn is_diagonal(&self) -> bool {
        self.is_square()
            && self.vals.iter().enumerate().all(|(i, row)| {
                row.iter()
                    .enumerate()
                    .all(|(j, v)| i == j || v.is_zero())
            })
    }

    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.nrows).all(|i| (i..self.ncols).all(|j| self.vals[i][j] == self.vals[j][i]))
    }

    pub fn is_skew_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.nrows).all(|i| (i..self.ncols).all(|j| self.vals[i][j] == -self.vals[j][i]))
    }

    pub fn is_upper_triangular(&self) -> bool {
        self.is_square() && (0..self.nrows).all(|i| (0..i).all(|j| self.vals[i][j].is_zero()))
    }

    pub fn is_lower_triangular(&self) -> bool {
        self.is_square()
            && (0..self.nrows).all(|i| (i + 1..self.ncols).all(|j| self.vals[i][j].is_zero()))
    }

    pub fn is_identity(&self) -> bool {
        self.is_square() && *self == Self::identity(self.nrows)
    }

    pub fn is_null(&self) -> bool {
        self.is_square() && self.vals.iter().all(|row| row.iter().all(|v| v.is_zero()))
    }

    /// Element-wise sum, or `None` on an order mismatch.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        if self.order() != other.order() {
            return None;
        }
        let vals = cfg_iter!(self.vals)
            .zip(cfg_iter!(other.vals))
            .map(|(ra, rb)| ra.iter().zip(rb.iter()).map(|(a, b)| *a + *b).collect())
            .collect();
        Some(Self {
            nrows: self.nrows,
            ncols: self.ncols,
            vals,
        })
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.checked_add(other).ok_or(MatrixError::IncompatibleOrders(
            self.nrows,
            self.ncols,
            other.nrows,
            other.ncols,
        ))
    }

    /// Element-wise difference, or `None` on an order mismatch.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self.order() != other.order() {
            return None;
        }
        let vals = cfg_iter!(self.vals)
            .zip(cfg_iter!(other.vals))
            .map(|(ra, rb)| ra.iter().zip(rb.iter()).map(|(a, b)| *a - *b).collect())
            .collect();
        Some(Self {
            nrows: self.nrows,
            ncols: self.ncols,
            vals,
        })
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.checked_sub(other).ok_or(MatrixError::IncompatibleOrders(
            self.nrows,
            self.ncols,
            other.nrows,
            other.ncols,
        ))
    }

    /// Element-wise multiple of the matrix.
    pub fn scalar_mul(&self, r: &R) -> Self {
        let vals = cfg_iter!(self.vals)
            .map(|row| row.iter().map(|v| *v * *r).collect())
            .collect();
        Self {
            nrows: self.nrows,
            ncols: self.ncols,
            vals,
        }
    }

    /// Matrix product, or `None` unless `self.ncols == other.nrows`.
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        if self.ncols != other.nrows {
            return None;
        }
        let vals = cfg_iter!(self.vals)
            .map(|row| {
                (0..other.ncols)
                    .map(|j| (0..self.ncols).map(|k| row[k] * other.vals[k][j]).sum())
                    .collect()
            })
            .collect();
        Some(Self {
            nrows: self.nrows,
            ncols: other.ncols,
            vals,
        })
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self, MatrixError> {
        self.checked_mul(other).ok_or(MatrixError::IncompatibleOrders(
            self.nrows,
            self.ncols,
            other.nrows,
            other.ncols,
        ))
    }

    /// Matrix product with a column given as a slice, or `None` on a length
    /// mismatch.
    pub fn checked_mul_vec(&self, v: &[R]) -> Option<Vec<R>> {
        if self.ncols != v.len() {
            return None;
        }

        Some(
            cfg_iter!(self.vals)
                .map(|row| row.iter().zip(v).map(|(m, x)| *m * *x).sum())
                .collect(),
        )
    }

    pub fn try_mul_vec(&self, v: &[R]) -> Result<Vec<R>, MatrixError> {
        self.checked_mul_vec(v).ok_or(MatrixError::IncompatibleOrders(
            self.nrows,
            self.ncols,
            v.len(),
            1,
        ))
    }

    /// `self` multiplied by itself `exp - 1` times.
    ///
    /// `exp == 0` yields the identity of the same order. Only defined for
    /// square matrices.
    pub fn try_pow(&self, exp: u32) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(self.nrows, self.ncols));
        }
        if exp == 0 {
            return Ok(Self::identity(self.nrows));
        }
        let mut acc = self.clone();
        for _ in 1..exp {
            acc = acc.try_mul(self)?;
        }
        Ok(acc)
    }

    /// Transpose with every element pre-multiplied by `factor`.
    pub fn scaled_transpose(&self, factor: &R) -> Self {
        let vals = (0..self.ncols)
            .map(|i| (0..self.nrows).map(|j| self.vals[j][i] * *factor).collect())
            .collect();
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
            vals,
        }
    }

    /// Copy of the matrix with the given row and/or column removed.
    ///
    /// Passing `None` for both returns a plain copy. An out-of-range index
    /// fails with [`MatrixError::IndexOutOfRange`]; removing the last
    /// remaining row or column fails with [`MatrixError::Empty`].
    pub fn cut(&self, row: Option<usize>, col: Option<usize>) -> Result<Self, MatrixError> {
        if let Some(i) = row {
            if i >= self.nrows {
                return Err(MatrixError::IndexOutOfRange(i, self.nrows));
            }
            if self.nrows == 1 {
                return Err(MatrixError::Empty);
            }
        }
        if let Some(j) = col {
            if j >= self.ncols {
                return Err(MatrixError::IndexOutOfRange(j, self.ncols));
            }
            if self.ncols == 1 {
                return Err(MatrixError::Empty);
            }
        }
        let vals = self
            .vals
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != row)
            .map(|(_, r)| {
                r.iter()
                    .enumerate()
                    .filter(|(j, _)| Some(*j) != col)
                    .map(|(_, v)| *v)
                    .collect()
            })
            .collect();
        Ok(Self {
            nrows: self.nrows - usize::from(row.is_some()),
            ncols: self.ncols - usize::from(col.is_some()),
            vals,
        })
    }

    /// The matrix rotated clockwise by `turns` quarter-turns.
    ///
    /// A half-turn is a straight double reversal; odd turn counts apply the
    /// quarter-turn primitive iteratively.
    pub fn rotate(&self, turns: usize) -> Self {
        match turns % 4 {
            0 => self.clone(),
            2 => {
                let vals = self
                    .vals
                    .iter()
                    .rev()
                    .map(|row| row.iter().rev().copied().collect())
                    .collect();
                Self {
                    nrows: self.nrows,
                    ncols: self.ncols,
                    vals,
                }
            }
            turns => {
                let mut rotated = self.clone();
                for _ in 0..turns {
                    rotated = rotated.rotate_quarter();
                }
                rotated
            }
        }
    }

    // One clockwise quarter-turn: transpose, then reverse each row.
    fn rotate_quarter(&self) -> Self {
        let mut rotated = self.transpose();
        for row in rotated.vals.iter_mut() {
            row.reverse();
        }
        rotated
    }

    /// Determinant by forward Gaussian elimination on a working copy.
    ///
    /// No pivot search is performed: a pivot that is exactly zero is
    /// replaced by one before the rows below it are reduced. The elimination
    /// therefore never divides by zero, at the price of misreporting some
    /// singular matrices whose leading rows are zero; that trade-off is part
    /// of the contract and pinned by tests. A zero pivot with no rows left
    /// below it is kept, so a trailing zero on the diagonal still nulls the
    /// product.
    pub fn determinant(&self) -> Result<R, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(self.nrows, self.ncols));
        }
        let n = self.nrows;
        let mut m = self.vals.clone();
        for i in 0..n {
            for j in i + 1..n {
                if m[i][i].is_zero() {
                    m[i][i] = R::one();
                }
                let x = m[j][i] / m[i][i];
                for k in 0..n {
                    let s = x * m[i][k];
                    m[j][k] -= s;
                }
            }
        }
        Ok((0..n).map(|i| m[i][i]).product())
    }

    /// Determinant of the matrix with row `i` and column `j` removed.
    pub fn minor(&self, i: usize, j: usize) -> Result<R, MatrixError> {
        self.cut(Some(i), Some(j))?.determinant()
    }

    /// Signed minor at `(i, j)`.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<R, MatrixError> {
        let minor = self.minor(i, j)?;
        Ok(if (i + j) % 2 == 0 { minor } else { -minor })
    }

    /// Adjugate: the transposed cofactor matrix.
    pub fn adjoint(&self) -> Result<Self, MatrixError> {
        self.scaled_adjoint(&R::one())
    }

    /// Adjugate with every element pre-multiplied by `factor`.
    pub fn scaled_adjoint(&self, factor: &R) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(self.nrows, self.ncols));
        }
        let mut cofactors = Vec::with_capacity(self.nrows);
        for i in 0..self.nrows {
            let mut row = Vec::with_capacity(self.ncols);
            for j in 0..self.ncols {
                row.push(self.cofactor(i, j)?);
            }
            cofactors.push(row);
        }
        let cofactor_matrix = Self {
            nrows: self.nrows,
            ncols: self.ncols,
            vals: cofactors,
        };
        Ok(cofactor_matrix.scaled_transpose(factor))
    }

    /// Inverse via the adjugate, `adj(A) / det(A)`.
    ///
    /// Fails with [`MatrixError::Singular`] when the determinant is zero.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant()?;
        if det.is_zero() {
            return Err(MatrixError::Singular);
        }
        self.scaled_adjoint(&(R::one() / det))
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> Result<R, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(self.nrows, self.ncols));
        }
        Ok((0..self.nrows).map(|i| self.vals[i][i]).sum())
    }
}

impl<R: Scalar + UniformRand> Matrix<R> {
    pub fn rand<RND: Rng>(rng: &mut RND, nrows: usize, ncols: usize) -> Self {
        let vals = (0..nrows)
            .map(|_| (0..ncols).map(|_| R::rand(rng)).collect::<Vec<R>>())
            .collect::<Vec<Vec<R>>>();
        Self { nrows, ncols, vals }
    }
}

impl<R: Scalar> TryFrom<Vec<Vec<R>>> for Matrix<R> {
    type Error = MatrixError;

    fn try_from(vals: Vec<Vec<R>>) -> Result<Self, MatrixError> {
        Self::new(vals)
    }
}

impl<R: Scalar> Add for &Matrix<R> {
    type Output = Matrix<R>;

    fn add(self, other: &Matrix<R>) -> Matrix<R> {
        self.try_add(other).unwrap()
    }
}

impl<R: Scalar> Sub for &Matrix<R> {
    type Output = Matrix<R>;

    fn sub(self, other: &Matrix<R>) -> Matrix<R> {
        self.try_sub(other).unwrap()
    }
}

impl<R: Scalar> Mul for &Matrix<R> {
    type Output = Matrix<R>;

    fn mul(self, other: &Matrix<R>) -> Matrix<R> {
        self.try_mul(other).unwrap()
    }
}

impl<R: Scalar> Mul<&[R]> for &Matrix<R> {
    type Output = Vec<R>;

    fn mul(self, v: &[R]) -> Vec<R> {
        self.try_mul_vec(v).unwrap()
    }
}

impl<R: Scalar> MulAssign<&R> for Matrix<R> {
    fn mul_assign(&mut self, r: &R) {
        cfg_iter_mut!(self.vals).for_each(|row| row.iter_mut().for_each(|v| *v *= *r))
    }
}

impl<R> Index<(usize, usize)> for Matrix<R> {
    type Output = R;

    fn index(&self, (i, j): (usize, usize)) -> &R {
        &self.vals[i][j]
    }
}

/// Boxed rendering, columns padded to their widest element.
impl<R: Scalar> fmt::Display for Matrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = (0..self.ncols)
            .map(|j| {
                (0..self.nrows)
                    .map(|i| self.vals[i][j].to_string().len())
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        for (i, row) in self.vals.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for (j, v) in row.iter().enumerate() {
                write!(f, " {:>width$}", v, width = widths[j])?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}

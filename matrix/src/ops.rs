use crate::Matrix;
use ark_std::vec::*;
use matmath_scalar::Scalar;

pub trait Transpose {
    fn transpose(&self) -> Self;
}

impl<R: Scalar> Transpose for Vec<Vec<R>> {
    fn transpose(&self) -> Self {
        let nrows = self.len();
        let ncols = self.first().map_or(0, |row| row.len());

        let mut res: Vec<Vec<R>> = (0..ncols).map(|_| Vec::with_capacity(nrows)).collect();

        for row in self {
            for (c, value) in row.iter().enumerate() {
                res[c].push(*value);
            }
        }

        res
    }
}

impl<R: Scalar> Transpose for Matrix<R> {
    fn transpose(&self) -> Self {
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
            vals: self.vals.transpose(),
        }
    }
}

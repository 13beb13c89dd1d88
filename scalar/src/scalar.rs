use ark_std::{
    fmt::{Debug, Display},
    iter::{Product, Sum},
    ops::Neg,
};
use num_traits::{Float, NumAssign, One, Zero};

/// Element type of matrices and vectors.
///
/// Bundles the closed arithmetic a dense value type needs: the four
/// operations with their assigning forms, additive and multiplicative
/// identities, negation, and iterator sums/products. Conformance is checked
/// once, at the type level; element values are never inspected for
/// "numericness" at runtime.
pub trait Scalar:
    'static
    + Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + PartialEq
    + Zero
    + One
    + Neg<Output = Self>
    + NumAssign
    + Sum<Self>
    + Product<Self>
{
}

/// Every conforming numeric type is a scalar.
impl<T> Scalar for T where
    T: 'static
        + Copy
        + Clone
        + Debug
        + Display
        + Default
        + Send
        + Sync
        + PartialEq
        + Zero
        + One
        + Neg<Output = Self>
        + NumAssign
        + Sum<Self>
        + Product<Self>
{
}

/// Scalars with square roots and trigonometry.
///
/// Norms, direction angles and rotations only make sense over these.
pub trait Real: Scalar + Float {}

impl<T: Scalar + Float> Real for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of_squares<S: Scalar>(xs: &[S]) -> S {
        xs.iter().map(|x| *x * *x).sum()
    }

    fn norm<S: Real>(xs: &[S]) -> S {
        sum_of_squares(xs).sqrt()
    }

    #[test]
    fn scalar_over_integers() {
        assert_eq!(sum_of_squares(&[1i64, 2, 3]), 14);
    }

    #[test]
    fn scalar_over_floats() {
        assert_eq!(sum_of_squares(&[1.5f64, 2.0]), 6.25);
    }

    #[test]
    fn real_norm() {
        assert_eq!(norm(&[3.0f64, 4.0]), 5.0);
    }
}

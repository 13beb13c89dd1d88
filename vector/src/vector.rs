use crate::VectorError;
use ark_std::{
    fmt,
    ops::{Add, Index, MulAssign, Sub},
    rand::Rng,
    vec::*,
    UniformRand,
};
use matmath_scalar::{Real, Scalar};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Vector in n-dimensional space.
///
/// Every operation returns a fresh value; the only in-place operation on
/// the public surface is the `*=` scaling operator. Vectors of differing
/// dimensions compare unequal, never erroneously.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Vector<R> {
    pub coords: Vec<R>,
}

impl<R> Vector<R> {
    /// Number of components.
    pub fn dim(&self) -> usize {
        self.coords.len()
    }
}

impl<R: Scalar> Vector<R> {
    /// Validates and wraps a component buffer.
    ///
    /// Fails with [`VectorError::Empty`] when given no components.
    pub fn new(coords: Vec<R>) -> Result<Self, VectorError> {
        if coords.is_empty() {
            return Err(VectorError::Empty);
        }
        Ok(Self { coords })
    }

    /// Zero vector of the given dimension.
    pub fn zero(dim: usize) -> Self {
        Self {
            coords: vec![R::zero(); dim],
        }
    }

    pub fn x(&self) -> Option<R> {
        self.coords.first().copied()
    }

    pub fn y(&self) -> Option<R> {
        self.coords.get(1).copied()
    }

    pub fn z(&self) -> Option<R> {
        self.coords.get(2).copied()
    }

    /// Component-wise sum, or `None` on a dimension mismatch.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        if self.dim() != other.dim() {
            return None;
        }
        let coords = cfg_iter!(self.coords)
            .zip(cfg_iter!(other.coords))
            .map(|(a, b)| *a + *b)
            .collect();
        Some(Self { coords })
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, VectorError> {
        self.checked_add(other)
            .ok_or(VectorError::DimensionMismatch(self.dim(), other.dim()))
    }

    /// Component-wise difference, or `None` on a dimension mismatch.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self.dim() != other.dim() {
            return None;
        }
        let coords = cfg_iter!(self.coords)
            .zip(cfg_iter!(other.coords))
            .map(|(a, b)| *a - *b)
            .collect();
        Some(Self { coords })
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, VectorError> {
        self.checked_sub(other)
            .ok_or(VectorError::DimensionMismatch(self.dim(), other.dim()))
    }

    /// The vector scaled by `factor`.
    pub fn magnify(&self, factor: &R) -> Self {
        Self {
            coords: cfg_iter!(self.coords).map(|a| *a * *factor).collect(),
        }
    }

    /// Hadamard (component-wise) product, or `None` on a dimension
    /// mismatch.
    ///
    /// A convenience scaling of one vector by another, not a vector product
    /// in the mathematical sense; see [`try_dot`](Self::try_dot) and
    /// [`try_cross`](Self::try_cross) for those.
    pub fn checked_hadamard(&self, other: &Self) -> Option<Self> {
        if self.dim() != other.dim() {
            return None;
        }
        let coords = cfg_iter!(self.coords)
            .zip(cfg_iter!(other.coords))
            .map(|(a, b)| *a * *b)
            .collect();
        Some(Self { coords })
    }

    pub fn try_hadamard(&self, other: &Self) -> Result<Self, VectorError> {
        self.checked_hadamard(other)
            .ok_or(VectorError::DimensionMismatch(self.dim(), other.dim()))
    }

    /// Component-wise quotient.
    ///
    /// Any zero component in `other` fails with
    /// [`VectorError::DivisionByZero`].
    pub fn try_div(&self, other: &Self) -> Result<Self, VectorError> {
        if self.dim() != other.dim() {
            return Err(VectorError::DimensionMismatch(self.dim(), other.dim()));
        }
        if other.coords.iter().any(|b| b.is_zero()) {
            return Err(VectorError::DivisionByZero);
        }
        let coords = cfg_iter!(self.coords)
            .zip(cfg_iter!(other.coords))
            .map(|(a, b)| *a / *b)
            .collect();
        Ok(Self { coords })
    }

    /// The vector scaled by `1 / r`; a zero divisor fails.
    pub fn try_div_scalar(&self, r: &R) -> Result<Self, VectorError> {
        if r.is_zero() {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Self {
            coords: cfg_iter!(self.coords).map(|a| *a / *r).collect(),
        })
    }

    /// `Σ xᵢ·yᵢ` over matching components.
    pub fn try_dot(&self, other: &Self) -> Result<R, VectorError> {
        if self.dim() != other.dim() {
            return Err(VectorError::DimensionMismatch(self.dim(), other.dim()));
        }
        Ok(self
            .coords
            .iter()
            .zip(&other.coords)
            .map(|(a, b)| *a * *b)
            .sum())
    }

    /// Cross product in two or three dimensions.
    ///
    /// Two-dimensional inputs are treated as lying in the z = 0 plane, so
    /// the result is always three-dimensional. Mismatched dimensions fail
    /// with [`VectorError::DimensionMismatch`]; any other dimension fails
    /// with [`VectorError::UnsupportedDimension`].
    pub fn try_cross(&self, other: &Self) -> Result<Self, VectorError> {
        if self.dim() != other.dim() {
            return Err(VectorError::DimensionMismatch(self.dim(), other.dim()));
        }
        let (a, b) = (&self.coords, &other.coords);
        match self.dim() {
            3 => Ok(Self {
                coords: vec![
                    a[1] * b[2] - a[2] * b[1],
                    a[2] * b[0] - a[0] * b[2],
                    a[0] * b[1] - a[1] * b[0],
                ],
            }),
            2 => Ok(Self {
                coords: vec![R::zero(), R::zero(), a[0] * b[1] - a[1] * b[0]],
            }),
            dim => Err(VectorError::UnsupportedDimension(dim)),
        }
    }

    /// `true` iff the squared modulus is exactly one.
    pub fn is_unit(&self) -> bool {
        self.coords.iter().map(|x| *x * *x).sum::<R>() == R::one()
    }

    /// Whether the component-wise ratio to `other` is constant.
    ///
    /// Any zero component in `other` fails with
    /// [`VectorError::DivisionByZero`].
    pub fn try_is_parallel(&self, other: &Self) -> Result<bool, VectorError> {
        if self.dim() != other.dim() {
            return Err(VectorError::DimensionMismatch(self.dim(), other.dim()));
        }
        if other.coords.iter().any(|b| b.is_zero()) {
            return Err(VectorError::DivisionByZero);
        }
        let ratio = match self.coords.first() {
            Some(a) => *a / other.coords[0],
            None => return Err(VectorError::Empty),
        };
        Ok(self
            .coords
            .iter()
            .zip(&other.coords)
            .all(|(a, b)| *a / *b == ratio))
    }

    /// Whether the dot product with `other` is exactly zero.
    pub fn try_is_orthogonal(&self, other: &Self) -> Result<bool, VectorError> {
        Ok(self.try_dot(other)?.is_zero())
    }
}

impl<R: Real> Vector<R> {
    /// Euclidean norm.
    pub fn modulus(&self) -> R {
        self.coords.iter().map(|x| *x * *x).sum::<R>().sqrt()
    }

    /// Direction angles: `acos(xᵢ / modulus)` per component.
    ///
    /// The zero vector has no direction, so a zero modulus fails with
    /// [`VectorError::DivisionByZero`].
    pub fn argument(&self) -> Result<Self, VectorError> {
        let modulus = self.modulus();
        if modulus.is_zero() {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Self {
            coords: self.coords.iter().map(|x| (*x / modulus).acos()).collect(),
        })
    }

    /// Direction-preserving vector of modulus one.
    ///
    /// The zero vector is returned unchanged rather than treated as an
    /// error.
    pub fn unit_vector(&self) -> Self {
        let modulus = self.modulus();
        if modulus.is_zero() {
            return self.clone();
        }
        Self {
            coords: self.coords.iter().map(|x| *x / modulus).collect(),
        }
    }

    /// Plane rotation by `theta` radians.
    ///
    /// Only defined on two-dimensional vectors.
    pub fn rotate(&self, theta: R) -> Result<Self, VectorError> {
        if self.dim() != 2 {
            return Err(VectorError::WrongDimension(2, self.dim()));
        }
        let (x, y) = (self.coords[0], self.coords[1]);
        let (sin, cos) = theta.sin_cos();
        Ok(Self {
            coords: vec![x * cos - y * sin, x * sin + y * cos],
        })
    }

    /// Plane rotation by `theta` degrees.
    pub fn rotate_degrees(&self, theta: R) -> Result<Self, VectorError> {
        self.rotate(theta.to_radians())
    }
}

impl<R: Scalar + UniformRand> Vector<R> {
    pub fn rand<RND: Rng>(rng: &mut RND, dim: usize) -> Self {
        Self {
            coords: (0..dim).map(|_| R::rand(rng)).collect(),
        }
    }
}

impl<R: Scalar, const N: usize> From<[R; N]> for Vector<R> {
    /// Literal construction from a fixed arity of components.
    fn from(coords: [R; N]) -> Self {
        Self {
            coords: coords.to_vec(),
        }
    }
}

impl<R: Scalar> Default for Vector<R> {
    /// The two-dimensional zero vector.
    fn default() -> Self {
        Self::zero(2)
    }
}

impl<R: Scalar> Add for &Vector<R> {
    type Output = Vector<R>;

    fn add(self, other: &Vector<R>) -> Vector<R> {
        self.try_add(other).unwrap()
    }
}

impl<R: Scalar> Sub for &Vector<R> {
    type Output = Vector<R>;

    fn sub(self, other: &Vector<R>) -> Vector<R> {
        self.try_sub(other).unwrap()
    }
}

impl<R: Scalar> MulAssign<&R> for Vector<R> {
    fn mul_assign(&mut self, r: &R) {
        cfg_iter_mut!(self.coords).for_each(|v| *v *= *r)
    }
}

impl<R> Index<usize> for Vector<R> {
    type Output = R;

    fn index(&self, i: usize) -> &R {
        &self.coords[i]
    }
}

/// Angle-bracket rendering: `<x, y, z>`.
impl<R: Scalar> fmt::Display for Vector<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn assert_approx_eq(a: &Vector<f64>, b: &Vector<f64>) {
        assert_eq!(a.dim(), b.dim());
        for (x, y) in a.coords.iter().zip(&b.coords) {
            assert!((x - y).abs() < 1e-9, "{x} != {y}");
        }
    }

    #[test]
    fn new_rejects_empty() {
        assert!(Vector::new(vec![1.0, 2.0]).is_ok());
        assert_eq!(Vector::<f64>::new(vec![]), Err(VectorError::Empty));
    }

    #[test]
    fn default_is_planar_zero() {
        assert_eq!(Vector::<i64>::default(), Vector::from([0, 0]));
    }

    #[test]
    fn component_accessors() {
        let v = Vector::from([1, 2]);

        assert_eq!(v.dim(), 2);
        assert_eq!(v.x(), Some(1));
        assert_eq!(v.y(), Some(2));
        assert_eq!(v.z(), None);
        assert_eq!(v[1], 2);
    }

    #[test]
    fn add_sub_round_trip() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([4.0, 5.0, 6.0]);

        assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn add_rejects_dimension_mismatch() {
        let a = Vector::from([1.0, 2.0]);
        let b = Vector::from([1.0, 2.0, 3.0]);

        assert_eq!(a.try_add(&b), Err(VectorError::DimensionMismatch(2, 3)));
        assert!(a.checked_sub(&b).is_none());
    }

    #[test]
    fn scaling() {
        let mut v = Vector::from([1, -2, 3]);

        assert_eq!(v.magnify(&2), Vector::from([2, -4, 6]));

        v *= &-1;
        assert_eq!(v, Vector::from([-1, 2, -3]));
    }

    #[test]
    fn hadamard_product() {
        let a = Vector::from([1, 2, 3]);
        let b = Vector::from([4, 5, 6]);

        assert_eq!(a.try_hadamard(&b).unwrap(), Vector::from([4, 10, 18]));
        assert!(a.checked_hadamard(&Vector::from([1, 2])).is_none());
    }

    #[test]
    fn division() {
        let a = Vector::from([4.0, 9.0]);

        assert_eq!(
            a.try_div(&Vector::from([2.0, 3.0])).unwrap(),
            Vector::from([2.0, 3.0])
        );
        assert_eq!(
            a.try_div(&Vector::from([1.0, 0.0])),
            Err(VectorError::DivisionByZero)
        );
        assert_eq!(
            a.try_div_scalar(&2.0).unwrap(),
            Vector::from([2.0, 4.5])
        );
        assert_eq!(a.try_div_scalar(&0.0), Err(VectorError::DivisionByZero));
    }

    #[test]
    fn modulus_of_3_4_is_5() {
        assert_eq!(Vector::from([3.0, 4.0]).modulus(), 5.0);
    }

    #[test]
    fn argument_gives_direction_angles() {
        let angles = Vector::from([1.0, 0.0]).argument().unwrap();

        assert_approx_eq(&angles, &Vector::from([0.0, core::f64::consts::FRAC_PI_2]));
        assert_eq!(
            Vector::from([0.0, 0.0]).argument(),
            Err(VectorError::DivisionByZero)
        );
    }

    #[test]
    fn unit_vector_normalizes() {
        assert_approx_eq(
            &Vector::from([3.0, 4.0]).unit_vector(),
            &Vector::from([0.6, 0.8]),
        );
    }

    #[test]
    fn unit_vector_of_zero_is_unchanged() {
        let zero = Vector::<f64>::zero(3);

        assert_eq!(zero.unit_vector(), zero);
    }

    #[test]
    fn rotate_quarter_turn() {
        let rotated = Vector::from([1.0, 0.0])
            .rotate(core::f64::consts::FRAC_PI_2)
            .unwrap();

        assert_approx_eq(&rotated, &Vector::from([0.0, 1.0]));
    }

    #[test]
    fn rotate_degrees_matches_radians() {
        let v = Vector::from([1.0, 2.0]);

        assert_eq!(
            v.rotate_degrees(90.0).unwrap(),
            v.rotate(90.0f64.to_radians()).unwrap()
        );
    }

    #[test]
    fn rotate_requires_plane_vector() {
        assert_eq!(
            Vector::from([1.0, 2.0, 3.0]).rotate(1.0),
            Err(VectorError::WrongDimension(2, 3))
        );
    }

    #[test]
    fn dot_product_commutes() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([4.0, 5.0, 6.0]);

        assert_eq!(a.try_dot(&b).unwrap(), 32.0);
        assert_eq!(a.try_dot(&b).unwrap(), b.try_dot(&a).unwrap());
        assert_eq!(
            a.try_dot(&Vector::from([1.0])),
            Err(VectorError::DimensionMismatch(3, 1))
        );
    }

    #[test]
    fn cross_product_of_axes() {
        let x = Vector::from([1.0, 0.0, 0.0]);
        let y = Vector::from([0.0, 1.0, 0.0]);

        assert_eq!(x.try_cross(&y).unwrap(), Vector::from([0.0, 0.0, 1.0]));
    }

    #[test]
    fn cross_product_anticommutes() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([4.0, 5.0, 6.0]);

        let ab = a.try_cross(&b).unwrap();
        let ba = b.try_cross(&a).unwrap();
        assert_eq!(ab, ba.magnify(&-1.0));
    }

    #[test]
    fn planar_cross_product_is_three_dimensional() {
        let a = Vector::from([1.0, 2.0]);
        let b = Vector::from([3.0, 4.0]);

        let cross = a.try_cross(&b).unwrap();
        assert_eq!(cross.dim(), 3);
        assert_eq!(cross, Vector::from([0.0, 0.0, -2.0]));
    }

    #[test]
    fn cross_product_domain() {
        let a = Vector::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            a.try_cross(&a),
            Err(VectorError::UnsupportedDimension(4))
        );
        assert_eq!(
            Vector::from([1.0]).try_cross(&Vector::from([2.0])),
            Err(VectorError::UnsupportedDimension(1))
        );
        assert_eq!(
            Vector::from([1.0, 2.0]).try_cross(&Vector::from([1.0, 2.0, 3.0])),
            Err(VectorError::DimensionMismatch(2, 3))
        );
    }

    #[test]
    fn unit_predicate() {
        assert!(Vector::from([1.0, 0.0]).is_unit());
        assert!(!Vector::from([1.0, 1.0]).is_unit());
    }

    #[test]
    fn parallel_predicate() {
        let a = Vector::from([2.0, 4.0]);

        assert!(a.try_is_parallel(&Vector::from([1.0, 2.0])).unwrap());
        assert!(!a.try_is_parallel(&Vector::from([2.0, 2.0])).unwrap());
        assert_eq!(
            a.try_is_parallel(&Vector::from([1.0, 0.0])),
            Err(VectorError::DivisionByZero)
        );
        assert_eq!(
            a.try_is_parallel(&Vector::from([1.0])),
            Err(VectorError::DimensionMismatch(2, 1))
        );
    }

    #[test]
    fn orthogonal_predicate() {
        let a = Vector::from([1.0, 0.0]);

        assert!(a.try_is_orthogonal(&Vector::from([0.0, 5.0])).unwrap());
        assert!(!a.try_is_orthogonal(&Vector::from([1.0, 1.0])).unwrap());
    }

    #[test]
    fn rand_has_requested_dimension() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let v = Vector::<f64>::rand(&mut rng, 5);

        assert_eq!(v.dim(), 5);
    }

    #[test]
    fn display_uses_angle_brackets() {
        use ark_std::string::ToString;

        assert_eq!(Vector::from([1, 2, 3]).to_string(), "<1, 2, 3>");
    }
}

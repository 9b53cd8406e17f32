//! Plain one-dimensional vectors
//!
//! [`Vector`] is the lightweight companion of [`Tensor`](crate::Tensor) for
//! rank-1 geometry: sums, dot and cross products, scaling and norms. Length
//! checks report through the same [`TensorError`] variants as the tensor engine.
//!
//! ```
//! use numc_core::Vector;
//!
//! let v1 = Vector::from_vec(vec![1.0, 2.0, 3.0]);
//! let v2 = Vector::from_vec(vec![4.0, 5.0, 6.0]);
//!
//! assert_eq!((&v1 + &v2).to_string(), "(5, 7, 9)");
//! assert_eq!(&v1 * &v2, 32.0);
//! assert_eq!((&v1 ^ &v2).to_string(), "(-3, 6, -3)");
//! ```

use crate::error::{or_panic, TensorError, TensorResult};
use num_traits::Float;
use std::fmt;
use std::ops::{Add, BitXor, Div, Index, IndexMut, Mul, Sub};

/// Owned, contiguous vector of floating-point values
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T>
where
    T: Float,
{
    /// Zero vector of length `len`
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    /// Wrap an existing buffer
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector has no components
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Component at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Borrow the components
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn ensure_same_len(&self, other: &Self, operation: &'static str) -> TensorResult<()> {
        if self.len() != other.len() {
            return Err(TensorError::shape_mismatch(operation, &[self.len()], &[other.len()]).logged());
        }
        Ok(())
    }

    /// Component-wise sum
    pub fn add(&self, other: &Self) -> TensorResult<Self> {
        self.ensure_same_len(other, "vector add")?;
        Ok(Self::from_vec(
            self.data.iter().zip(&other.data).map(|(&a, &b)| a + b).collect(),
        ))
    }

    /// Component-wise difference
    pub fn sub(&self, other: &Self) -> TensorResult<Self> {
        self.ensure_same_len(other, "vector sub")?;
        Ok(Self::from_vec(
            self.data.iter().zip(&other.data).map(|(&a, &b)| a - b).collect(),
        ))
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> TensorResult<T> {
        self.ensure_same_len(other, "dot")?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Cross product of two 3-vectors
    ///
    /// # Errors
    ///
    /// [`TensorError::ShapeMismatch`] unless both operands have length 3.
    pub fn cross(&self, other: &Self) -> TensorResult<Self> {
        if self.len() != 3 || other.len() != 3 {
            return Err(TensorError::shape_mismatch("cross", &[self.len()], &[other.len()]).logged());
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Self::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Multiply every component by `scalar`
    pub fn scale(&self, scalar: T) -> Self {
        Self::from_vec(self.data.iter().map(|&v| v * scalar).collect())
    }

    /// Divide every component by `scalar`
    ///
    /// # Errors
    ///
    /// [`TensorError::DivisionByZero`] if `scalar` is zero.
    pub fn div_scalar(&self, scalar: T) -> TensorResult<Self> {
        if scalar == T::zero() {
            return Err(TensorError::DivisionByZero {
                operation: "vector div_scalar",
            }
            .logged());
        }
        Ok(Self::from_vec(self.data.iter().map(|&v| v / scalar).collect()))
    }

    /// Euclidean length
    pub fn norm(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt()
    }
}

impl<T: Float> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Float> Index<usize> for Vector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Float> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'b, T: Float> Add<&'b Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: &'b Vector<T>) -> Vector<T> {
        or_panic(Vector::add(self, rhs))
    }
}

impl<'b, T: Float> Sub<&'b Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: &'b Vector<T>) -> Vector<T> {
        or_panic(Vector::sub(self, rhs))
    }
}

/// `a * b` is the dot product
impl<'b, T: Float> Mul<&'b Vector<T>> for &Vector<T> {
    type Output = T;
    fn mul(self, rhs: &'b Vector<T>) -> T {
        or_panic(self.dot(rhs))
    }
}

/// `a ^ b` is the cross product
impl<'b, T: Float> BitXor<&'b Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn bitxor(self, rhs: &'b Vector<T>) -> Vector<T> {
        or_panic(self.cross(rhs))
    }
}

impl<T: Float> Mul<T> for &Vector<T> {
    type Output = Vector<T>;
    fn mul(self, scalar: T) -> Vector<T> {
        self.scale(scalar)
    }
}

impl<T: Float> Div<T> for &Vector<T> {
    type Output = Vector<T>;
    fn div(self, scalar: T) -> Vector<T> {
        or_panic(self.div_scalar(scalar))
    }
}

impl<T: Float + fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v1() -> Vector<f64> {
        Vector::from_vec(vec![1.0, 2.0, 3.0])
    }

    fn v2() -> Vector<f64> {
        Vector::from_vec(vec![4.0, 5.0, 6.0])
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(v1().add(&v2()).unwrap().as_slice(), &[5.0, 7.0, 9.0]);
        assert_eq!(v2().sub(&v1()).unwrap().as_slice(), &[3.0, 3.0, 3.0]);
        assert_eq!((&v1() * 2.0).as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!((&v2() / 2.0).as_slice(), &[2.0, 2.5, 3.0]);
    }

    #[test]
    fn test_dot_and_cross() {
        assert_eq!(v1().dot(&v2()).unwrap(), 32.0);
        assert_eq!(v1().cross(&v2()).unwrap().as_slice(), &[-3.0, 6.0, -3.0]);
    }

    #[test]
    fn test_length_errors() {
        let short = Vector::from_vec(vec![1.0, 2.0]);
        assert!(matches!(
            v1().dot(&short),
            Err(TensorError::ShapeMismatch { .. })
        ));
        assert!(short.cross(&short).is_err());
        assert!(v1().add(&short).is_err());
    }

    #[test]
    fn test_div_by_zero() {
        assert!(matches!(
            v1().div_scalar(0.0),
            Err(TensorError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_norm_and_zero_vector() {
        assert_eq!(Vector::from_vec(vec![3.0, 4.0]).norm(), 5.0);
        let z = Vector::<f64>::new(4);
        assert_eq!(z.len(), 4);
        assert_eq!(z.norm(), 0.0);
        assert_eq!(z.get(4), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(v1().to_string(), "(1, 2, 3)");
        assert_eq!(Vector::<f64>::new(0).to_string(), "()");
    }

    #[test]
    fn test_index_mut() {
        let mut v = v1();
        v[1] = 10.0;
        assert_eq!(v[1], 10.0);
    }
}

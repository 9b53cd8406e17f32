//! Tensor creation and initialization methods
//!
//! Every constructor goes through [`Tensor::from_vec`] or builds a buffer of
//! exactly `element_count(shape)` elements, so the size invariant holds for all
//! tensors in existence. Shapes whose element count overflows `usize` are
//! rejected: `from_vec` returns an error, the infallible constructors panic.

use super::types::Tensor;
use crate::error::{TensorError, TensorResult};
use crate::shape::{element_count, row_major_strides, Shape};
use num_traits::Float;

impl<T> Tensor<T>
where
    T: Float,
{
    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Errors
    ///
    /// [`TensorError::SizeMismatch`] if `vec.len()` differs from the product of `shape`.
    /// When that product overflows `usize`, `expected` is reported as `usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let tensor = Tensor::from_vec(data, &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    ///
    /// assert!(Tensor::from_vec(vec![1.0, 2.0], &[2, 3]).is_err());
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> TensorResult<Self> {
        let expected = element_count(shape);
        if expected != Some(vec.len()) {
            return Err(TensorError::SizeMismatch {
                shape: shape.to_vec(),
                expected: expected.unwrap_or(usize::MAX),
                actual: vec.len(),
            }
            .logged());
        }
        Ok(Self::from_parts(shape, vec))
    }

    /// Create a tensor filled with zeros
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let z = Tensor::<f64>::zeros(&[2, 3]);
    /// assert!(z.iter().all(|&v| v == 0.0));
    /// ```
    ///
    /// # Panics
    ///
    /// If the element count of `shape` overflows `usize`; the same holds for
    /// [`ones`](Self::ones), [`from_elem`](Self::from_elem),
    /// [`from_fn`](Self::from_fn) and [`eye`](Self::eye).
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    /// Create a tensor filled with ones
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// Create a tensor with every element set to `value`
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self::from_parts(shape, vec![value; checked_len(shape)])
    }

    /// Create a tensor by evaluating `f` at every index tuple in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let t = Tensor::<f64>::from_fn(&[2, 3], |idx| (idx[0] * 10 + idx[1]) as f64);
    /// assert_eq!(t[&[1, 2]], 12.0);
    /// ```
    pub fn from_fn<F>(shape: &[usize], mut f: F) -> Self
    where
        F: FnMut(&[usize]) -> T,
    {
        let total = checked_len(shape);
        let mut data = Vec::with_capacity(total);
        let mut index = vec![0usize; shape.len()];
        for _ in 0..total {
            data.push(f(&index));
            // odometer increment, last dimension fastest
            for d in (0..shape.len()).rev() {
                index[d] += 1;
                if index[d] < shape[d] {
                    break;
                }
                index[d] = 0;
            }
        }
        Self::from_parts(shape, data)
    }

    /// Create an identity matrix (2D tensor with ones on the diagonal)
    ///
    /// # Arguments
    ///
    /// * `n` - Size of the square matrix
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let identity = Tensor::<f64>::eye(3);
    /// assert_eq!(identity.shape(), &[3, 3]);
    /// assert_eq!(identity[&[0, 0]], 1.0);
    /// assert_eq!(identity[&[1, 1]], 1.0);
    /// assert_eq!(identity[&[0, 1]], 0.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut identity = Self::zeros(&[n, n]);
        for i in 0..n {
            identity.data[i * n + i] = T::one();
        }
        identity
    }

    /// Assemble a tensor whose buffer is already known to match `shape`.
    pub(crate) fn from_parts(shape: &[usize], data: Vec<T>) -> Self {
        debug_assert_eq!(Some(data.len()), element_count(shape));
        Self {
            shape: Shape::from_slice(shape),
            strides: row_major_strides(shape),
            data,
        }
    }
}

/// Element count of `shape` for constructors without an error channel.
fn checked_len(shape: &[usize]) -> usize {
    match element_count(shape) {
        Some(len) => len,
        None => panic!("shape {:?} holds more elements than usize can count", shape),
    }
}

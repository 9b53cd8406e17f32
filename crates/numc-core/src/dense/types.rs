//! Dense tensor type definition and basic accessors
//!
//! This module defines the core `Tensor<T>` type and its introspection methods.
//! Construction, indexing and arithmetic live in sibling modules.

use crate::shape::{Shape, Strides};
use num_traits::Float;

/// Dense, row-major, N-dimensional tensor with a single flat buffer
///
/// `Tensor` owns a contiguous `Vec<T>` whose length always equals the product
/// of its shape. The stride table is derived from the shape at construction and
/// never changes afterwards, since the shape is immutable.
///
/// # Type Parameters
///
/// * `T` - The element type, any [`Float`] (typically `f32` or `f64`)
///
/// # Examples
///
/// ```
/// use numc_core::Tensor;
///
/// let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.strides(), &[12, 4, 1]);
/// assert_eq!(tensor.rank(), 3);
/// ```
#[derive(Clone, PartialEq)]
pub struct Tensor<T> {
    pub(crate) shape: Shape,
    pub(crate) strides: Strides,
    pub(crate) data: Vec<T>,
}

impl<T> Tensor<T>
where
    T: Float,
{
    /// Get the rank (number of dimensions) of this tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.rank(), 3);
    /// ```
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Alias of [`rank`](Self::rank).
    pub fn dimensions(&self) -> usize {
        self.rank()
    }

    /// Get the shape of this tensor
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the row-major stride table, one entry per dimension
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Get the total number of elements
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.len(), 24);
    /// ```
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Alias of [`len`](Self::len).
    pub fn total_size(&self) -> usize {
        self.len()
    }

    /// Check if the tensor is empty (has zero elements)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if this is a square matrix (2D tensor with equal dimensions).
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// assert!(Tensor::<f64>::zeros(&[5, 5]).is_square());
    /// assert!(!Tensor::<f64>::zeros(&[3, 5]).is_square());
    /// assert!(!Tensor::<f64>::zeros(&[5, 5, 5]).is_square());
    /// ```
    pub fn is_square(&self) -> bool {
        self.rank() == 2 && self.shape[0] == self.shape[1]
    }

    /// Borrow the flat row-major buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably borrow the flat row-major buffer
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the tensor and return its flat buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over elements in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Element-wise comparison within an absolute tolerance.
    ///
    /// Returns `false` when the shapes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let a = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
    /// let b = Tensor::from_vec(vec![1.0, 2.0 + 1e-12], &[2]).unwrap();
    /// assert!(a.approx_eq(&b, 1e-9));
    /// ```
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tolerance)
    }
}

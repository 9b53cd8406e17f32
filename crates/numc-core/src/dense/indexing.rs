//! Index resolution and element access
//!
//! Every indexed read or write goes through [`Tensor::offset`], which checks
//! the tuple length against the rank and each index against its dimension
//! before folding the tuple into a flat offset with the stride table.

use super::types::Tensor;
use crate::error::{or_panic, TensorError, TensorResult};
use num_traits::Float;

impl<T> Tensor<T>
where
    T: Float,
{
    /// Resolve a full index tuple to a flat buffer offset.
    ///
    /// # Errors
    ///
    /// - [`TensorError::Rank`] if `index.len()` differs from the rank
    /// - [`TensorError::IndexOutOfRange`] if any `index[d] >= shape[d]`
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let t = Tensor::<f64>::zeros(&[2, 3, 4]);
    /// assert_eq!(t.offset(&[1, 2, 3]).unwrap(), 23);
    /// assert!(t.offset(&[1, 2]).is_err());
    /// assert!(t.offset(&[2, 0, 0]).is_err());
    /// ```
    pub fn offset(&self, index: &[usize]) -> TensorResult<usize> {
        if index.len() != self.rank() {
            return Err(TensorError::rank("index", self.rank(), index.len()).logged());
        }

        let mut flat = 0;
        for (dim, ((&idx, &bound), &stride)) in index
            .iter()
            .zip(self.shape.iter())
            .zip(self.strides.iter())
            .enumerate()
        {
            if idx >= bound {
                return Err(TensorError::IndexOutOfRange {
                    dim,
                    index: idx,
                    bound,
                }
                .logged());
            }
            flat += idx * stride;
        }
        Ok(flat)
    }

    /// Read an element by index tuple
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.get(&[0, 1]).unwrap(), 2.0);
    /// assert!(tensor.get(&[5, 5]).is_err());
    /// ```
    pub fn get(&self, index: &[usize]) -> TensorResult<T> {
        let flat = self.offset(index)?;
        Ok(self.data[flat])
    }

    /// Get a mutable reference to an element by index tuple
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let mut tensor = Tensor::<f64>::zeros(&[2, 2]);
    /// *tensor.get_mut(&[0, 1]).unwrap() = 5.0;
    /// assert_eq!(tensor[&[0, 1]], 5.0);
    /// ```
    pub fn get_mut(&mut self, index: &[usize]) -> TensorResult<&mut T> {
        let flat = self.offset(index)?;
        Ok(&mut self.data[flat])
    }

    /// Write an element by index tuple
    pub fn set(&mut self, index: &[usize], value: T) -> TensorResult<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }
}

/// # Panics
///
/// Panics with the resolver's message on a rank mismatch or out-of-range index.
/// Use [`Tensor::get`] for a fallible read.
impl<T: Float> std::ops::Index<&[usize]> for Tensor<T> {
    type Output = T;
    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[or_panic(self.offset(index))]
    }
}

impl<T: Float> std::ops::IndexMut<&[usize]> for Tensor<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        let flat = or_panic(self.offset(index));
        &mut self.data[flat]
    }
}

//! Shape and stride bookkeeping for row-major tensors.
//!
//! A shape is the ordered list of per-dimension sizes. Strides are derived from
//! it once: the last dimension has stride 1 and every preceding stride is the
//! product of the sizes to its right.
//!
//! ```
//! use numc_core::shape::{element_count, row_major_strides};
//!
//! assert_eq!(row_major_strides(&[2, 3, 4]).as_slice(), &[12, 4, 1]);
//! assert_eq!(element_count(&[2, 3, 4]), Some(24));
//! assert_eq!(element_count(&[usize::MAX, 2]), None);
//! ```

use smallvec::SmallVec;

/// Shape type using SmallVec to avoid heap allocation for common ranks.
pub type Shape = SmallVec<[usize; 6]>;

/// Stride table, one entry per dimension.
pub type Strides = SmallVec<[usize; 6]>;

/// Compute the row-major stride table for `shape`.
///
/// An empty shape yields an empty table (scalar tensor). Every shape that
/// passes [`element_count`] has representable strides; the running product is
/// saturated so callers never observe a wrapped stride.
pub fn row_major_strides(shape: &[usize]) -> Strides {
    let mut strides: Strides = SmallVec::from_elem(0, shape.len());
    let mut stride = 1usize;
    for (slot, &dim) in strides.iter_mut().zip(shape.iter()).rev() {
        *slot = stride;
        stride = stride.checked_mul(dim).unwrap_or(usize::MAX);
    }
    strides
}

/// Number of elements a tensor of `shape` holds, or `None` if the product
/// overflows `usize`.
///
/// The empty product is 1, so a rank-0 shape describes a single scalar.
pub fn element_count(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
}

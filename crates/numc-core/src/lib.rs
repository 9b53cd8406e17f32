//! # numc-core
//!
//! Dense strided tensors and small-scale linear algebra for numc.
//!
//! This crate provides the numeric building blocks of the numc stack:
//!
//! - **Dense tensor representation** ([`Tensor`]) with a flat row-major buffer and stride table
//! - **Bounds-checked indexing** of arbitrary rank through a single index resolver
//! - **Element-wise arithmetic** (add, subtract, Hadamard product, scalar scaling)
//! - **Matrix product and inversion** (Gauss-Jordan with partial pivoting) for rank-2 tensors
//! - **Plain vectors** ([`Vector`]) with dot and cross products
//!
//! ## Memory Layout
//!
//! Tensors are always C-contiguous (row-major). The stride of the last axis is
//! 1 and every preceding stride is the product of the sizes to its right. The
//! shape is fixed at construction, so strides never need recomputing.
//!
//! ## Quick Start
//!
//! ```
//! use numc_core::Tensor;
//!
//! let a = Tensor::<f64>::from_vec(vec![4.0, 7.0, 2.0, 6.0], &[2, 2]).unwrap();
//! let b = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//!
//! // Named operations return Result
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.as_slice(), &[5.0, 9.0, 5.0, 10.0]);
//!
//! // `*` between tensors is the matrix product
//! let product = &a * &b;
//! assert_eq!(product.as_slice(), &[25.0, 36.0, 20.0, 28.0]);
//!
//! // Inversion
//! let identity = &a * &a.inverse().unwrap();
//! assert!(identity.approx_eq(&Tensor::eye(2), 1e-9));
//! ```
//!
//! ## Indexing
//!
//! ```
//! use numc_core::Tensor;
//!
//! let mut z = Tensor::<f64>::zeros(&[2, 3]);
//! z[&[0, 1]] = 5.0;
//! z.set(&[1, 2], 9.0).unwrap();
//!
//! assert_eq!(z.get(&[0, 1]).unwrap(), 5.0);
//! assert!(z.get(&[2, 0]).is_err()); // out of range
//! assert!(z.get(&[0]).is_err()); // wrong rank
//! assert_eq!(z.total_size(), 6);
//! ```
//!
//! ## Error Handling
//!
//! Named operations return [`TensorResult`]. Before an error is returned, the
//! failure is recorded through the `log` facade at `error` level; install a
//! backend (see [`logging`]) to see it. Operator forms (`+`, `*`, `/`, ...)
//! panic with the same message instead.
//!
//! ## Features
//!
//! - `tracing`: enable [`logging::init_logging`] backed by `tracing-subscriber`

pub mod config;
pub mod dense;
pub mod error;
pub mod logging;
pub mod shape;
pub mod vector;

#[cfg(test)]
mod property_tests;

pub use config::InverseConfig;
pub use dense::Tensor;
pub use error::{TensorError, TensorResult};
pub use shape::{Shape, Strides};
pub use vector::Vector;

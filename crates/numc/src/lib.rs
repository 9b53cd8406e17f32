//! # numc
//!
//! Umbrella crate for the numc stack.
//!
//! - [`core`]: dense strided tensors, matrix product and inversion, vectors
//! - [`func`]: composable real functions and the function catalog
//! - [`Complex`]: complex numbers from `num-complex`, with decimal rounding
//!   through [`ComplexRound`]
//!
//! ## Quick Start
//!
//! ```
//! use numc::prelude::*;
//!
//! let a = Tensor::<f64>::from_vec(vec![4.0, 7.0, 2.0, 6.0], &[2, 2]).unwrap();
//! let id = &a * &a.inverse().unwrap();
//! assert!(id.approx_eq(&Tensor::eye(2), 1e-12));
//!
//! let x = Func::<f64>::x();
//! assert_eq!((&x ^ &x).eval(2.0), 4.0);
//!
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.norm(), 5.0);
//! ```
//!
//! ## Features
//!
//! - `tracing`: install log output through `tracing-subscriber`
//!   (see [`core::logging`])

pub use numc_core as core;
pub use numc_func as func;

pub mod complex;

pub use complex::ComplexRound;
pub use num_complex::Complex;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use numc::prelude::*;
    //!
    //! let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    //! assert_eq!(v.norm(), 14.0_f64.sqrt());
    //! ```

    // Core types
    pub use crate::core::{InverseConfig, Tensor, TensorError, TensorResult, Vector};

    // Functions
    pub use crate::func::Func;

    // Complex numbers
    pub use crate::{Complex, ComplexRound};

    // Constants
    pub use crate::func::{E, PI, SQRT2};
}

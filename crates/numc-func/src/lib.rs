//! # numc-func
//!
//! Real functions of one variable as composable values.
//!
//! [`Func`] wraps a closure and overloads arithmetic so that functions combine
//! point-wise. The catalog modules lift common functions onto it:
//!
//! - [`elementary`]: exponentials, logarithms, trigonometric and hyperbolic
//!   functions with their inverses, roots, rounding
//! - [`signal`]: step, impulse, ramp, sinc, pulses and periodic waves
//! - [`orthogonal`]: Legendre, Hermite, Laguerre, Chebyshev, Gegenbauer and
//!   Jacobi polynomials
//! - [`special`]: error and gamma functions, beta, integer-order Bessel
//!   functions
//! - [`distributions`]: densities and distribution functions of common
//!   continuous distributions
//!
//! ## Example
//!
//! ```
//! use numc_func::{exp, norm_pdf, sin, Func, PI};
//!
//! let x = Func::<f64>::x();
//! let f = &x ^ &x;
//! assert_eq!(f.eval(3.0), 27.0);
//!
//! let damped = exp(&(-&x)) * sin(&x);
//! assert!(damped.eval(PI).abs() < 1e-15);
//!
//! let density = norm_pdf(&x, 0.0, 1.0);
//! assert!((density.eval(0.0) - 0.398_942_280_401_432_7).abs() < 1e-12);
//! ```

pub mod distributions;
pub mod elementary;
pub mod func;
pub mod orthogonal;
pub mod signal;
pub mod special;

pub use distributions::*;
pub use elementary::*;
pub use func::{Func, Scalar};
pub use orthogonal::*;
pub use signal::*;
pub use special::*;

pub use std::f64::consts::{E, PI, SQRT_2 as SQRT2};

//! Extensions for the re-exported [`Complex`] type.

use num_complex::Complex;
use num_traits::Float;

/// Decimal rounding of both parts of a complex number.
///
/// # Examples
///
/// ```
/// use numc::prelude::*;
///
/// let z = Complex::new(1.23456, -7.891);
/// assert_eq!(z.round(0), Complex::new(1.0, -8.0));
/// assert!((z.round(2) - Complex::new(1.23, -7.89)).norm() < 1e-12);
/// ```
pub trait ComplexRound {
    /// Round the real and imaginary parts half away from zero to `places`
    /// decimal places. Negative `places` rounds to tens, hundreds and so on.
    fn round(&self, places: i32) -> Self;
}

impl<T: Float> ComplexRound for Complex<T> {
    fn round(&self, places: i32) -> Self {
        let factor = T::from(10).unwrap_or_else(T::one).powi(places);
        Complex::new(
            (self.re * factor).round() / factor,
            (self.im * factor).round() / factor,
        )
    }
}

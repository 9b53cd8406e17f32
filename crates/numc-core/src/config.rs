//! Configuration for numerically sensitive operations.
//!
//! Matrix inversion declares a matrix singular when its chosen pivot is zero.
//! By default that test is exact; [`InverseConfig::pivot_tolerance`] widens it
//! to `|pivot| <= tolerance` for callers who want near-singular input rejected.
//!
//! # Environment Variables
//!
//! - `NUMC_PIVOT_TOLERANCE`: tolerance picked up by [`InverseConfig::from_env`]

use crate::error::{TensorError, TensorResult};

/// Environment variable read by [`InverseConfig::from_env`].
pub const PIVOT_TOLERANCE_ENV: &str = "NUMC_PIVOT_TOLERANCE";

/// Settings for Gauss-Jordan inversion.
///
/// # Examples
///
/// ```
/// use numc_core::InverseConfig;
///
/// let exact = InverseConfig::default();
/// assert_eq!(exact.pivot_tolerance, 0.0);
///
/// let loose = InverseConfig::default().with_pivot_tolerance(1e-12);
/// assert!(loose.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseConfig {
    /// A pivot with `|pivot| <= pivot_tolerance` is treated as zero.
    pub pivot_tolerance: f64,
}

impl Default for InverseConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: 0.0,
        }
    }
}

impl InverseConfig {
    /// Set the singularity tolerance.
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// Reject negative or NaN tolerances.
    pub fn validate(&self) -> TensorResult<()> {
        if self.pivot_tolerance.is_nan() || self.pivot_tolerance < 0.0 {
            return Err(TensorError::InvalidConfig(format!(
                "pivot tolerance must be a non-negative number, got {}",
                self.pivot_tolerance
            )));
        }
        Ok(())
    }

    /// Build a config from `NUMC_PIVOT_TOLERANCE`, falling back to the default.
    ///
    /// An unparsable value is reported with a warning and ignored.
    pub fn from_env() -> Self {
        match std::env::var(PIVOT_TOLERANCE_ENV) {
            Ok(raw) => Self::parse_tolerance(&raw),
            Err(_) => Self::default(),
        }
    }

    fn parse_tolerance(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(tolerance) => Self::default().with_pivot_tolerance(tolerance),
            Err(_) => {
                log::warn!(
                    "ignoring {}={:?}: not a floating-point number",
                    PIVOT_TOLERANCE_ENV,
                    raw
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact() {
        assert_eq!(InverseConfig::default().pivot_tolerance, 0.0);
        assert!(InverseConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative() {
        let cfg = InverseConfig::default().with_pivot_tolerance(-1.0);
        assert!(matches!(
            cfg.validate(),
            Err(TensorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let cfg = InverseConfig::default().with_pivot_tolerance(f64::NAN);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_parse_tolerance() {
        assert_eq!(InverseConfig::parse_tolerance(" 1e-9 ").pivot_tolerance, 1e-9);
        assert_eq!(InverseConfig::parse_tolerance("tiny").pivot_tolerance, 0.0);
    }
}

use thiserror::Error;

/// Configuration for bounded scalar minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_evals: usize,
    x_abs_tol: f64,
}

/// Errors that can occur when validating a bounded minimization config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_evals must be at least 1")]
    MaxEvals,

    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(500, 1e-5).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// The interior search stops once the minimum is located to within
    /// `sqrt(eps) * |x| + x_abs_tol / 3`, or after `max_evals` interior
    /// evaluations.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_evals` is zero or the tolerance is negative or
    /// non-finite.
    pub fn new(max_evals: usize, x_abs_tol: f64) -> Result<Self, ConfigError> {
        if max_evals == 0 {
            return Err(ConfigError::MaxEvals);
        }
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }

        Ok(Self {
            max_evals,
            x_abs_tol,
        })
    }

    /// Returns the interior evaluation budget.
    #[must_use]
    pub fn max_evals(&self) -> usize {
        self.max_evals
    }

    /// Returns the absolute tolerance for x convergence.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }
}

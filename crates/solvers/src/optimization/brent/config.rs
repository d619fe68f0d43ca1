use thiserror::Error;

use crate::optimization::bracket;

/// Configuration for Brent's method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    rel_tol: f64,
    abs_tol: f64,
    bracket: bracket::Config,
}

/// Errors that can occur when validating a Brent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("abs_tol must be finite and non-negative")]
    AbsTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(500, 1.48e-8, 1e-11).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// The search stops once the minimum is located to within
    /// `rel_tol * |x| + abs_tol`.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, rel_tol: f64, abs_tol: f64) -> Result<Self, ConfigError> {
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ConfigError::AbsTol);
        }

        Ok(Self {
            max_iters,
            rel_tol,
            abs_tol,
            bracket: bracket::Config::default(),
        })
    }

    /// Returns a copy that brackets with the given config.
    #[must_use]
    pub fn with_bracket(self, bracket: bracket::Config) -> Self {
        Self { bracket, ..self }
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the relative tolerance on x.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the absolute tolerance floor on x.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the config used when a bracket must be found first.
    #[must_use]
    pub fn bracket(&self) -> &bracket::Config {
        &self.bracket
    }
}

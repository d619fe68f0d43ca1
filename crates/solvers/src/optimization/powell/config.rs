use thiserror::Error;

use crate::optimization::{bounded, brent};

/// Configuration for Powell's method.
///
/// The iteration and evaluation budgets default to `1000 * N`, resolved
/// against the problem dimension when the solver runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    f_tol: f64,
    x_tol: f64,
    max_iters: Option<usize>,
    max_evals: Option<usize>,
    brent: brent::Config,
    bounded: bounded::Config,
}

/// Errors that can occur when validating a Powell config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("f_tol must be finite and non-negative")]
    FTol,

    #[error("x_tol must be finite and non-negative")]
    XTol,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("max_evals must be at least 1")]
    MaxEvals,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-4, 1e-4).unwrap()
    }
}

impl Config {
    /// Creates a new config with the default budgets.
    ///
    /// `f_tol` is the relative decrease of the objective over one outer
    /// iteration below which the search stops. `x_tol` sets the precision of
    /// each line search: `100 * x_tol` relative for unbounded lines and
    /// `x_tol` absolute for lines clipped by bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite.
    pub fn new(f_tol: f64, x_tol: f64) -> Result<Self, ConfigError> {
        if !f_tol.is_finite() || f_tol < 0.0 {
            return Err(ConfigError::FTol);
        }
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(ConfigError::XTol);
        }

        let defaults = brent::Config::default();
        let brent = brent::Config::new(defaults.max_iters(), 100.0 * x_tol, defaults.abs_tol())
            .map_err(|_| ConfigError::XTol)?;
        let bounded = bounded::Config::new(bounded::Config::default().max_evals(), x_tol)
            .map_err(|_| ConfigError::XTol)?;

        Ok(Self {
            f_tol,
            x_tol,
            max_iters: None,
            max_evals: None,
            brent,
            bounded,
        })
    }

    /// Returns a copy with a fixed outer iteration budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self {
            max_iters: Some(max_iters),
            ..self
        })
    }

    /// Returns a copy with a fixed evaluation budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_evals` is zero.
    pub fn with_max_evals(self, max_evals: usize) -> Result<Self, ConfigError> {
        if max_evals == 0 {
            return Err(ConfigError::MaxEvals);
        }
        Ok(Self {
            max_evals: Some(max_evals),
            ..self
        })
    }

    /// Returns the relative tolerance on the objective decrease.
    #[must_use]
    pub fn f_tol(&self) -> f64 {
        self.f_tol
    }

    /// Returns the line search tolerance.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the outer iteration budget, if one was set.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }

    /// Returns the evaluation budget, if one was set.
    #[must_use]
    pub fn max_evals(&self) -> Option<usize> {
        self.max_evals
    }

    pub(super) fn brent(&self) -> &brent::Config {
        &self.brent
    }

    pub(super) fn bounded(&self) -> &bounded::Config {
        &self.bounded
    }
}

use thiserror::Error;

/// The golden ratio φ, the classical expansion factor.
const PHI: f64 = 1.618_033_988_749_895;

/// Configuration for the bracket finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    expansion: f64,
    grow_limit: f64,
}

/// Errors that can occur when validating a bracket finder config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expansion must be finite and greater than one")]
    Expansion,

    #[error("grow_limit must be finite and greater than one")]
    GrowLimit,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1000, PHI, 110.0).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// - `max_iters`: expansion steps allowed after the first three evaluations
    /// - `expansion`: factor by which each golden step grows the search
    /// - `grow_limit`: largest parabolic extrapolation, as a multiple of the
    ///   current step
    ///
    /// # Errors
    ///
    /// Returns an error if `expansion` or `grow_limit` is not a finite value
    /// greater than one.
    pub fn new(max_iters: usize, expansion: f64, grow_limit: f64) -> Result<Self, ConfigError> {
        if !expansion.is_finite() || expansion <= 1.0 {
            return Err(ConfigError::Expansion);
        }
        if !grow_limit.is_finite() || grow_limit <= 1.0 {
            return Err(ConfigError::GrowLimit);
        }

        Ok(Self {
            max_iters,
            expansion,
            grow_limit,
        })
    }

    /// Returns a copy with a different step budget.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the maximum number of expansion steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the golden expansion factor.
    #[must_use]
    pub fn expansion(&self) -> f64 {
        self.expansion
    }

    /// Returns the parabolic extrapolation limit.
    #[must_use]
    pub fn grow_limit(&self) -> f64 {
        self.grow_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_golden() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 1000);
        assert!((config.expansion() - PHI).abs() < 1e-15);
    }

    #[test]
    fn rejects_non_expanding_factors() {
        assert_eq!(Config::new(10, 1.0, 110.0), Err(ConfigError::Expansion));
        assert_eq!(Config::new(10, f64::NAN, 110.0), Err(ConfigError::Expansion));
        assert_eq!(Config::new(10, 2.0, 0.5), Err(ConfigError::GrowLimit));
    }
}

use thiserror::Error;

/// Axis-aligned box bounds `lower[i] <= x[i] <= upper[i]`.
///
/// Infinite bounds are allowed, so a coordinate can be half-open or free.
/// Bounds are validated once at construction and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<const N: usize> {
    lower: [f64; N],
    upper: [f64; N],
}

/// Errors that can occur when constructing [`Bounds`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundsError {
    #[error("bound {index} is NaN")]
    NaN { index: usize },

    #[error("bound {index} is inverted: lower {lower} > upper {upper}")]
    Inverted { index: usize, lower: f64, upper: f64 },
}

impl<const N: usize> Bounds<N> {
    /// Creates bounds from per-dimension lower and upper limits.
    ///
    /// # Errors
    ///
    /// Returns an error if any limit is NaN or if `lower[i] > upper[i]`.
    pub fn new(lower: [f64; N], upper: [f64; N]) -> Result<Self, BoundsError> {
        for index in 0..N {
            let (lo, hi) = (lower[index], upper[index]);
            if lo.is_nan() || hi.is_nan() {
                return Err(BoundsError::NaN { index });
            }
            if lo > hi {
                return Err(BoundsError::Inverted {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
        }
        Ok(Self { lower, upper })
    }

    /// Returns the lower limits.
    #[must_use]
    pub fn lower(&self) -> &[f64; N] {
        &self.lower
    }

    /// Returns the upper limits.
    #[must_use]
    pub fn upper(&self) -> &[f64; N] {
        &self.upper
    }

    /// Clamps each coordinate of `x` into its interval independently.
    #[must_use]
    pub fn clamp(&self, x: &[f64; N]) -> [f64; N] {
        std::array::from_fn(|i| x[i].clamp(self.lower[i], self.upper[i]))
    }

    /// Returns true if every coordinate of `x` lies within its interval.
    #[must_use]
    pub fn contains(&self, x: &[f64; N]) -> bool {
        (0..N).all(|i| self.lower[i] <= x[i] && x[i] <= self.upper[i])
    }

    /// Returns the range of `t` for which `x + t * d` stays inside the box.
    ///
    /// Only the non-zero components of `d` constrain `t`; a zero direction
    /// yields `(-inf, inf)`. If the ranges of the individual components do not
    /// overlap the result is `(0, 0)`.
    #[must_use]
    pub fn line_interval(&self, x: &[f64; N], d: &[f64; N]) -> (f64, f64) {
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        for i in (0..N).filter(|&i| d[i] != 0.0) {
            let to_lower = (self.lower[i] - x[i]) / d[i];
            let to_upper = (self.upper[i] - x[i]) / d[i];
            let (lo, hi) = if d[i] > 0.0 {
                (to_lower, to_upper)
            } else {
                (to_upper, to_lower)
            };
            t_min = t_min.max(lo);
            t_max = t_max.min(hi);
        }

        if t_max >= t_min { (t_min, t_max) } else { (0.0, 0.0) }
    }
}

use thiserror::Error;

use crate::optimization::Point;

/// Three points straddling a local minimum.
///
/// `b` lies strictly between `a` and `c` (in either order) and its objective
/// is no larger than either neighbor's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

/// Reasons an explicit triple is not a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    #[error("bracket contains a non-finite abscissa or value")]
    NonFinite,

    #[error("middle point {b} does not lie strictly between {a} and {c}")]
    NotBetween { a: f64, b: f64, c: f64 },

    #[error("middle value {fb} exceeds an outer value ({fa}, {fc})")]
    NotLowest { fa: f64, fb: f64, fc: f64 },
}

impl Bracket {
    /// Creates a bracket, checking ordering and values.
    ///
    /// # Errors
    ///
    /// Returns an error if any number is non-finite, if `b` is not strictly
    /// between `a` and `c`, or if `b`'s objective exceeds either neighbor's.
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self, BracketError> {
        let bracket = Self { a, b, c };
        bracket.check()?;
        Ok(bracket)
    }

    /// Returns true if this triple satisfies the bracket invariants.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Returns the outer interval as `[lo, hi]`.
    #[must_use]
    pub fn interval(&self) -> [f64; 2] {
        if self.a.x < self.c.x {
            [self.a.x, self.c.x]
        } else {
            [self.c.x, self.a.x]
        }
    }

    /// Returns the lowest of the three points (the middle one when valid).
    #[must_use]
    pub fn lowest(&self) -> Point {
        [self.b, self.a, self.c]
            .into_iter()
            .fold(self.b, |best, p| if p.objective < best.objective { p } else { best })
    }

    fn check(&self) -> Result<(), BracketError> {
        let Self { a, b, c } = *self;
        let finite = [a.x, b.x, c.x, a.objective, b.objective, c.objective]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(BracketError::NonFinite);
        }

        let between = (a.x < b.x && b.x < c.x) || (c.x < b.x && b.x < a.x);
        if !between {
            return Err(BracketError::NotBetween {
                a: a.x,
                b: b.x,
                c: c.x,
            });
        }

        if b.objective > a.objective || b.objective > c.objective {
            return Err(BracketError::NotLowest {
                fa: a.objective,
                fb: b.objective,
                fc: c.objective,
            });
        }

        Ok(())
    }
}

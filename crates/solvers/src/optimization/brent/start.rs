/// Where Brent's method starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Start {
    /// Bracket from `x0` and `x0 + 1`.
    Point(f64),

    /// Bracket from two distinct points.
    Points([f64; 2]),

    /// Use three abscissas `[a, b, c]` as the bracket directly.
    ///
    /// All three are evaluated; `b` must lie strictly between `a` and `c` and
    /// have the lowest objective.
    Bracket([f64; 3]),
}

impl From<f64> for Start {
    fn from(x0: f64) -> Self {
        Self::Point(x0)
    }
}

impl From<[f64; 2]> for Start {
    fn from(points: [f64; 2]) -> Self {
        Self::Points(points)
    }
}

impl From<[f64; 3]> for Start {
    fn from(abscissas: [f64; 3]) -> Self {
        Self::Bracket(abscissas)
    }
}

impl Default for Start {
    fn default() -> Self {
        Self::Points([0.0, 1.0])
    }
}

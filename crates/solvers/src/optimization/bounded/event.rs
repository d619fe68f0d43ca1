use crate::optimization::Point;

/// Event emitted after each interior step of bounded minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The point evaluated in this iteration.
    pub point: Point,

    /// The best interior point after this iteration.
    pub best: Point,

    /// The remaining search interval, as `[lo, hi]`.
    pub interval: [f64; 2],
}

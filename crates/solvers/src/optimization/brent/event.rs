use crate::optimization::Point;

/// Event emitted after each Brent iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The point evaluated in this iteration.
    pub point: Point,

    /// The best point after this iteration.
    pub best: Point,

    /// The interval known to contain the minimum, as `[lo, hi]`.
    pub interval: [f64; 2],
}

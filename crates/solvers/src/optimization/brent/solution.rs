use skein_core::Snapshot;

/// Indicates how Brent's method terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,

    /// No bracket could be found, so no Brent iterations ran.
    BracketNotFound,
}

/// The result of Brent's method.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Lowest evaluated x.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Brent iterations performed (bracketing excluded).
    pub iters: usize,

    /// Objective evaluations issued, bracketing included.
    pub evals: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

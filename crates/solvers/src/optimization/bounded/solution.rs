use skein_core::Snapshot;

/// Indicates how bounded minimization terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The interior search met its tolerance.
    Converged,

    /// The interior search used up its evaluation budget.
    MaxEvals,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of bounded minimization.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Lowest evaluated x; always inside the interval.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Interior iterations performed.
    pub iters: usize,

    /// Objective evaluations issued, endpoints included.
    pub evals: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns true if the interior search met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

use skein_core::Snapshot;

/// Indicates how Powell's method terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The relative decrease over one outer iteration fell below `f_tol`.
    Converged,

    /// Reached the outer iteration limit without converging.
    MaxIters,

    /// Reached the evaluation limit without converging.
    MaxEvals,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// A non-fatal condition met during the search.
///
/// `direction` is the index into the direction set, or `None` for the
/// extrapolated direction tried at the end of an outer iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The direction had zero length and was skipped.
    DegenerateDirection {
        iter: usize,
        direction: Option<usize>,
    },

    /// No bracket was found along the direction, so it was skipped.
    BracketNotFound {
        iter: usize,
        direction: Option<usize>,
    },
}

/// The result of Powell's method.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Lowest evaluated point; inside the bounds when bounds were given.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Outer iterations completed.
    pub iters: usize,

    /// Objective evaluations issued.
    pub evals: usize,

    /// Skipped directions, in the order they occurred.
    pub warnings: Vec<Warning>,
}

impl<I, O, const N: usize> Solution<I, O, N> {
    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

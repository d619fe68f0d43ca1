/// Event emitted after each outer iteration of Powell's method.
///
/// Borrows the solver's current point and direction set.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, const N: usize> {
    /// Outer iteration counter (1-based).
    pub iter: usize,

    /// The current point after sweeping every direction.
    pub x: &'a [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Objective value at the start of this iteration.
    pub previous: f64,

    /// Evaluations issued so far.
    pub evals: usize,

    /// The direction set used in this iteration, one direction per row.
    pub directions: &'a [[f64; N]; N],
}

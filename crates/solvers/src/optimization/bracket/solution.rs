use super::Bracket;

/// Whether the bracket finder produced a valid bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The triple straddles a local minimum.
    Bracketed,

    /// The step budget ran out (or the search diverged) before the function
    /// turned back up. The function may be monotone along the search.
    NotFound,
}

/// The result of a bracket search.
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    /// Whether a valid bracket was found.
    pub status: Status,

    /// The last triple visited; a valid bracket when `status` is `Bracketed`.
    pub bracket: Bracket,

    /// Expansion steps taken.
    pub iters: usize,

    /// Objective evaluations issued.
    ///
    /// The three starting points cost three evaluations. A step costs one,
    /// or two when a parabolic trial point is followed by a golden expansion,
    /// so `evals` lies between `3 + iters` and `3 + 2 * iters`.
    pub evals: usize,
}

impl Solution {
    /// Returns true if a valid bracket was found.
    #[must_use]
    pub fn is_bracketed(&self) -> bool {
        self.status == Status::Bracketed
    }
}

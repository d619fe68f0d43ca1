/// Actions an observer can take during Powell's method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current outer iteration and return the best point so far.
    StopEarly,
}

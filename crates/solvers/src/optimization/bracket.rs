//! Bracketing a local minimum by downhill expansion.
//!
//! # Algorithm
//!
//! Given two distinct starting points, the finder evaluates both and turns to
//! walk downhill. It places a third point one golden step further, then
//! repeatedly extrapolates a parabola through the last three points (clamped
//! to `grow_limit` times the current step) or takes another golden step, until
//! the middle point is no higher than both neighbors.
//!
//! Each step reuses the previous points. Most steps cost one evaluation; the
//! two cases that try a parabolic point and then still expand cost two.
//!
//! # Failure
//!
//! A function that keeps decreasing for the whole step budget (for example
//! `f(x) = x`) has no bracket. The finder then returns
//! [`Status::NotFound`] with the last triple instead of an error.

mod config;
mod error;
mod search;
mod solution;
mod triple;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status};
pub use triple::{Bracket, BracketError};

pub(crate) use search::search;

use skein_core::{MinimizationProblem, Model};

use crate::optimization::Objective;

/// Searches for a bracket starting from `x0` and `x1`.
///
/// # Errors
///
/// Returns an error if the starting points are not finite and distinct, or if
/// the model or problem fails during evaluation.
pub fn find<M, P>(model: &M, problem: &P, start: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    M: Model,
    P: MinimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    validate_start(start)?;

    let mut objective = Objective::new(model, problem);
    let mut f = |x: f64| objective.evaluate([x]);
    let solution = search(&mut f, start, config)?;

    if solution.status == Status::NotFound {
        log::warn!(
            "no bracket found after {} steps from {:?}",
            solution.iters,
            start
        );
    }

    Ok(solution)
}

/// Searches for a bracket starting from `x0` and `x0 + 1`.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, or if the model or problem fails
/// during evaluation.
pub fn find_from<M, P>(model: &M, problem: &P, x0: f64, config: &Config) -> Result<Solution, Error>
where
    M: Model,
    P: MinimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    find(model, problem, [x0, x0 + 1.0], config)
}

/// Checks that both starting points are finite and distinct.
pub(crate) fn validate_start(start: [f64; 2]) -> Result<(), Error> {
    let [x0, x1] = start;

    #[allow(clippy::float_cmp)]
    if !x0.is_finite() || !x1.is_finite() || x0 == x1 {
        return Err(Error::InvalidStart { x0, x1 });
    }

    Ok(())
}

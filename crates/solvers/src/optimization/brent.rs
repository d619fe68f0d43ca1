//! Brent's method for single-variable minimization.
//!
//! # Algorithm
//!
//! The search starts from a [`Bracket`](super::bracket::Bracket), either one
//! found by the [`bracket`](super::bracket) finder from one or two starting
//! points, or three abscissas supplied by the caller. It then combines inverse
//! parabolic interpolation through the three best points with golden-section
//! steps into the larger sub-interval.
//!
//! A parabolic step is accepted only if it lands strictly inside the current
//! interval and is shorter than half the step taken two iterations earlier.
//! Steps are never shorter than `tol1 = rel_tol * |x| + abs_tol`.
//!
//! # Termination
//!
//! - [`Status::Converged`] once `|x - mid| < 2 * tol1 - (hi - lo) / 2`
//! - [`Status::MaxIters`] when the iteration budget runs out
//! - [`Status::StoppedByObserver`] when the observer returns [`Action::StopEarly`]
//! - [`Status::BracketNotFound`] when no bracket exists along the search
//!
//! In every case the solution holds the lowest point evaluated during the call,
//! bracketing included.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted after each Brent iteration. Bracketing emits no
//! events.

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;
mod start;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use start::Start;

pub(crate) use search::{Line, line};

use skein_core::{MinimizationProblem, Model, Observer};

use crate::optimization::{Objective, bracket::BracketError, scalar::Stop};

/// Finds a local minimum of the objective using Brent's method.
///
/// `start` may be a single point, two points, or an explicit bracket; see
/// [`Start`].
///
/// # Errors
///
/// Returns an error if `start` is malformed, if an explicit bracket does not
/// straddle a minimum, or if the model or problem fails during evaluation.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    start: impl Into<Start>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: Observer<Event, Action>,
{
    let start = start.into();
    validate(start)?;

    let mut objective = Objective::new(model, problem);
    let searched = {
        let mut f = |x: f64| objective.evaluate([x]);
        line(&mut f, start, config, &mut observer)?
    };

    let (status, iters) = match searched {
        Line::Refined(outcome) => {
            let status = match outcome.stop {
                Stop::Converged => Status::Converged,
                Stop::Budget => Status::MaxIters,
                Stop::Observer => Status::StoppedByObserver,
            };
            (status, outcome.iters)
        }
        Line::NoBracket(bracket) => {
            log::warn!(
                "brent: no bracket found after {} steps from {:?}",
                bracket.iters,
                start
            );
            (Status::BracketNotFound, 0)
        }
        Line::InvalidBracket(err) => return Err(Error::InvalidBracket(err)),
    };

    let (best, evals) = objective.into_best();
    let best = best.ok_or(Error::NoSuccessfulEvaluation)?;

    log::debug!(
        "brent: {status:?} at x = {} (f = {}) after {iters} iterations, {evals} evaluations",
        best.x[0],
        best.objective
    );

    Ok(Solution {
        status,
        x: best.x[0],
        objective: best.objective,
        snapshot: best.snapshot,
        iters,
        evals,
    })
}

/// Finds a local minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `start` is malformed, if an explicit bracket does not
/// straddle a minimum, or if the model or problem fails during evaluation.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    start: impl Into<Start>,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, start, config, ())
}

/// Rejects starts that cannot be searched, before anything is evaluated.
fn validate(start: Start) -> Result<(), Error> {
    match start {
        Start::Point(x0) if !x0.is_finite() => Err(Error::InvalidStart { x0, x1: x0 + 1.0 }),
        Start::Points([x0, x1]) => {
            #[allow(clippy::float_cmp)]
            if !x0.is_finite() || !x1.is_finite() || x0 == x1 {
                return Err(Error::InvalidStart { x0, x1 });
            }
            Ok(())
        }
        Start::Bracket([a, b, c]) => {
            if ![a, b, c].iter().all(|v| v.is_finite()) {
                return Err(BracketError::NonFinite.into());
            }
            if !((a < b && b < c) || (c < b && b < a)) {
                return Err(BracketError::NotBetween { a, b, c }.into());
            }
            Ok(())
        }
        Start::Point(_) => Ok(()),
    }
}

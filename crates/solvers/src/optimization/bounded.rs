//! Brent's method on a fixed closed interval.
//!
//! # Algorithm
//!
//! Unlike [`brent`](super::brent), no bracket is needed: the function may be
//! lowest at either end of `[a, b]`. The interior search starts at the golden
//! point `a + 0.381966 (b - a)` and uses the same mix of parabolic and
//! golden-section steps, with tolerance `sqrt(eps) * |x| + x_abs_tol / 3`.
//!
//! Once the interior search stops, both ends are evaluated and the lowest of
//! the three points is returned, so a minimum on the boundary is found too.
//! The reported value is never above either endpoint value, and the reported
//! `x` never leaves `[a, b]`.
//!
//! # Termination
//!
//! - [`Status::Converged`] when the interior search meets its tolerance
//! - [`Status::MaxEvals`] when `max_evals` interior evaluations are used up
//! - [`Status::StoppedByObserver`] when the observer returns
//!   [`Action::StopEarly`]; the ends are not evaluated in that case

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

pub(crate) use search::{Endpoints, search};

use skein_core::{MinimizationProblem, Model, Observer};

use crate::optimization::{Objective, scalar::Stop};

/// Finds the minimum of the objective over `[a, b]`.
///
/// # Errors
///
/// Returns an error if the interval is not finite with `a < b`, or if the
/// model or problem fails during evaluation.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    interval: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: Observer<Event, Action>,
{
    let [a, b] = interval;
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(Error::InvalidInterval { a, b });
    }

    let mut objective = Objective::new(model, problem);
    let outcome = {
        let mut f = |x: f64| objective.evaluate([x]);
        search(&mut f, interval, config, Endpoints::Compare, &mut observer)?
    };

    let status = match outcome.stop {
        Stop::Converged => Status::Converged,
        Stop::Budget => {
            log::warn!(
                "bounded: evaluation budget of {} used up on [{a}, {b}]",
                config.max_evals()
            );
            Status::MaxEvals
        }
        Stop::Observer => Status::StoppedByObserver,
    };

    let (best, evals) = objective.into_best();
    let best = best.ok_or(Error::NoSuccessfulEvaluation)?;

    log::debug!(
        "bounded: {status:?} at x = {} (f = {}) after {} iterations, {evals} evaluations",
        best.x[0],
        best.objective,
        outcome.iters
    );

    Ok(Solution {
        status,
        x: best.x[0],
        objective: best.objective,
        snapshot: best.snapshot,
        iters: outcome.iters,
        evals,
    })
}

/// Finds the minimum of the objective over `[a, b]` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the interval is not finite with `a < b`, or if the
/// model or problem fails during evaluation.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    interval: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, interval, config, ())
}

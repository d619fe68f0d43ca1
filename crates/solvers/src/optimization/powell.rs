//! Powell's direction-set method for minimization in `N` dimensions.
//!
//! # Algorithm
//!
//! The solver keeps `N` search directions, starting from the coordinate axes.
//! One outer iteration minimizes the objective along each direction in turn
//! (a bracket plus Brent's method per line), remembering which direction gave
//! the largest single decrease `Δ`. It then evaluates the point one further
//! step along the net displacement `p - p0`. If that point is lower than the
//! iteration's start and the classical test
//!
//! ```text
//! 2 (f0 - 2 f + f_e) (f0 - f - Δ)² < Δ (f0 - f_e)²
//! ```
//!
//! holds, the solver minimizes along `p - p0` and replaces the direction of
//! largest decrease with the step it took. The last direction moves into the
//! freed slot and the new one is appended. The set is never re-orthogonalized,
//! so after many replacements it can become nearly dependent.
//!
//! # Bounds
//!
//! With [`Bounds`], every point is clamped into the box before evaluation and
//! each line search only covers the range of `t` for which `p + t d` stays in
//! the box: bounded Brent for a finite range, a `tan` substitution for a range
//! open on one side. Reported points are always inside the box.
//!
//! # Termination
//!
//! - [`Status::Converged`] once `2 |f0 - f| <= f_tol (|f0| + |f|) + 1e-20`
//!   over one outer iteration
//! - [`Status::MaxIters`] or [`Status::MaxEvals`] when a budget runs out
//! - [`Status::StoppedByObserver`] when the observer returns
//!   [`Action::StopEarly`]
//!
//! A zero-length direction or a line with no bracket is skipped and recorded
//! as a [`Warning`] on the solution; the search carries on.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted after each sweep over the directions, before the
//! convergence test.

mod action;
mod config;
mod error;
mod event;
mod iterate;
mod line;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status, Warning};

use skein_core::{MinimizationProblem, Model, Observer};

use crate::optimization::{Bounds, Objective};

use iterate::{Halt, Progress, Stop, run};

/// Minimizes the objective from `x0` using Powell's method.
///
/// Pass `bounds` to keep every evaluated point inside a box; `x0` must then
/// lie inside it.
///
/// # Errors
///
/// Returns an error if `N` is zero, if `x0` is not finite or lies outside the
/// bounds, or if the model or problem fails during evaluation.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    bounds: Option<&Bounds<N>>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    validate(&x0, bounds)?;

    let max_iters = config.max_iters().unwrap_or(1000 * N);
    let max_evals = config.max_evals().unwrap_or(1000 * N);

    let mut objective = match bounds {
        Some(bounds) => Objective::bounded(model, problem, bounds),
        None => Objective::new(model, problem),
    };
    let mut progress = Progress::default();

    let result = run(
        &mut objective,
        x0,
        bounds,
        config,
        max_iters,
        max_evals,
        &mut progress,
        &mut observer,
    );

    let status = match result {
        Ok(Stop::Converged) => Status::Converged,
        Ok(Stop::MaxIters) => {
            log::warn!("powell: iteration budget of {max_iters} used up");
            Status::MaxIters
        }
        Ok(Stop::Observer) => Status::StoppedByObserver,
        Err(Halt::Budget) => {
            log::warn!("powell: evaluation budget of {max_evals} used up");
            Status::MaxEvals
        }
        Err(Halt::Eval(err)) => return Err(err.into()),
    };

    let (best, evals) = objective.into_best();
    let best = best.ok_or(Error::NoSuccessfulEvaluation)?;

    log::debug!(
        "powell: {status:?} at {:?} (f = {}) after {} iterations, {evals} evaluations",
        best.x,
        best.objective,
        progress.iters
    );

    Ok(Solution {
        status,
        x: best.x,
        objective: best.objective,
        snapshot: best.snapshot,
        iters: progress.iters,
        evals,
        warnings: progress.warnings,
    })
}

/// Minimizes the objective from `x0` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `N` is zero, if `x0` is not finite or lies outside the
/// bounds, or if the model or problem fails during evaluation.
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    bounds: Option<&Bounds<N>>,
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, x0, bounds, config, ())
}

fn validate<const N: usize>(x0: &[f64; N], bounds: Option<&Bounds<N>>) -> Result<(), Error> {
    if N == 0 {
        return Err(Error::ZeroDimension);
    }

    if let Some(index) = x0.iter().position(|v| !v.is_finite()) {
        return Err(Error::NonFiniteStart {
            index,
            value: x0[index],
        });
    }

    match bounds {
        Some(bounds) if !bounds.contains(x0) => {
            let (lower, upper) = (bounds.lower(), bounds.upper());
            let index = (0..N)
                .find(|&i| x0[i] < lower[i] || x0[i] > upper[i])
                .unwrap_or_default();
            Err(Error::StartOutsideBounds {
                index,
                value: x0[index],
                lower: lower[index],
                upper: upper[index],
            })
        }
        _ => Ok(()),
    }
}

use skein_core::{MinimizationProblem, Model, Observer};

use crate::optimization::{Bounds, EvalError, Objective, vector};

use super::{
    Action, Config, Event, Warning,
    line::{self, Line},
};

/// Why an objective call was refused or failed.
#[derive(Debug)]
pub(super) enum Halt<E> {
    /// The evaluation budget is used up.
    Budget,

    /// The objective failed.
    Eval(E),
}

/// Why the outer loop stopped on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Stop {
    Converged,
    MaxIters,
    Observer,
}

/// Bookkeeping that survives an early exit from [`run`].
#[derive(Debug, Default)]
pub(super) struct Progress {
    pub(super) iters: usize,
    pub(super) warnings: Vec<Warning>,
}

impl Progress {
    fn warn(&mut self, warning: Warning) {
        log::warn!("powell: skipped a direction: {warning:?}");
        self.warnings.push(warning);
    }
}

type RunError<M, P, const N: usize> =
    Halt<EvalError<<M as Model>::Error, <P as MinimizationProblem<N>>::Error>>;

/// Evaluates through `objective` unless `max_evals` calls were already made.
fn call<M, P, const N: usize>(
    objective: &mut Objective<'_, M, P, N>,
    max_evals: usize,
    x: [f64; N],
) -> Result<f64, RunError<M, P, N>>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    if objective.evals() >= max_evals {
        return Err(Halt::Budget);
    }
    objective.evaluate(x).map_err(Halt::Eval)
}

/// The outer loop of Powell's method.
///
/// Each outer iteration minimizes along every direction in turn, remembering
/// the largest single decrease. It then evaluates the point extrapolated along
/// the net displacement and, when the classical test finds that direction
/// still promising, minimizes along it and puts it at the end of the set in
/// place of the direction of largest decrease.
#[allow(clippy::too_many_arguments)]
pub(super) fn run<M, P, Obs, const N: usize>(
    objective: &mut Objective<'_, M, P, N>,
    x0: [f64; N],
    bounds: Option<&Bounds<N>>,
    config: &Config,
    max_iters: usize,
    max_evals: usize,
    progress: &mut Progress,
    observer: &mut Obs,
) -> Result<Stop, RunError<M, P, N>>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    let mut directions = vector::identity::<N>();
    let mut x = x0;
    let mut fval = call(objective, max_evals, x)?;

    loop {
        let iter = progress.iters + 1;
        let (x_start, f_start) = (x, fval);

        // Largest single-direction decrease and where it happened.
        let mut delta = 0.0;
        let mut biggest = 0;

        for (index, direction) in directions.iter().enumerate() {
            let before = fval;
            let searched = {
                let mut f = |x: [f64; N]| call(objective, max_evals, x);
                line::minimize(&mut f, &x, direction, fval, bounds, config)?
            };

            match searched {
                Line::Moved { x: next, objective: value, .. } => {
                    x = next;
                    fval = value;
                }
                Line::Degenerate => progress.warn(Warning::DegenerateDirection {
                    iter,
                    direction: Some(index),
                }),
                Line::NoBracket => progress.warn(Warning::BracketNotFound {
                    iter,
                    direction: Some(index),
                }),
            }

            if before - fval > delta {
                delta = before - fval;
                biggest = index;
            }
        }

        progress.iters = iter;

        let displacement = vector::sub(&x, &x_start);
        log::debug!(
            "powell iter {iter}: f = {fval} (was {f_start}), moved {}, {} evaluations",
            vector::dot(&displacement, &displacement).sqrt(),
            objective.evals()
        );

        let event = Event {
            iter,
            x: &x,
            objective: fval,
            previous: f_start,
            evals: objective.evals(),
            directions: &directions,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Stop::Observer);
        }

        let bound = config.f_tol() * (f_start.abs() + fval.abs()) + 1e-20;
        if 2.0 * (f_start - fval).abs() <= bound {
            return Ok(Stop::Converged);
        }
        if iter >= max_iters {
            return Ok(Stop::MaxIters);
        }

        // Stay inside the box when stepping once more along the displacement.
        let reach = bounds.map_or(1.0, |bounds| {
            bounds.line_interval(&x, &displacement).1.min(1.0)
        });
        let extrapolated = vector::add_scaled(&x, reach, &displacement);
        let f_extra = call(objective, max_evals, extrapolated)?;

        if f_start > f_extra {
            let t = 2.0 * (f_start + f_extra - 2.0 * fval) * (f_start - fval - delta).powi(2)
                - delta * (f_start - f_extra).powi(2);

            if t < 0.0 {
                let searched = {
                    let mut f = |x: [f64; N]| call(objective, max_evals, x);
                    line::minimize(&mut f, &x, &displacement, fval, bounds, config)?
                };

                match searched {
                    Line::Moved {
                        x: next,
                        objective: value,
                        step,
                    } => {
                        x = next;
                        fval = value;
                        if !vector::is_zero(&step) {
                            let last = N.saturating_sub(1);
                            directions[biggest] = directions[last];
                            directions[last] = step;
                        }
                    }
                    Line::Degenerate => progress.warn(Warning::DegenerateDirection {
                        iter,
                        direction: None,
                    }),
                    Line::NoBracket => progress.warn(Warning::BracketNotFound {
                        iter,
                        direction: None,
                    }),
                }
            }
        }
    }
}

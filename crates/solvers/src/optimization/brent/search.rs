use skein_core::Observer;

use crate::optimization::{
    Point,
    bracket::{self, Bracket, BracketError},
    scalar::{GOLDEN_FRACTION, Outcome, Stop, parabola, parabolic_step, sign},
};

use super::{Action, Config, Event, Start};

/// Result of a bracket-then-refine line search.
pub(crate) enum Line {
    /// Brent iterations ran on a valid bracket.
    Refined(Outcome),

    /// The bracket finder gave up; carries its last triple.
    NoBracket(bracket::Solution),

    /// An explicit bracket failed the value check.
    InvalidBracket(BracketError),
}

/// Finds a bracket as `start` requests, then refines it with Brent's method.
///
/// `start` must already be structurally valid (finite, distinct, ordered).
pub(crate) fn line<F, E, Obs>(
    f: &mut F,
    start: Start,
    config: &Config,
    observer: &mut Obs,
) -> Result<Line, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    Obs: Observer<Event, Action>,
{
    let bracket = match start {
        Start::Point(x0) => bracket::search(f, [x0, x0 + 1.0], config.bracket())?,
        Start::Points(points) => bracket::search(f, points, config.bracket())?,
        Start::Bracket([a, b, c]) => {
            let (fa, fb, fc) = (f(a)?, f(b)?, f(c)?);
            match Bracket::new(Point::new(a, fa), Point::new(b, fb), Point::new(c, fc)) {
                Ok(bracket) => bracket::Solution {
                    status: bracket::Status::Bracketed,
                    bracket,
                    iters: 0,
                    evals: 3,
                },
                Err(err) => return Ok(Line::InvalidBracket(err)),
            }
        }
    };

    if !bracket.is_bracketed() {
        return Ok(Line::NoBracket(bracket));
    }

    iterate(f, &bracket.bracket, config, observer).map(Line::Refined)
}

/// Brent's method on a valid bracket.
///
/// Keeps the best point `x`, the second best `w` and the previous `w` in `v`.
/// Each iteration tries a parabola through them and falls back to a golden
/// section step into the larger side of `[lo, hi]` when the parabola would
/// leave the interval or fails to halve the step from two iterations ago.
pub(crate) fn iterate<F, E, Obs>(
    f: &mut F,
    bracket: &Bracket,
    config: &Config,
    observer: &mut Obs,
) -> Result<Outcome, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    Obs: Observer<Event, Action>,
{
    let [mut lo, mut hi] = bracket.interval();

    let best = bracket.lowest();
    let (mut x, mut fx) = (best.x, best.objective);
    let (mut w, mut fw) = (x, fx);
    let (mut v, mut fv) = (x, fx);

    // Step taken in the previous iteration and the one before it.
    let mut step: f64 = 0.0;
    let mut prev_step: f64 = 0.0;

    let tolerance = |x: f64| config.rel_tol() * x.abs() + config.abs_tol();
    let is_converged = |x: f64, lo: f64, hi: f64| {
        let tol1 = tolerance(x);
        (x - 0.5 * (lo + hi)).abs() < 2.0 * tol1 - 0.5 * (hi - lo)
    };

    for iter in 1..=config.max_iters() {
        if is_converged(x, lo, hi) {
            return Ok(Outcome {
                best: Point::new(x, fx),
                iters: iter - 1,
                stop: Stop::Converged,
            });
        }

        let tol1 = tolerance(x);
        let mid = 0.5 * (lo + hi);
        let golden = |x: f64| {
            let span = if x >= mid { lo - x } else { hi - x };
            (span, GOLDEN_FRACTION * span)
        };

        if prev_step.abs() <= tol1 {
            (prev_step, step) = golden(x);
        } else {
            let (p, q) = parabola(x, fx, w, fw, v, fv);
            let limit = prev_step;
            prev_step = step;

            match parabolic_step(p, q, x, lo, hi, limit) {
                Some(s) => {
                    step = s;
                    let u = x + step;
                    if u - lo < 2.0 * tol1 || hi - u < 2.0 * tol1 {
                        step = tol1 * sign(mid - x);
                    }
                }
                None => (prev_step, step) = golden(x),
            }
        }

        let u = if step.abs() < tol1 {
            x + tol1 * sign(step)
        } else {
            x + step
        };
        let fu = f(u)?;

        if fu > fx {
            if u < x {
                lo = u;
            } else {
                hi = u;
            }
            #[allow(clippy::float_cmp)]
            if fu <= fw || w == x {
                (v, fv) = (w, fw);
                (w, fw) = (u, fu);
            } else if fu <= fv || v == x || v == w {
                (v, fv) = (u, fu);
            }
        } else {
            if u >= x {
                lo = x;
            } else {
                hi = x;
            }
            (v, fv) = (w, fw);
            (w, fw) = (x, fx);
            (x, fx) = (u, fu);
        }

        log::trace!("brent iter {iter}: u = {u}, f(u) = {fu}, best = {x}");

        let event = Event {
            iter,
            point: Point::new(u, fu),
            best: Point::new(x, fx),
            interval: [lo, hi],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Outcome {
                best: Point::new(x, fx),
                iters: iter,
                stop: Stop::Observer,
            });
        }
    }

    let stop = if is_converged(x, lo, hi) {
        Stop::Converged
    } else {
        Stop::Budget
    };

    Ok(Outcome {
        best: Point::new(x, fx),
        iters: config.max_iters(),
        stop,
    })
}

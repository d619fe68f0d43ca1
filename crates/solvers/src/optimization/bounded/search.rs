use skein_core::Observer;

use crate::optimization::{
    Point,
    scalar::{GOLDEN_FRACTION, Outcome, Stop, parabola, parabolic_step, sign},
};

use super::{Action, Config, Event};

/// Whether the interval ends are evaluated after the interior search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoints {
    /// Evaluate both ends and keep the lowest of the three points.
    Compare,

    /// Return the interior result as is.
    Skip,
}

/// Brent's method restricted to `[a, b]`, which need not be a bracket.
///
/// The first point is the golden-section point `a + 0.381966 (b - a)`. The
/// interior search stops on the tolerance test, after `max_evals` interior
/// evaluations, or when the observer asks to stop. Unless the observer stopped
/// it, the ends are then compared when `endpoints` asks for it; ties keep the
/// interior point.
///
/// Requires `a < b`.
pub(crate) fn search<F, E, Obs>(
    f: &mut F,
    [a, b]: [f64; 2],
    config: &Config,
    endpoints: Endpoints,
    observer: &mut Obs,
) -> Result<Outcome, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    Obs: Observer<Event, Action>,
{
    let sqrt_eps = f64::EPSILON.sqrt();
    let tolerance = |x: f64| sqrt_eps * x.abs() + config.x_abs_tol() / 3.0;

    let (mut lo, mut hi) = (a, b);

    let mut x = lo + GOLDEN_FRACTION * (hi - lo);
    let mut fx = f(x)?;
    let mut evals = 1;

    let (mut w, mut fw) = (x, fx);
    let (mut v, mut fv) = (x, fx);

    let mut step: f64 = 0.0;
    let mut prev_step: f64 = 0.0;
    let mut iters = 0;

    let stop = loop {
        let tol1 = tolerance(x);
        let mid = 0.5 * (lo + hi);

        if (x - mid).abs() <= 2.0 * tol1 - 0.5 * (hi - lo) {
            break Stop::Converged;
        }
        if evals >= config.max_evals() {
            break Stop::Budget;
        }
        iters += 1;

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

            if let Some(s) = parabolic_step(p, q, x, lo, hi, limit) {
                step = s;
                let u = x + step;
                if u - lo < 2.0 * tol1 || hi - u < 2.0 * tol1 {
                    step = tol1 * sign(mid - x);
                }
            } else {
                (prev_step, step) = golden(x);
            }
        }

        let u = x + sign(step) * step.abs().max(tol1);
        let fu = f(u)?;
        evals += 1;

        if fu <= fx {
            if u >= x {
                lo = x;
            } else {
                hi = x;
            }
            (v, fv) = (w, fw);
            (w, fw) = (x, fx);
            (x, fx) = (u, fu);
        } else {
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
        }

        log::trace!("bounded iter {iters}: u = {u}, f(u) = {fu}, best = {x}");

        let event = Event {
            iter: iters,
            point: Point::new(u, fu),
            best: Point::new(x, fx),
            interval: [lo, hi],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Stop::Observer;
        }
    };

    let mut best = Point::new(x, fx);
    if endpoints == Endpoints::Compare && stop != Stop::Observer {
        for end in [a, b] {
            let value = f(end)?;
            if value < best.objective {
                best = Point::new(end, value);
            }
        }
    }

    Ok(Outcome { best, iters, stop })
}

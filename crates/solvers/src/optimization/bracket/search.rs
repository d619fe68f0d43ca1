use crate::optimization::Point;

use super::{Bracket, Config, Solution, Status};

/// Floor on the parabolic extrapolation denominator.
const TINY: f64 = 1e-21;

/// Core bracket search over any fallible scalar function.
///
/// Starting from `x0` and `x1`, walks downhill with golden expansions and
/// clamped parabolic extrapolation until the middle of the last three points
/// is no higher than its neighbors, or until the step budget runs out.
pub(crate) fn search<F, E>(f: &mut F, start: [f64; 2], config: &Config) -> Result<Solution, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let grow = config.expansion();
    let [mut xa, mut xb] = start;

    let mut fa = f(xa)?;
    let mut fb = f(xb)?;
    let mut evals = 2;

    if fb > fa {
        std::mem::swap(&mut xa, &mut xb);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut xc = xb + grow * (xb - xa);
    let mut fc = f(xc)?;
    evals += 1;

    let mut iters = 0;
    while fc < fb {
        if iters >= config.max_iters() {
            break;
        }
        iters += 1;

        let tmp1 = (xb - xa) * (fb - fc);
        let tmp2 = (xb - xc) * (fb - fa);
        let val = tmp2 - tmp1;
        let denom = if val.abs() < TINY { 2.0 * TINY } else { 2.0 * val };
        let mut w = xb - ((xb - xc) * tmp2 - (xb - xa) * tmp1) / denom;
        let w_lim = xb + config.grow_limit() * (xc - xb);

        let mut fw;
        if (w - xc) * (xb - w) > 0.0 {
            // Parabolic point between b and c.
            fw = f(w)?;
            evals += 1;
            if fw < fc {
                xa = xb;
                fa = fb;
                xb = w;
                fb = fw;
                break;
            } else if fw > fb {
                xc = w;
                fc = fw;
                break;
            }
            w = xc + grow * (xc - xb);
            fw = f(w)?;
            evals += 1;
        } else if (w - w_lim) * (w_lim - xc) >= 0.0 {
            // Parabolic point beyond the limit; clamp it.
            w = w_lim;
            fw = f(w)?;
            evals += 1;
        } else if (w - w_lim) * (xc - w) > 0.0 {
            // Parabolic point between c and the limit.
            fw = f(w)?;
            evals += 1;
            if fw < fc {
                xb = xc;
                fb = fc;
                xc = w;
                fc = fw;
                w = xc + grow * (xc - xb);
                fw = f(w)?;
                evals += 1;
            }
        } else {
            w = xc + grow * (xc - xb);
            fw = f(w)?;
            evals += 1;
        }

        xa = xb;
        fa = fb;
        xb = xc;
        fb = fc;
        xc = w;
        fc = fw;

        if !xc.is_finite() || !fc.is_finite() {
            log::trace!("bracket search diverged at x = {xc}");
            break;
        }
    }

    let bracket = Bracket {
        a: Point::new(xa, fa),
        b: Point::new(xb, fb),
        c: Point::new(xc, fc),
    };
    let status = if bracket.is_valid() {
        Status::Bracketed
    } else {
        Status::NotFound
    };

    Ok(Solution {
        status,
        bracket,
        iters,
        evals,
    })
}

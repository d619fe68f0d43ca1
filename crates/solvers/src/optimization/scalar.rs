//! Pieces shared by the scalar (line) minimizers.

use super::Point;

/// The golden-section fraction `(3 - √5) / 2`.
pub(crate) const GOLDEN_FRACTION: f64 = 0.381_966_011_250_105_1;

/// Why a scalar search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stop {
    Converged,
    Budget,
    Observer,
}

/// Final state of a scalar search loop.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Outcome {
    /// Best point held by the search when it stopped.
    pub(crate) best: Point,

    /// Completed iterations.
    pub(crate) iters: usize,

    pub(crate) stop: Stop,
}

/// Returns `+1` for non-negative values and `-1` otherwise.
pub(crate) fn sign(value: f64) -> f64 {
    if value >= 0.0 { 1.0 } else { -1.0 }
}

/// Accepts a parabolic step `p / q` only if it lands strictly inside
/// `(lo - x, hi - x)` and is shorter than half of `limit`.
pub(crate) fn parabolic_step(p: f64, q: f64, x: f64, lo: f64, hi: f64, limit: f64) -> Option<f64> {
    let inside = p > q * (lo - x) && p < q * (hi - x);
    let shrinking = p.abs() < (0.5 * q * limit).abs();
    (inside && shrinking).then(|| p / q)
}

/// Numerator and (non-negative) denominator of the parabola vertex offset
/// through `(x, fx)`, `(w, fw)`, `(v, fv)`, measured from `x`.
pub(crate) fn parabola(x: f64, fx: f64, w: f64, fw: f64, v: f64, fv: f64) -> (f64, f64) {
    let r = (x - w) * (fx - fv);
    let q = (x - v) * (fx - fw);
    let mut p = (x - v) * q - (x - w) * r;
    let mut q = 2.0 * (q - r);
    if q > 0.0 {
        p = -p;
    }
    q = q.abs();
    (p, q)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parabola_through_exact_quadratic_hits_vertex() {
        // f(x) = (x - 2)^2 sampled at 0, 1, 3.
        let f = |x: f64| (x - 2.0).powi(2);
        let (p, q) = parabola(1.0, f(1.0), 0.0, f(0.0), 3.0, f(3.0));
        assert_relative_eq!(1.0 + p / q, 2.0);
    }

    #[test]
    fn parabolic_step_rejects_steps_outside_interval() {
        // Vertex offset of 5 from x = 1, interval [0, 3].
        assert!(parabolic_step(5.0, 1.0, 1.0, 0.0, 3.0, 100.0).is_none());
        assert_eq!(parabolic_step(1.0, 1.0, 1.0, 0.0, 3.0, 100.0), Some(1.0));
    }

    #[test]
    fn parabolic_step_rejects_slow_steps() {
        // Step of 1.0 is not smaller than half of 1.5.
        assert!(parabolic_step(1.0, 1.0, 1.0, 0.0, 3.0, 1.5).is_none());
    }

    #[test]
    fn golden_fraction_matches_phi() {
        let phi = 0.5 * (1.0 + 5.0_f64.sqrt());
        assert_relative_eq!(GOLDEN_FRACTION, 2.0 - phi);
    }
}

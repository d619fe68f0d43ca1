use std::f64::consts::FRAC_PI_2;

use crate::optimization::{
    Bounds,
    bounded::{self, Endpoints},
    brent::{self, Start},
    vector,
};

use super::Config;

/// Outcome of minimizing along one direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Line<const N: usize> {
    /// The search settled at `x = p + step`; `step` is zero if it stayed put.
    Moved {
        x: [f64; N],
        objective: f64,
        step: [f64; N],
    },

    /// The direction is the zero vector; nothing was evaluated.
    Degenerate,

    /// The objective kept decreasing along the direction.
    NoBracket,
}

impl<const N: usize> Line<N> {
    fn stay(p: &[f64; N], objective: f64) -> Self {
        Self::Moved {
            x: *p,
            objective,
            step: [0.0; N],
        }
    }
}

/// Minimizes `f(p + t * d)` over `t`, where `fp = f(p)`.
///
/// Without bounds, or when the box does not limit `t` in either direction,
/// the line is bracketed from `t = 0, 1` and refined with Brent's method.
/// A finite range of `t` is searched with bounded Brent, ends included. A
/// range open on one side is mapped onto a finite one through `t = tan(s)`.
///
/// The result never moves uphill from `p`.
pub(super) fn minimize<F, E, const N: usize>(
    f: &mut F,
    p: &[f64; N],
    d: &[f64; N],
    fp: f64,
    bounds: Option<&Bounds<N>>,
    config: &Config,
) -> Result<Line<N>, E>
where
    F: FnMut([f64; N]) -> Result<f64, E>,
{
    if vector::is_zero(d) {
        return Ok(Line::Degenerate);
    }

    let (t_min, t_max) = bounds.map_or((f64::NEG_INFINITY, f64::INFINITY), |bounds| {
        bounds.line_interval(p, d)
    });

    let mut along = |t: f64| f(vector::add_scaled(p, t, d));

    let (t, objective) = match (t_min.is_finite(), t_max.is_finite()) {
        (false, false) => {
            match brent::line(&mut along, Start::Points([0.0, 1.0]), config.brent(), &mut ())? {
                brent::Line::Refined(outcome) => (outcome.best.x, outcome.best.objective),
                brent::Line::NoBracket(_) | brent::Line::InvalidBracket(_) => {
                    return Ok(Line::NoBracket);
                }
            }
        }
        (true, true) => {
            #[allow(clippy::float_cmp)]
            if t_min == t_max {
                return Ok(Line::stay(p, fp));
            }
            let outcome = bounded::search(
                &mut along,
                [t_min, t_max],
                config.bounded(),
                Endpoints::Compare,
                &mut (),
            )?;
            (outcome.best.x, outcome.best.objective)
        }
        _ => {
            let mut along_tan = |s: f64| along(s.tan());
            let outcome = bounded::search(
                &mut along_tan,
                [t_min.atan(), t_max.atan()],
                config.bounded(),
                Endpoints::Skip,
                &mut (),
            )?;
            debug_assert!(outcome.best.x.abs() < FRAC_PI_2);
            (outcome.best.x.tan(), outcome.best.objective)
        }
    };

    if objective.is_nan() || objective > fp {
        return Ok(Line::stay(p, fp));
    }

    log::trace!("line search moved t = {t} along {d:?}, f = {objective}");

    Ok(Line::Moved {
        x: vector::add_scaled(p, t, d),
        objective,
        step: vector::scale(t, d),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    fn bowl(x: [f64; 2]) -> Result<f64, Infallible> {
        Ok((x[0] - 3.0).powi(2) + 2.0 * (x[1] + 1.0).powi(2))
    }

    #[test]
    fn zero_direction_is_degenerate() {
        let mut calls = 0;
        let mut f = |x: [f64; 2]| {
            calls += 1;
            bowl(x)
        };

        let line = minimize(&mut f, &[0.0, 0.0], &[0.0, 0.0], 11.0, None, &Config::default());

        assert_eq!(line, Ok(Line::Degenerate));
        assert_eq!(calls, 0);
    }

    #[test]
    fn unbounded_line_reaches_the_minimum_along_the_axis() {
        let mut f = bowl;

        let line = minimize(&mut f, &[0.0, 0.0], &[1.0, 0.0], 11.0, None, &Config::default());

        let Ok(Line::Moved { x, objective, step }) = line else {
            panic!("expected a move, got {line:?}");
        };
        assert_relative_eq!(x[0], 3.0, epsilon = 1e-3);
        assert_eq!(x[1], 0.0);
        assert_relative_eq!(objective, 2.0, epsilon = 1e-6);
        assert_relative_eq!(step[0], x[0]);
    }

    #[test]
    fn bounded_line_stops_on_the_face() {
        let mut f = bowl;
        let bounds = Bounds::new([-1.0, -1.0], [1.0, 1.0]).unwrap();

        let line = minimize(
            &mut f,
            &[0.0, 0.0],
            &[1.0, 0.0],
            11.0,
            Some(&bounds),
            &Config::default(),
        );

        let Ok(Line::Moved { x, objective, .. }) = line else {
            panic!("expected a move, got {line:?}");
        };
        assert_eq!(x, [1.0, 0.0]);
        assert_relative_eq!(objective, 6.0);
    }

    #[test]
    fn half_open_line_uses_the_tangent_map() {
        let mut f = bowl;
        let bounds = Bounds::new([-1.0, -5.0], [f64::INFINITY, 5.0]).unwrap();

        // Along +x the range of t is [-1, inf).
        let line = minimize(
            &mut f,
            &[0.0, -1.0],
            &[1.0, 0.0],
            9.0,
            Some(&bounds),
            &Config::default(),
        );

        let Ok(Line::Moved { x, objective, .. }) = line else {
            panic!("expected a move, got {line:?}");
        };
        assert_relative_eq!(x[0], 3.0, epsilon = 1e-3);
        assert!(objective < 1e-5);
    }

    #[test]
    fn monotone_line_has_no_bracket() {
        let mut f = |x: [f64; 2]| Ok::<_, Infallible>(-x[0]);

        let line = minimize(&mut f, &[0.0, 0.0], &[1.0, 0.0], 0.0, None, &Config::default());

        assert_eq!(line, Ok(Line::NoBracket));
    }

    #[test]
    fn empty_range_stays_put() {
        let mut calls = 0;
        let mut f = |x: [f64; 2]| {
            calls += 1;
            bowl(x)
        };
        let bounds = Bounds::new([0.0, 0.0], [0.0, 1.0]).unwrap();

        let line = minimize(
            &mut f,
            &[0.0, 0.5],
            &[1.0, 0.0],
            11.5,
            Some(&bounds),
            &Config::default(),
        );

        assert_eq!(line, Ok(Line::stay(&[0.0, 0.5], 11.5)));
        assert_eq!(calls, 0);
    }
}

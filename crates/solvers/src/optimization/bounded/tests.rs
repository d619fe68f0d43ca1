use std::cell::RefCell;
use std::convert::Infallible;

use approx::assert_relative_eq;

use skein_core::{Function, MinimizationProblem, Model};

use super::{Action, Config, ConfigError, Error, Event, Status, minimize, minimize_unobserved};

/// Scalar model that records every x it is called with.
struct Recorded<F> {
    f: F,
    calls: RefCell<Vec<f64>>,
}

impl<F: Fn(f64) -> f64> Recorded<F> {
    fn new(f: F) -> Self {
        Self {
            f,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl<F: Fn(f64) -> f64> Model for Recorded<F> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        self.calls.borrow_mut().push(*x);
        Ok((self.f)(*x))
    }
}

/// Objective: just use the model output as the objective.
struct ObjectiveOutput;

impl MinimizationProblem<1> for ObjectiveOutput {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[test]
fn minimizes_interior_quadratic() {
    // 3x² - x + 4 has its minimum at x = 1/6.
    let model = Recorded::new(|x| 3.0 * x * x - x + 4.0);

    let solution = minimize_unobserved(&model, &ObjectiveOutput, [-2.0, 4.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 1.0 / 6.0, epsilon = 1e-5);
    assert_relative_eq!(solution.objective, 4.0 - 1.0 / 12.0, epsilon = 1e-9);
    assert_eq!(model.count(), solution.evals);
}

#[test]
fn finds_minimum_on_lower_end() {
    let f = Function::new(|x: &[f64; 1]| x[0]);

    let solution = minimize_unobserved(&f, &f, [1.0, 3.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.x, 1.0);
    assert_eq!(solution.objective, 1.0);
}

#[test]
fn finds_minimum_on_upper_end() {
    let f = Function::new(|x: &[f64; 1]| (x[0] - 10.0).powi(2));

    let solution = minimize_unobserved(&f, &f, [-1.0, 2.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.x, 2.0);
    assert_relative_eq!(solution.objective, 64.0);
}

#[test]
fn never_leaves_the_interval_and_beats_both_ends() {
    let cases: [(fn(f64) -> f64, [f64; 2]); 4] = [
        (f64::sin, [0.0, 10.0]),
        (|x| (x - 0.3).abs(), [-1.0, 1.0]),
        (|x| -x * x, [-2.0, 1.0]),
        (|x| (x * 7.0).cos() + 0.1 * x, [-3.0, 3.0]),
    ];

    for (f, [a, b]) in cases {
        let model = Recorded::new(f);

        let solution = minimize_unobserved(&model, &ObjectiveOutput, [a, b], &Config::default())
            .expect("should finish");

        assert!(a <= solution.x && solution.x <= b, "x = {} left [{a}, {b}]", solution.x);
        assert!(solution.objective <= f(a));
        assert!(solution.objective <= f(b));
        assert!(model.calls.borrow().iter().all(|&x| a <= x && x <= b));
        assert_eq!(model.count(), solution.evals);
    }
}

#[test]
fn evaluation_budget_is_reported_not_fatal() {
    let model = Recorded::new(|x| (x - 0.123).powi(2));
    let config = Config::new(3, 1e-12).unwrap();

    let solution =
        minimize_unobserved(&model, &ObjectiveOutput, [-5.0, 5.0], &config).expect("no error");

    assert_eq!(solution.status, Status::MaxEvals);
    assert_eq!(solution.iters, 2);

    // Three interior evaluations plus both ends.
    assert_eq!(solution.evals, 5);
    assert_eq!(model.count(), 5);
}

#[test]
fn observer_can_stop_early() {
    let model = Recorded::new(|x| (x - 0.5).powi(2));

    let mut seen = Vec::new();
    let observer = |event: &Event| {
        seen.push(event.point.x);
        Some(Action::StopEarly)
    };

    let solution = minimize(&model, &ObjectiveOutput, [0.0, 4.0], &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
    assert_eq!(seen.len(), 1);

    // The ends are not evaluated after an early stop.
    assert_eq!(solution.evals, 2);
    assert_eq!(model.count(), 2);
}

#[test]
fn rejects_bad_intervals_without_evaluating() {
    let model = Recorded::new(|x| x);
    let config = Config::default();

    for interval in [[1.0, 1.0], [2.0, 1.0], [f64::NAN, 1.0], [0.0, f64::INFINITY]] {
        let result = minimize_unobserved(&model, &ObjectiveOutput, interval, &config);
        assert!(matches!(result, Err(Error::InvalidInterval { .. })));
    }

    assert_eq!(model.count(), 0);
}

#[test]
fn rejects_invalid_configs() {
    assert_eq!(Config::new(0, 1e-5), Err(ConfigError::MaxEvals));
    assert_eq!(Config::new(10, -1e-5), Err(ConfigError::XAbs));
    assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::XAbs));
}

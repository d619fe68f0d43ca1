use thiserror::Error;

use skein_core::{MinimizationProblem, Model, Snapshot};

use super::Bounds;

/// One counted objective call: the clamped point, its value, and what the
/// model saw and returned there.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    /// The point actually evaluated, after clamping.
    pub x: [f64; N],

    pub objective: f64,

    pub snapshot: Snapshot<I, O>,

    /// Position of this call in the sequence, starting at 1.
    pub index: usize,
}

/// The step of an objective call that failed.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// Mapping `x` to a model input failed.
    #[error("mapping x to a model input failed")]
    Input(#[source] PE),

    #[error("model call failed")]
    Model(#[source] ME),

    /// Reducing the model output to a scalar failed.
    #[error("computing the objective failed")]
    Objective(#[source] PE),
}

/// Per-call objective adapter shared by every solver.
///
/// An `Objective` is created when a minimization starts and dropped when it
/// returns, so its evaluation counter is never shared between calls. Each
/// [`evaluate`](Self::evaluate) call:
///
/// 1. clamps `x` into the bounds, if any,
/// 2. increments the counter (exactly once, even if the call then fails),
/// 3. runs `input -> model -> objective`, stopping at the first failure,
/// 4. keeps the evaluation if it is the lowest seen so far.
pub struct Objective<'a, M, P, const N: usize>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    model: &'a M,
    problem: &'a P,
    bounds: Option<&'a Bounds<N>>,
    evals: usize,
    best: Option<Evaluation<M::Input, M::Output, N>>,
}

impl<'a, M, P, const N: usize> Objective<'a, M, P, N>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Creates an unbounded objective.
    pub fn new(model: &'a M, problem: &'a P) -> Self {
        Self {
            model,
            problem,
            bounds: None,
            evals: 0,
            best: None,
        }
    }

    /// Creates an objective that clamps every point into `bounds`.
    pub fn bounded(model: &'a M, problem: &'a P, bounds: &'a Bounds<N>) -> Self {
        Self {
            bounds: Some(bounds),
            ..Self::new(model, problem)
        }
    }

    /// Evaluates the objective at `x` (clamped into the bounds, if any).
    ///
    /// # Errors
    ///
    /// Returns the failing step with the model or problem error.
    pub fn evaluate(&mut self, x: [f64; N]) -> Result<f64, EvalError<M::Error, P::Error>> {
        let x = match self.bounds {
            Some(bounds) => bounds.clamp(&x),
            None => x,
        };

        self.evals += 1;

        let input = self.problem.input(&x).map_err(EvalError::Input)?;
        let output = self.model.call(&input).map_err(EvalError::Model)?;
        let value = self
            .problem
            .objective(&input, &output)
            .map_err(EvalError::Objective)?;

        let is_better = match &self.best {
            None => true,
            Some(best) => best.objective.is_nan() || value < best.objective,
        };
        if is_better {
            self.best = Some(Evaluation {
                x,
                objective: value,
                snapshot: Snapshot::new(input, output),
                index: self.evals,
            });
        }

        Ok(value)
    }

    /// Returns the number of evaluations issued so far.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals
    }

    /// Returns the bounds applied to every point, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<&'a Bounds<N>> {
        self.bounds
    }

    /// Returns the lowest evaluation seen so far.
    #[must_use]
    pub fn best(&self) -> Option<&Evaluation<M::Input, M::Output, N>> {
        self.best.as_ref()
    }

    /// Consumes the adapter, returning the lowest evaluation and the count.
    #[must_use]
    pub fn into_best(self) -> (Option<Evaluation<M::Input, M::Output, N>>, usize) {
        (self.best, self.evals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use thiserror::Error;

    use skein_core::Function;

    /// Counts its own calls so the adapter's counter can be checked.
    struct Counting {
        calls: Cell<usize>,
    }

    impl Model for Counting {
        type Input = [f64; 2];
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            Ok(x[0] + x[1])
        }
    }

    struct Identity;

    impl MinimizationProblem<2> for Identity {
        type Input = [f64; 2];
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
            Ok(*x)
        }

        fn objective(&self, _: &[f64; 2], output: &f64) -> Result<f64, Self::Error> {
            Ok(*output)
        }
    }

    #[test]
    fn counts_every_call_and_keeps_the_lowest() {
        let model = Counting {
            calls: Cell::new(0),
        };
        let mut objective = Objective::new(&model, &Identity);

        for x in [[1.0, 1.0], [-1.0, 0.0], [0.0, 0.0], [-1.0, 0.0]] {
            objective.evaluate(x).unwrap();
        }

        assert_eq!(objective.evals(), 4);
        assert_eq!(model.calls.get(), 4);

        let (best, evals) = objective.into_best();
        let best = best.unwrap();
        assert_eq!(evals, 4);
        assert_eq!(best.x, [-1.0, 0.0]);
        assert_relative_eq!(best.objective, -1.0);
    }

    #[test]
    fn clamps_into_bounds_before_calling() {
        let f = Function::new(|x: &[f64; 2]| x[0] * 10.0 + x[1]);
        let bounds = Bounds::new([0.0, 0.0], [1.0, 2.0]).unwrap();
        let mut objective = Objective::bounded(&f, &f, &bounds);

        let value = objective.evaluate([5.0, -3.0]).unwrap();

        assert_relative_eq!(value, 10.0);
        assert_eq!(objective.best().unwrap().x, [1.0, 0.0]);
    }

    #[test]
    fn nan_best_is_replaced() {
        let f = Function::new(|x: &[f64; 1]| if x[0] < 0.0 { f64::NAN } else { x[0] });
        let mut objective = Objective::new(&f, &f);

        objective.evaluate([-1.0]).unwrap();
        objective.evaluate([3.0]).unwrap();

        assert_relative_eq!(objective.best().unwrap().objective, 3.0);
    }

    #[derive(Debug, Error)]
    #[error("refused")]
    struct Refused;

    struct Refuses;

    impl Model for Refuses {
        type Input = [f64; 2];
        type Output = f64;
        type Error = Refused;

        fn call(&self, _: &[f64; 2]) -> Result<f64, Self::Error> {
            Err(Refused)
        }
    }

    #[test]
    fn failed_calls_are_counted_and_propagated() {
        let mut objective = Objective::new(&Refuses, &Identity);

        let result = objective.evaluate([0.0, 0.0]);

        assert!(matches!(result, Err(EvalError::Model(Refused))));
        assert_eq!(objective.evals(), 1);
        assert!(objective.best().is_none());
    }

    /// Rejects negative inputs and non-positive outputs at different steps.
    struct Picky;

    impl MinimizationProblem<2> for Picky {
        type Input = [f64; 2];
        type Output = f64;
        type Error = Refused;

        fn input(&self, x: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
            if x[0] < 0.0 { Err(Refused) } else { Ok(*x) }
        }

        fn objective(&self, _: &[f64; 2], output: &f64) -> Result<f64, Self::Error> {
            if *output > 0.0 { Ok(*output) } else { Err(Refused) }
        }
    }

    #[test]
    fn reports_which_step_failed() {
        let model = Counting {
            calls: Cell::new(0),
        };
        let mut objective = Objective::new(&model, &Picky);

        let result = objective.evaluate([-1.0, 5.0]);
        assert!(matches!(result, Err(EvalError::Input(Refused))));
        assert_eq!(model.calls.get(), 0);

        let result = objective.evaluate([0.0, 0.0]);
        assert!(matches!(result, Err(EvalError::Objective(Refused))));
        assert_eq!(model.calls.get(), 1);

        assert_eq!(objective.evals(), 2);
        assert!(objective.best().is_none());
    }

    #[test]
    fn best_records_its_call_index_and_snapshot() {
        let model = Counting {
            calls: Cell::new(0),
        };
        let mut objective = Objective::new(&model, &Identity);

        for x in [[3.0, 0.0], [1.0, 0.5], [2.0, 2.0]] {
            objective.evaluate(x).unwrap();
        }

        let best = objective.best().unwrap();
        assert_eq!(best.index, 2);
        assert_eq!(best.snapshot.input, [1.0, 0.5]);
        assert_relative_eq!(best.snapshot.output, 1.5);
    }
}

use std::convert::Infallible;

use crate::{MinimizationProblem, Model};

/// A plain objective function acting as both model and problem.
///
/// Most callers only have a closure `f(x) -> f64`. `Function` wraps it so the
/// same value can be handed to a solver as the model (input `[f64; N]`,
/// output `f64`) and as the problem (identity input, output as objective):
///
/// ```
/// use skein_core::{Function, MinimizationProblem, Model};
///
/// let f = Function::new(|x: &[f64; 2]| x[0] * x[0] + x[1] * x[1]);
///
/// let input = f.input(&[3.0, 4.0]).unwrap();
/// let output = f.call(&input).unwrap();
/// assert_eq!(f.objective(&input, &output).unwrap(), 25.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Function<F, const N: usize> {
    f: F,
}

impl<F, const N: usize> Function<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    /// Wraps a closure as an objective function.
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, const N: usize> Model for Function<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &[f64; N]) -> Result<f64, Self::Error> {
        Ok((self.f)(input))
    }
}

impl<F, const N: usize> MinimizationProblem<N> for Function<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; N], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

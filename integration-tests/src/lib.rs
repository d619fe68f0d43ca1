//! Shared objectives for the cross-crate tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use skein_core::Model;

/// The N-dimensional Rosenbrock function, minimized at all ones.
#[must_use]
pub fn rosenbrock<const N: usize>(x: &[f64; N]) -> f64 {
    x.windows(2)
        .map(|pair| 100.0 * (pair[1] - pair[0] * pair[0]).powi(2) + (1.0 - pair[0]).powi(2))
        .sum()
}

/// Wraps a model and counts its calls.
///
/// The counter is atomic so a counted model can be shared across threads.
#[derive(Debug)]
pub struct Counting<M> {
    model: M,
    calls: AtomicUsize,
}

impl<M> Counting<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns the number of calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<M: Model> Model for Counting<M> {
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.model.call(input)
    }
}

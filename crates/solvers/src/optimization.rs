//! Solvers for minimization problems.
//!
//! A [`MinimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes that objective without using
//! derivatives.
//!
//! # Solvers
//!
//! - [`bracket`]: expands two starting points into a triple that straddles a
//!   local minimum
//! - [`brent`]: Brent's method on a bracket (found automatically or supplied)
//! - [`bounded`]: Brent's method on a fixed closed interval, endpoints included
//! - [`powell`]: Powell's direction-set method in `N` dimensions, optionally
//!   inside box bounds
//!
//! Every solver evaluates the objective through an [`Objective`], which counts
//! calls, clamps points into [`Bounds`] when given, and remembers the lowest
//! evaluation. Reported solutions always come from that lowest evaluation.
//!
//! [`MinimizationProblem`]: skein_core::MinimizationProblem

mod bounds;
mod objective;
mod point;
mod scalar;
mod vector;

pub use bounds::{Bounds, BoundsError};
pub use objective::{EvalError, Evaluation, Objective};
pub use point::Point;

pub mod bounded;
pub mod bracket;
pub mod brent;
pub mod powell;

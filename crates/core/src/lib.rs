//! Core traits and types for skein.
//!
//! This crate defines the shared abstractions the minimizers in
//! `skein-solvers` build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`MinimizationProblem`]: adapts solver variables to model inputs and
//!   extracts the objective from outputs
//! - [`Function`]: a plain closure acting as both model and problem

mod function;
mod model;
mod observer;
mod problems;

pub use function::Function;
pub use observer::Observer;
pub use problems::MinimizationProblem;
pub use {model::Model, model::Snapshot};

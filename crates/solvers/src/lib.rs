//! Derivative-free minimizers for the skein framework.
//!
//! All solvers live in [`optimization`]: a bracket finder, Brent's method
//! (unbounded and bounded), and Powell's direction-set method.

pub mod optimization;

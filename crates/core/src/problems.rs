pub mod optimization;

pub use optimization::MinimizationProblem;

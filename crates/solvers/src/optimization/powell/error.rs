use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::EvalError;

/// Errors that can occur during Powell's method.
#[derive(Debug, Error)]
pub enum Error {
    #[error("problem has zero dimensions")]
    ZeroDimension,

    #[error("start coordinate {index} is not finite: {value}")]
    NonFiniteStart { index: usize, value: f64 },

    #[error("start coordinate {index} = {value} lies outside [{lower}, {upper}]")]
    StartOutsideBounds {
        index: usize,
        value: f64,
        lower: f64,
        upper: f64,
    },

    #[error("no successful evaluations")]
    NoSuccessfulEvaluation,

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Input(e) | EvalError::Objective(e) => Self::Problem(Box::new(e)),
        }
    }
}

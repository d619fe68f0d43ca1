use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::EvalError;

/// Errors that can occur while searching for a bracket.
#[derive(Debug, Error)]
pub enum Error {
    #[error("starting points must be finite and distinct, got {x0} and {x1}")]
    InvalidStart { x0: f64, x1: f64 },

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

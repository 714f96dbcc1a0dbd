use thiserror::Error;

use super::{bracket::BracketError, config::ConfigError};

/// Errors that can occur during bisection solving.
///
/// `E` is the error type of the function being solved. Its errors are
/// returned unmodified through [`Error::Evaluation`].
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("function returned NaN at x = {x}")]
    NotANumber { x: f64 },

    #[error(transparent)]
    Evaluation(E),
}

impl<E> Error<E> {
    /// Returns the function's own error, if evaluation is what failed.
    pub fn into_evaluation(self) -> Option<E> {
        match self {
            Error::Evaluation(err) => Some(err),
            _ => None,
        }
    }
}

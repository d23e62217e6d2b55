use crate::expr::{EvalError, LexError};

use thiserror::Error;

/// Any failure of [`evaluate_expression`](crate::evaluate_expression),
/// from either stage.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  Lex(#[from] LexError),
  #[error("{0}")]
  Eval(#[from] EvalError),
}

//! Evaluates a token sequence to a single number.
//!
//! Evaluation is a thin [`ShuntingYardDriver`] over `f64`: scalars
//! compile to themselves, and each infix operator is applied as soon
//! as the algorithm reduces it, so no intermediate tree or postfix
//! queue is ever built.

use super::operator::BinaryOp;
use super::token::Token;
use crate::parsing::shunting_yard::{self, ShuntingYardDriver, ShuntingYardError};

use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
  #[error("Empty expression")]
  EmptyExpression,
  #[error("Unbalanced parentheses")]
  UnbalancedParens,
  #[error("Malformed expression")]
  MalformedExpression,
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Math domain error")]
  MathDomain,
}

/// Shunting yard driver which computes values directly.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ArithmeticDriver {}

impl ArithmeticDriver {
  pub fn new() -> Self {
    Self {}
  }
}

impl ShuntingYardDriver<f64, BinaryOp> for ArithmeticDriver {
  type Output = f64;
  type Error = EvalError;

  /// A literal too long to fit in an `f64` accumulates to infinity.
  fn compile_scalar(&mut self, scalar: f64) -> Result<f64, EvalError> {
    if scalar.is_finite() {
      Ok(scalar)
    } else {
      Err(EvalError::MathDomain)
    }
  }

  fn compile_infix_op(&mut self, left: f64, op: &BinaryOp, right: f64) -> Result<f64, EvalError> {
    let result = op.apply(left, right)?;
    trace!(%left, %op, %right, %result, "applied operator");
    Ok(result)
  }
}

impl From<ShuntingYardError<EvalError>> for EvalError {
  fn from(err: ShuntingYardError<EvalError>) -> Self {
    match err {
      ShuntingYardError::CustomError(e) => e,
      ShuntingYardError::UnmatchedLeftParen(_) | ShuntingYardError::UnmatchedRightParen(_) =>
        EvalError::UnbalancedParens,
      ShuntingYardError::UnexpectedEOF |
        ShuntingYardError::MissingOperand(_) |
        ShuntingYardError::ExtraOperand(_) =>
        EvalError::MalformedExpression,
    }
  }
}

/// Evaluates a borrowed token sequence.
pub fn evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
  evaluate_tokens(tokens.iter().cloned())
}

/// Evaluates any sequence of tokens, consuming it.
pub fn evaluate_tokens<I>(tokens: I) -> Result<f64, EvalError>
where I: IntoIterator<Item = Token> {
  let mut tokens = tokens.into_iter().peekable();
  if tokens.peek().is_none() {
    return Err(EvalError::EmptyExpression);
  }
  let mut driver = ArithmeticDriver::new();
  let result = shunting_yard::parse(&mut driver, tokens.map(shunting_yard::Token::<f64, BinaryOp>::from));
  match result {
    Ok(value) => {
      debug!(%value, "evaluated expression");
      Ok(value)
    }
    Err(err) => {
      debug!(error = %err, "evaluation failed");
      Err(err.into())
    }
  }
}

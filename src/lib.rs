//! A small embeddable evaluator for arithmetic expressions over
//! `f64`, supporting `+ - * / ^ %` and parentheses.
//!
//! Evaluation runs in two stages: [`tokenize`] turns text into
//! [`Token`]s, and [`evaluate`] runs the shunting yard algorithm over
//! them. [`evaluate_expression`] does both.

pub mod error;
pub mod expr;
pub mod parsing;

pub use error::Error;
pub use expr::{evaluate, tokenize, EvalError, LexError, Token, TokenData};

/// Tokenizes and evaluates `text`.
pub fn evaluate_expression(text: &str) -> Result<f64, Error> {
  let tokens = tokenize(text)?;
  let value = evaluate(&tokens)?;
  Ok(value)
}

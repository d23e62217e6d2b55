//! A generic implementation of Dijkstra's shunting yard algorithm
//! for infix operators and parenthesized groups.
//!
//! The algorithm itself knows nothing about what the scalars and
//! operators mean. A [`ShuntingYardDriver`] decides how to compile a
//! scalar and how to reduce an infix application, so the same engine
//! can build a syntax tree or compute a value directly.

use super::operator::InfixOperator;
use super::source::Span;

use thiserror::Error;
use tracing::trace;

use std::error::{Error as StdError};
use std::fmt::{self, Display, Formatter};

/// A token, for the purposes of the shunting yard algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<T, O> {
  data: TokenData<T, O>,
  span: Span,
}

/// Internal type which tracks an output value together with the span
/// of source that produced it. Used to produce better error messages.
#[derive(Debug, Clone)]
struct OutputWithSpan<U> {
  output: U,
  span: Span,
}

/// An entry on the operator stack.
#[derive(Clone, Debug)]
enum OpStackValue<O> {
  Operator(O, Span),
  /// Barrier marker for an open parenthesis.
  LeftParen(Span),
}

/// The contents of a token.
#[derive(Debug, Clone, PartialEq)]
enum TokenData<T, O> {
  /// A value in the target language.
  Scalar(T),
  /// An infix, binary operator.
  InfixOperator(O),
  LeftParen,
  RightParen,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ShuntingYardError<E: StdError> {
  #[error("{0}")]
  CustomError(E),
  #[error("unexpected end of input")]
  UnexpectedEOF,
  #[error("missing operand for operator at {0}")]
  MissingOperand(Span),
  #[error("unexpected operand at {0}")]
  ExtraOperand(Span),
  #[error("unmatched '(' at {0}")]
  UnmatchedLeftParen(Span),
  #[error("unmatched ')' at {0}")]
  UnmatchedRightParen(Span),
}

/// A type implementing this trait is capable of driving the shunting
/// yard algorithm and compiling tokens to a given target language.
pub trait ShuntingYardDriver<T, O> {
  type Output;
  type Error: StdError;

  fn compile_scalar(&mut self, scalar: T) -> Result<Self::Output, Self::Error>;
  fn compile_infix_op(
    &mut self,
    left: Self::Output,
    infix: &O,
    right: Self::Output,
  ) -> Result<Self::Output, Self::Error>;
}

impl<T, O> Token<T, O> {
  pub fn scalar(data: T, span: Span) -> Self {
    Self { data: TokenData::Scalar(data), span }
  }

  pub fn infix_operator(op: O, span: Span) -> Self {
    Self { data: TokenData::InfixOperator(op), span }
  }

  pub fn left_paren(span: Span) -> Self {
    Self { data: TokenData::LeftParen, span }
  }

  pub fn right_paren(span: Span) -> Self {
    Self { data: TokenData::RightParen, span }
  }

  pub fn span(&self) -> Span {
    self.span
  }
}

impl<T: Display, O: Display> Display for TokenData<T, O> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
    match self {
      TokenData::Scalar(s) => s.fmt(f),
      TokenData::InfixOperator(op) => op.fmt(f),
      TokenData::LeftParen => write!(f, "("),
      TokenData::RightParen => write!(f, ")"),
    }
  }
}

impl<T: Display, O: Display> Display for Token<T, O> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
    write!(f, "{}", self.data)
  }
}

impl<E: StdError> From<E> for ShuntingYardError<E> {
  fn from(e: E) -> Self {
    Self::CustomError(e)
  }
}

impl<O> OpStackValue<O> {
  fn span(&self) -> Span {
    match self {
      OpStackValue::Operator(_, span) => *span,
      OpStackValue::LeftParen(span) => *span,
    }
  }
}

/// Runs the shunting yard algorithm over `input`, reducing each
/// operator with `driver` as soon as its operands are known.
pub fn parse<T, O, D, I>(
  driver: &mut D,
  input: I,
) -> Result<D::Output, ShuntingYardError<D::Error>>
where O: InfixOperator,
      D: ShuntingYardDriver<T, O>,
      I: IntoIterator<Item = Token<T, O>> {
  let mut operator_stack: Vec<OpStackValue<O>> = Vec::new();
  let mut output_stack: Vec<OutputWithSpan<D::Output>> = Vec::new();
  for token in input {
    match token.data {
      TokenData::Scalar(t) => {
        let output = driver.compile_scalar(t)?;
        output_stack.push(OutputWithSpan { output, span: token.span });
      }
      TokenData::InfixOperator(op) => {
        // Pop operators until we hit one which binds more loosely, or
        // a parenthesis barrier.
        let incoming = op.infix_properties();
        while let Some(stack_value) = operator_stack.pop() {
          let should_reduce = matches!(
            &stack_value,
            OpStackValue::Operator(top, _) if top.infix_properties().reduces_before(&incoming),
          );
          if should_reduce {
            simplify_operator::<T, O, D>(driver, &mut output_stack, stack_value)?;
          } else {
            operator_stack.push(stack_value);
            break;
          }
        }
        operator_stack.push(OpStackValue::Operator(op, token.span));
      }
      TokenData::LeftParen => {
        operator_stack.push(OpStackValue::LeftParen(token.span));
      }
      TokenData::RightParen => {
        loop {
          match operator_stack.pop() {
            None => {
              return Err(ShuntingYardError::UnmatchedRightParen(token.span));
            }
            Some(OpStackValue::LeftParen(_)) => {
              break;
            }
            Some(stack_value) => {
              simplify_operator::<T, O, D>(driver, &mut output_stack, stack_value)?;
            }
          }
        }
      }
    }
  }

  // Pop and resolve remaining operators.
  while let Some(stack_value) = operator_stack.pop() {
    if let OpStackValue::LeftParen(span) = stack_value {
      return Err(ShuntingYardError::UnmatchedLeftParen(span));
    }
    simplify_operator::<T, O, D>(driver, &mut output_stack, stack_value)?;
  }

  let final_result = output_stack.pop().ok_or(ShuntingYardError::UnexpectedEOF)?;
  if let Some(remaining_value) = output_stack.pop() {
    return Err(ShuntingYardError::ExtraOperand(remaining_value.span));
  }
  Ok(final_result.output)
}

fn simplify_operator<T, O, D>(
  driver: &mut D,
  output_stack: &mut Vec<OutputWithSpan<D::Output>>,
  stack_value: OpStackValue<O>,
) -> Result<(), ShuntingYardError<D::Error>>
where D: ShuntingYardDriver<T, O> {
  let op_span = stack_value.span();
  let OpStackValue::Operator(operator, _) = stack_value else {
    // Parenthesis markers are only ever discarded, never reduced.
    return Err(ShuntingYardError::UnmatchedLeftParen(op_span));
  };
  let (arg1, arg2) = output_stack.pop()
    .and_then(|arg2| output_stack.pop().map(|arg1| (arg1, arg2)))
    .ok_or(ShuntingYardError::MissingOperand(op_span))?;
  trace!(operator_span = %op_span, "reducing infix operator");
  let span = arg1.span.merge(arg2.span);
  let output = driver.compile_infix_op(arg1.output, &operator, arg2.output)?;
  output_stack.push(OutputWithSpan { output, span });
  Ok(())
}

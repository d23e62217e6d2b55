use super::operator::BinaryOp;
use crate::parsing::source::Span;
use crate::parsing::shunting_yard;

use std::fmt::{self, Display, Formatter};

/// A classified lexical unit, together with the region of input it
/// was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
  pub data: TokenData,
  pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenData {
  Number(f64),
  Operator(BinaryOp),
  LeftParen,
  RightParen,
}

impl Token {
  pub fn new(data: TokenData, span: Span) -> Self {
    Self { data, span }
  }

  pub fn number(&self) -> Option<f64> {
    match self.data {
      TokenData::Number(n) => Some(n),
      _ => None,
    }
  }
}

impl From<Token> for shunting_yard::Token<f64, BinaryOp> {
  fn from(token: Token) -> Self {
    match token.data {
      TokenData::Number(n) => shunting_yard::Token::scalar(n, token.span),
      TokenData::Operator(op) => shunting_yard::Token::infix_operator(op, token.span),
      TokenData::LeftParen => shunting_yard::Token::left_paren(token.span),
      TokenData::RightParen => shunting_yard::Token::right_paren(token.span),
    }
  }
}

impl Display for TokenData {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Number(n) => write!(f, "{n}"),
      TokenData::Operator(op) => write!(f, "{op}"),
      TokenData::LeftParen => write!(f, "("),
      TokenData::RightParen => write!(f, ")"),
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.data.fmt(f)
  }
}

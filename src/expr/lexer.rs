//! Converts raw expression text into a sequence of [`Token`]s.

use super::operator::BinaryOp;
use super::token::{Token, TokenData};
use crate::parsing::source::SourceOffset;
use crate::parsing::tokenizer::TokenizerState;

use regex::Regex;
use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LexError {
  /// A character which cannot begin any token. The offset counts
  /// bytes, but every character before it is ASCII, so it is also
  /// the character index.
  #[error("Invalid character in expression: '{0}' at {1}")]
  InvalidCharacter(char, SourceOffset),
}

/// Tokenizes the whole of `text`. Either every character is accounted
/// for, or no tokens are returned at all.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
  let mut state = TokenizerState::new(text);
  let tokens = read_tokens(&mut state)?;
  debug!(token_count = tokens.len(), "tokenized expression");
  Ok(tokens)
}

pub fn read_tokens(state: &mut TokenizerState<'_>) -> Result<Vec<Token>, LexError> {
  let mut tokens = Vec::new();
  loop {
    state.consume_spaces();
    match read_one_token(state)? {
      Some(token) => {
        trace!(token = %token, span = %token.span, "read token");
        tokens.push(token);
      }
      None => {
        return Ok(tokens);
      }
    }
  }
}

/// Reads a single token. Returns `Ok(None)` at end of input.
pub fn read_one_token(state: &mut TokenizerState<'_>) -> Result<Option<Token>, LexError> {
  if let Some(tok) = read_char_token(state) {
    Ok(Some(tok))
  } else if let Some(tok) = read_number_literal(state) {
    Ok(Some(tok))
  } else {
    match state.peek() {
      None => Ok(None),
      Some(ch) => Err(LexError::InvalidCharacter(ch, state.current_pos())),
    }
  }
}

#[allow(clippy::manual_map)] // Cleaner in an if-else chain
fn read_char_token(state: &mut TokenizerState<'_>) -> Option<Token> {
  if let Some(m) = state.read_literal("(") {
    Some(Token::new(TokenData::LeftParen, m.span()))
  } else if let Some(m) = state.read_literal(")") {
    Some(Token::new(TokenData::RightParen, m.span()))
  } else if let Some(op) = state.peek().and_then(BinaryOp::from_symbol) {
    let m = state.advance(op.symbol().len_utf8());
    Some(Token::new(TokenData::Operator(op), m.span()))
  } else {
    None
  }
}

/// A maximal run of digits containing at most one decimal point. A
/// second point ends the run and is read as the start of the next
/// literal.
fn read_number_literal(state: &mut TokenizerState<'_>) -> Option<Token> {
  static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*\.?[0-9]*").unwrap());
  let m = state.read_regex(&RE)?;
  Some(Token::new(TokenData::Number(accumulate_decimal(m.as_str())), m.span()))
}

/// Builds the value digit by digit: the integer part by shifting left
/// one decimal place per digit, and the fractional part by adding
/// each digit at a place value that shrinks tenfold each step.
fn accumulate_decimal(literal: &str) -> f64 {
  let mut value = 0.0;
  let mut place = 0.1;
  let mut seen_point = false;
  for ch in literal.chars() {
    if ch == '.' {
      seen_point = true;
    } else if let Some(digit) = ch.to_digit(10) {
      if seen_point {
        value += f64::from(digit) * place;
        place *= 0.1;
      } else {
        value = value * 10.0 + f64::from(digit);
      }
    }
  }
  value
}

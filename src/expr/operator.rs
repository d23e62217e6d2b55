//! The binary arithmetic operators understood by the evaluator.

use super::evaluator::EvalError;
use crate::parsing::operator::{Associativity, InfixOperator, InfixProperties, Precedence};

use std::fmt::{self, Display, Formatter};

/// One of the six supported infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
  Plus,
  Minus,
  Times,
  Divide,
  Power,
  Modulo,
}

impl BinaryOp {
  pub const ALL: [BinaryOp; 6] = [
    BinaryOp::Plus,
    BinaryOp::Minus,
    BinaryOp::Times,
    BinaryOp::Divide,
    BinaryOp::Power,
    BinaryOp::Modulo,
  ];

  pub fn from_symbol(ch: char) -> Option<BinaryOp> {
    match ch {
      '+' => Some(BinaryOp::Plus),
      '-' => Some(BinaryOp::Minus),
      '*' => Some(BinaryOp::Times),
      '/' => Some(BinaryOp::Divide),
      '^' => Some(BinaryOp::Power),
      '%' => Some(BinaryOp::Modulo),
      _ => None,
    }
  }

  pub fn symbol(self) -> char {
    match self {
      BinaryOp::Plus => '+',
      BinaryOp::Minus => '-',
      BinaryOp::Times => '*',
      BinaryOp::Divide => '/',
      BinaryOp::Power => '^',
      BinaryOp::Modulo => '%',
    }
  }

  pub fn precedence(self) -> Precedence {
    match self {
      BinaryOp::Plus | BinaryOp::Minus => Precedence::new(1),
      BinaryOp::Times | BinaryOp::Divide | BinaryOp::Modulo => Precedence::new(2),
      BinaryOp::Power => Precedence::new(3),
    }
  }

  pub fn associativity(self) -> Associativity {
    match self {
      BinaryOp::Power => Associativity::RIGHT,
      _ => Associativity::LEFT,
    }
  }

  /// Computes `left OP right`. Only finite results are returned; a
  /// NaN or infinite result is a [`EvalError::MathDomain`].
  pub fn apply(self, left: f64, right: f64) -> Result<f64, EvalError> {
    let result = match self {
      BinaryOp::Plus => left + right,
      BinaryOp::Minus => left - right,
      BinaryOp::Times => left * right,
      BinaryOp::Divide => {
        if right == 0.0 {
          return Err(EvalError::DivisionByZero);
        }
        left / right
      }
      BinaryOp::Modulo => {
        if right == 0.0 {
          return Err(EvalError::DivisionByZero);
        }
        // Rust's `%` on floats truncates, so the result takes the sign
        // of the dividend.
        left % right
      }
      // A negative base with a non-integer exponent gives NaN, and a
      // zero base with a negative exponent gives infinity.
      BinaryOp::Power => left.powf(right),
    };
    if result.is_finite() {
      Ok(result)
    } else {
      Err(EvalError::MathDomain)
    }
  }
}

impl InfixOperator for BinaryOp {
  fn infix_properties(&self) -> InfixProperties {
    InfixProperties::new(self.associativity(), self.precedence())
  }
}

impl Display for BinaryOp {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_symbol_roundtrip() {
    for op in BinaryOp::ALL {
      assert_eq!(BinaryOp::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(BinaryOp::from_symbol('('), None);
    assert_eq!(BinaryOp::from_symbol('x'), None);
  }

  #[test]
  fn test_precedence_table() {
    assert!(BinaryOp::Power.precedence() > BinaryOp::Times.precedence());
    assert_eq!(BinaryOp::Times.precedence(), BinaryOp::Divide.precedence());
    assert_eq!(BinaryOp::Times.precedence(), BinaryOp::Modulo.precedence());
    assert!(BinaryOp::Modulo.precedence() > BinaryOp::Plus.precedence());
    assert_eq!(BinaryOp::Plus.precedence(), BinaryOp::Minus.precedence());
  }

  #[test]
  fn test_associativity() {
    assert!(BinaryOp::Power.associativity().is_right_assoc());
    assert!(!BinaryOp::Power.associativity().is_left_assoc());
    for op in [BinaryOp::Plus, BinaryOp::Minus, BinaryOp::Times, BinaryOp::Divide, BinaryOp::Modulo] {
      assert!(op.associativity().is_left_assoc());
    }
  }

  #[test]
  fn test_basic_arithmetic() {
    assert_eq!(BinaryOp::Plus.apply(2.0, 3.0), Ok(5.0));
    assert_eq!(BinaryOp::Minus.apply(2.0, 3.0), Ok(-1.0));
    assert_eq!(BinaryOp::Times.apply(2.0, 3.0), Ok(6.0));
    assert_eq!(BinaryOp::Divide.apply(3.0, 2.0), Ok(1.5));
  }

  #[test]
  fn test_division_by_zero() {
    assert_eq!(BinaryOp::Divide.apply(5.0, 0.0), Err(EvalError::DivisionByZero));
    assert_eq!(BinaryOp::Divide.apply(5.0, -0.0), Err(EvalError::DivisionByZero));
    assert_eq!(BinaryOp::Modulo.apply(5.0, 0.0), Err(EvalError::DivisionByZero));
  }

  #[test]
  fn test_modulo() {
    assert_eq!(BinaryOp::Modulo.apply(7.0, 3.0), Ok(1.0));
    assert_eq!(BinaryOp::Modulo.apply(-7.0, 3.0), Ok(-1.0));
    assert_abs_diff_eq!(BinaryOp::Modulo.apply(5.5, 2.0).unwrap(), 1.5);
  }

  #[test]
  fn test_power() {
    assert_eq!(BinaryOp::Power.apply(2.0, 10.0), Ok(1024.0));
    assert_abs_diff_eq!(BinaryOp::Power.apply(9.0, 0.5).unwrap(), 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(BinaryOp::Power.apply(2.0, -2.0).unwrap(), 0.25);
    assert_eq!(BinaryOp::Power.apply(-2.0, 3.0), Ok(-8.0));
    assert_eq!(BinaryOp::Power.apply(0.0, 0.0), Ok(1.0));
  }

  #[test]
  fn test_power_domain_errors() {
    assert_eq!(BinaryOp::Power.apply(-8.0, 0.5), Err(EvalError::MathDomain));
    assert_eq!(BinaryOp::Power.apply(0.0, -1.0), Err(EvalError::MathDomain));
  }

  #[test]
  fn test_overflow_is_domain_error() {
    assert_eq!(BinaryOp::Power.apply(10.0, 400.0), Err(EvalError::MathDomain));
    assert_eq!(BinaryOp::Times.apply(f64::MAX, 2.0), Err(EvalError::MathDomain));
    assert_eq!(BinaryOp::Plus.apply(f64::MAX, f64::MAX), Err(EvalError::MathDomain));
    assert_eq!(BinaryOp::Divide.apply(f64::MAX, 0.5), Err(EvalError::MathDomain));
  }

  #[test]
  fn test_non_finite_operands_are_domain_errors() {
    let inf = f64::INFINITY;
    assert_eq!(BinaryOp::Minus.apply(inf, inf), Err(EvalError::MathDomain));
    assert_eq!(BinaryOp::Times.apply(inf, 0.0), Err(EvalError::MathDomain));
    assert_eq!(BinaryOp::Modulo.apply(inf, 2.0), Err(EvalError::MathDomain));
    assert_eq!(BinaryOp::Divide.apply(inf, inf), Err(EvalError::MathDomain));
    assert_eq!(BinaryOp::Plus.apply(f64::NAN, 1.0), Err(EvalError::MathDomain));
  }
}

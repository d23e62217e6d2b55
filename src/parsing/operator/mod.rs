//! Precedence and associativity metadata for infix operators.

mod precedence;
mod associativity;

pub use precedence::Precedence;
pub use associativity::Associativity;

/// An infix operator has both an associativity and a precedence.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash)]
pub struct InfixProperties {
  assoc: Associativity,
  prec: Precedence,
}

/// A type which can appear in operator position in the [shunting
/// yard algorithm](crate::parsing::shunting_yard).
pub trait InfixOperator {
  fn infix_properties(&self) -> InfixProperties;
}

impl InfixProperties {
  pub const fn new(assoc: Associativity, prec: Precedence) -> Self {
    Self { assoc, prec }
  }

  /// Whether an operator `self` already sitting on the operator
  /// stack should be reduced before `incoming` is pushed.
  pub fn reduces_before(&self, incoming: &InfixProperties) -> bool {
    self.prec > incoming.prec ||
      (self.prec == incoming.prec && incoming.assoc.is_left_assoc())
  }
}

impl InfixOperator for InfixProperties {
  fn infix_properties(&self) -> InfixProperties {
    *self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reduces_before() {
    let plus = InfixProperties::new(Associativity::LEFT, Precedence::new(1));
    let times = InfixProperties::new(Associativity::LEFT, Precedence::new(2));
    let pow = InfixProperties::new(Associativity::RIGHT, Precedence::new(3));
    assert!(times.reduces_before(&plus));
    assert!(!plus.reduces_before(&times));
    assert!(plus.reduces_before(&plus));
    assert!(!pow.reduces_before(&pow));
    assert!(pow.reduces_before(&times));
  }
}

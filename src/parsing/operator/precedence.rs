
/// The precedence of an infix operator. Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u64);

impl Precedence {
  /// Internally, we store an operator's precedence as ten times the
  /// input value, so that new levels can be slotted in between
  /// existing ones.
  pub const fn new(n: u64) -> Precedence {
    Precedence(n * 10)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ordering() {
    assert!(Precedence::new(3) > Precedence::new(2));
    assert!(Precedence::new(1) < Precedence::new(2));
  }
}


use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign};

/// Thin wrapper around `usize` that represents a byte position in a
/// parsed string. Usually used for error reporting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceOffset(pub usize);

/// A span of source offsets. Spans should be considered half-open
/// intervals, with `start` being included and `end` being excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
  pub start: SourceOffset,
  pub end: SourceOffset,
}

impl Span {
  pub fn new(start: SourceOffset, end: SourceOffset) -> Self {
    Self { start, end }
  }

  /// The smallest span containing both `self` and `other`.
  pub fn merge(self, other: Span) -> Span {
    Span::new(self.start.min(other.start), self.end.max(other.end))
  }
}

impl From<usize> for SourceOffset {
  fn from(i: usize) -> Self {
    SourceOffset(i)
  }
}

impl From<SourceOffset> for usize {
  fn from(i: SourceOffset) -> Self {
    i.0
  }
}

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Add<usize> for SourceOffset {
  type Output = Self;

  fn add(self, rhs: usize) -> Self::Output {
    Self(self.0 + rhs)
  }
}

impl AddAssign<usize> for SourceOffset {
  fn add_assign(&mut self, rhs: usize) {
    self.0 += rhs
  }
}

impl Display for Span {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.start, self.end)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn span(start: usize, end: usize) -> Span {
    Span::new(SourceOffset(start), SourceOffset(end))
  }

  #[test]
  fn test_merge() {
    assert_eq!(span(0, 2).merge(span(5, 7)), span(0, 7));
    assert_eq!(span(5, 7).merge(span(0, 2)), span(0, 7));
    assert_eq!(span(1, 9).merge(span(3, 4)), span(1, 9));
  }

  #[test]
  fn test_display() {
    assert_eq!(SourceOffset(12).to_string(), "12");
    assert_eq!(span(3, 8).to_string(), "3-8");
  }

  #[test]
  fn test_offset_arithmetic() {
    let mut offset = SourceOffset(2) + 3;
    assert_eq!(offset, SourceOffset(5));
    offset += 4;
    assert_eq!(usize::from(offset), 9);
  }
}

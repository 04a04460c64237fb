use serde::{Deserialize, Serialize};

use crate::nillable::Nillable;
use crate::Optional;

/// Two values, as produced by [zip](Optional::zip) and consumed by [unzip](Optional::unzip).
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub struct Pair<X, Y> {
  pub first: X,
  pub second: Y,
}

impl<X, Y> Pair<X, Y> {
  #[inline]
  pub const fn new(first: X, second: Y) -> Self {
    Self { first, second }
  }

  #[inline]
  pub fn into_tuple(self) -> (X, Y) {
    (self.first, self.second)
  }
}

impl<X, Y> From<(X, Y)> for Pair<X, Y> {
  #[inline]
  fn from((first, second): (X, Y)) -> Self {
    Self::new(first, second)
  }
}


impl<X> Optional<X> {
  /// Returns a pair of both values if both `self` and `other` are present, otherwise an empty optional.
  #[inline]
  pub fn zip<Y>(self, other: Optional<Y>) -> Optional<Pair<X, Y>> {
    match (self.into_option(), other.into_option()) {
      (Some(first), Some(second)) => Optional::of(Pair::new(first, second)),
      _ => Optional::empty(),
    }
  }

  /// Combines both values with `mapper` if both `self` and `other` are present, otherwise returns an empty optional
  /// without calling `mapper`.
  #[inline]
  pub fn zip_with<Y, Z>(self, other: Optional<Y>, mapper: impl FnOnce(X, Y) -> Z) -> Optional<Z> {
    self.zip(other).map(|Pair { first, second }| mapper(first, second))
  }

  /// Like [zip_with](Self::zip_with), but returns an empty optional if the combined value is nil.
  #[inline]
  pub fn zip_with_nillable<Y, Z: Nillable>(self, other: Optional<Y>, mapper: impl FnOnce(X, Y) -> Z) -> Optional<Z> {
    self.zip_with(other, mapper).non_nil()
  }
}

impl<X, Y> Optional<Pair<Optional<X>, Optional<Y>>> {
  /// Splits a pair of optionals. Each half is returned as is, so either may be empty even when `self` is present.
  /// Returns two empty optionals if `self` is empty.
  #[inline]
  pub fn unzip(self) -> (Optional<X>, Optional<Y>) {
    self.into_option()
      .map(Pair::into_tuple)
      .unwrap_or_default()
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zip_some_empty() {
    assert!(Optional::<i32>::empty().zip(Optional::<String>::empty()).is_empty());
    assert!(Optional::of(123).zip(Optional::<String>::empty()).is_empty());
    assert!(Optional::<i32>::empty().zip(Optional::of("gm")).is_empty());
  }

  #[test]
  fn zip_both_present() {
    let pair = Optional::of(123).zip(Optional::of("gm")).unwrap();
    assert_eq!(pair.first, 123);
    assert_eq!(pair.second, "gm");
  }

  #[test]
  fn unzip_empty() {
    let (first, second) = Optional::<Pair<Optional<i32>, Optional<String>>>::empty().unzip();
    assert!(first.is_empty());
    assert!(second.is_empty());
  }

  #[test]
  fn unzip_keeps_halves() {
    let cases = [
      (Optional::of(123), Optional::of("gm")),
      (Optional::empty(), Optional::of("gm")),
      (Optional::of(123), Optional::empty()),
      (Optional::empty(), Optional::empty()),
    ];
    for (first, second) in cases {
      let (o1, o2) = Optional::of(Pair::new(first, second)).unzip();
      assert_eq!(o1, first);
      assert_eq!(o2, second);
    }
  }

  #[test]
  fn zip_with_some_empty() {
    let mapper = |_: &str, _: i32| -> String { panic!("mapper called with an empty input") };
    assert!(Optional::<&str>::empty().zip_with(Optional::<i32>::empty(), mapper).is_empty());
    assert!(Optional::of("gm").zip_with(Optional::<i32>::empty(), mapper).is_empty());
    assert!(Optional::<&str>::empty().zip_with(Optional::of(123), mapper).is_empty());
  }

  #[test]
  fn zip_with_both_present() {
    let opt = Optional::of("gm").zip_with(Optional::of(vec![1, 2, 3, 4]), |x, y| format!("{x}{y:?}"));
    assert_eq!(opt.unwrap(), "gm[1, 2, 3, 4]");
  }

  #[test]
  fn zip_with_nillable_collapses_nil_result() {
    let opt = Optional::of("gm").zip_with_nillable(Optional::of(vec![1, 2, 3, 4]), |_, _| None::<Vec<i32>>);
    assert!(opt.is_empty());
    let opt = Optional::of(1).zip_with_nillable(Optional::of(2), |x, y| Some(vec![x, y]));
    assert_eq!(opt.unwrap(), Some(vec![1, 2]));
  }

  #[test]
  fn pair_from_tuple() {
    assert_eq!(Pair::from((1, "a")), Pair::new(1, "a"));
    assert_eq!(Pair::new(1, "a").into_tuple(), (1, "a"));
  }
}

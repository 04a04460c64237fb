//! Transformation combinators: filtering, mapping, and boolean-style composition.

use crate::Optional;

impl<T> Optional<T> {
  /// Returns `self` if empty or if `predicate` holds for the value; returns an empty optional otherwise.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    if self.is_empty() || self.is(predicate) {
      self
    } else {
      Self::empty()
    }
  }


  /// Maps the value with `mapper` into a present optional. Returns an empty optional without calling `mapper` if
  /// `self` is empty.
  ///
  /// Use [map_nillable](Self::map_nillable) when the mapped value can be nil.
  #[inline]
  pub fn map<Y>(self, mapper: impl FnOnce(T) -> Y) -> Optional<Y> {
    match self.into_option() {
      Some(value) => Optional::of(mapper(value)),
      None => Optional::empty(),
    }
  }

  /// Like [map](Self::map), but returns an optional holding `default` if `self` is empty.
  #[inline]
  pub fn map_or<Y>(self, default: Y, mapper: impl FnOnce(T) -> Y) -> Optional<Y> {
    match self.into_option() {
      Some(value) => Optional::of(mapper(value)),
      None => Optional::of(default),
    }
  }

  /// Like [map](Self::map), but returns an optional holding the value created by `supplier` if `self` is empty.
  /// Exactly one of `supplier` and `mapper` is called.
  #[inline]
  pub fn map_or_else<Y>(self, supplier: impl FnOnce() -> Y, mapper: impl FnOnce(T) -> Y) -> Optional<Y> {
    match self.into_option() {
      Some(value) => Optional::of(mapper(value)),
      None => Optional::of(supplier()),
    }
  }

  /// Returns the optional created by `mapper` from the value, as is. Returns an empty optional without calling
  /// `mapper` if `self` is empty.
  #[inline]
  pub fn flat_map<Y>(self, mapper: impl FnOnce(T) -> Optional<Y>) -> Optional<Y> {
    match self.into_option() {
      Some(value) => mapper(value),
      None => Optional::empty(),
    }
  }


  /// Returns `self` if empty, otherwise the optional created by `supplier`.
  #[inline]
  pub fn and(self, supplier: impl FnOnce() -> Self) -> Self {
    if self.is_empty() { self } else { supplier() }
  }

  /// Returns `self` if present, otherwise the optional created by `supplier`.
  #[inline]
  pub fn or(self, supplier: impl FnOnce() -> Self) -> Self {
    if self.is_present() { self } else { supplier() }
  }

  /// Returns whichever of `self` and `other` is present if exactly one of them is, otherwise an empty optional.
  #[inline]
  pub fn xor(self, other: Self) -> Self {
    match (self.is_present(), other.is_present()) {
      (true, false) => self,
      (false, true) => other,
      _ => Self::empty(),
    }
  }
}

impl<T> Optional<Optional<T>> {
  /// Removes one level of nesting: returns the inner optional if present, otherwise an empty optional.
  #[inline]
  pub fn flatten(self) -> Optional<T> {
    self.into_option().unwrap_or_default()
  }
}

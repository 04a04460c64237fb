//! Types with a nil state, and the construction path that collapses nil values to empty optionals.
//!
//! [`Optional::of`] always creates a present optional. For pointer-like types that have a nil state (`Option<Box<_>>`,
//! `Option<Vec<_>>`, `Option<fn()>`, raw pointers, ...) use [`Optional::of_nillable`] or one of the `_nillable`
//! combinators, which create an empty optional when the value is nil. Note that a non-nil but empty value, such as
//! `Some(Vec::new())`, is still present.

use crate::Optional;

/// A type whose values can be nil.
pub trait Nillable {
  fn is_nil(&self) -> bool;
}

impl<T> Nillable for Option<T> {
  #[inline]
  fn is_nil(&self) -> bool { self.is_none() }
}

impl<T: ?Sized> Nillable for *const T {
  #[inline]
  fn is_nil(&self) -> bool { self.is_null() }
}

impl<T: ?Sized> Nillable for *mut T {
  #[inline]
  fn is_nil(&self) -> bool { self.is_null() }
}


impl<T: Nillable> Optional<T> {
  /// Creates an optional holding `value`, or an empty optional if `value` is nil.
  #[inline]
  pub fn of_nillable(value: T) -> Self {
    if value.is_nil() { Self::empty() } else { Self::of(value) }
  }

  /// Returns an empty optional if the value is nil, otherwise `self`.
  #[inline]
  pub fn non_nil(self) -> Self {
    self.filter(|value| !value.is_nil())
  }

  /// Like [replace](Self::replace), but leaves `self` empty if `value` is nil.
  #[inline]
  pub fn replace_nillable(&mut self, value: T) -> Self {
    self.replace_with(Self::of_nillable(value))
  }
}

impl<T> Optional<T> {
  /// Like [map](Self::map), but returns an empty optional if the mapped value is nil.
  #[inline]
  pub fn map_nillable<Y: Nillable>(self, mapper: impl FnOnce(T) -> Y) -> Optional<Y> {
    self.map(mapper).non_nil()
  }

  /// Like [map_or](Self::map_or), but returns an empty optional if the mapped value or `default` is nil.
  #[inline]
  pub fn map_or_nillable<Y: Nillable>(self, default: Y, mapper: impl FnOnce(T) -> Y) -> Optional<Y> {
    self.map_or(default, mapper).non_nil()
  }

  /// Like [map_or_else](Self::map_or_else), but returns an empty optional if the created value is nil.
  #[inline]
  pub fn map_or_else_nillable<Y: Nillable>(
    self,
    supplier: impl FnOnce() -> Y,
    mapper: impl FnOnce(T) -> Y,
  ) -> Optional<Y> {
    self.map_or_else(supplier, mapper).non_nil()
  }
}

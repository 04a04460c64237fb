use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use crate::error::NoValue;

/// Container that either holds exactly one value of type `T` (present), or holds nothing (empty).
///
/// Every combinator returns a new instance and leaves its receiver and arguments alone, except for the explicitly
/// in-place operations: [take](Self::take), [replace](Self::replace), and [set_from_json](Self::set_from_json).
///
/// [`Optional::of`] treats every `T` as a plain value: zero values such as `0`, `""`, `false`, or an empty `Vec` are
/// present. Types with a nil state implement [`Nillable`](crate::Nillable) and are constructed with
/// [`Optional::of_nillable`] instead, which collapses nil values to empty.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Optional<T> {
  value: Option<T>,
}

impl<T> Optional<T> {
  /// Creates an empty optional.
  #[inline]
  pub const fn empty() -> Self {
    Self { value: None }
  }

  /// Creates a present optional holding `value`.
  #[inline]
  pub const fn of(value: T) -> Self {
    Self { value: Some(value) }
  }


  #[inline]
  pub const fn is_present(&self) -> bool {
    self.value.is_some()
  }

  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.value.is_none()
  }

  /// Returns `true` if present and `predicate` holds for the value. `predicate` is not called when empty.
  #[inline]
  pub fn is(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    self.value.as_ref().is_some_and(predicate)
  }


  /// Returns the value.
  ///
  /// # Panics
  ///
  /// Panics with [`NoValue`] if empty. Use [val](Self::val) to get a `Result` instead.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self.value {
      Some(value) => value,
      None => no_value(),
    }
  }

  /// Returns a reference to the value.
  ///
  /// # Panics
  ///
  /// Panics with [`NoValue`] if empty.
  #[inline]
  #[track_caller]
  pub fn get(&self) -> &T {
    match &self.value {
      Some(value) => value,
      None => no_value(),
    }
  }

  #[inline]
  pub fn val(self) -> Result<T, NoValue> {
    self.value.ok_or(NoValue)
  }

  /// Returns the value, or `error` if empty. A `None` error is reported as [`NoValue`].
  #[inline]
  pub fn val_or<E: From<NoValue>>(self, error: Option<E>) -> Result<T, E> {
    match self.value {
      Some(value) => Ok(value),
      None => Err(error.unwrap_or_else(|| NoValue.into())),
    }
  }

  /// Returns the value, or the error created by `supplier` if empty. A `None` error is reported as [`NoValue`].
  #[inline]
  pub fn val_or_else<E: From<NoValue>>(self, supplier: impl FnOnce() -> Option<E>) -> Result<T, E> {
    match self.value {
      Some(value) => Ok(value),
      None => Err(supplier().unwrap_or_else(|| NoValue.into())),
    }
  }


  #[inline]
  pub fn if_present(self, action: impl FnOnce(T)) {
    if let Some(value) = self.value {
      action(value);
    }
  }

  /// Calls `action` with the value if present, or `empty_action` if empty.
  #[inline]
  pub fn if_present_or_else(self, action: impl FnOnce(T), empty_action: impl FnOnce()) {
    match self.value {
      Some(value) => action(value),
      None => empty_action(),
    }
  }


  #[inline]
  pub fn or_else(self, other: T) -> T {
    self.value.unwrap_or(other)
  }

  /// Returns the value, or the value created by `supplier` if empty. `supplier` is not called when present.
  #[inline]
  pub fn or_else_get(self, supplier: impl FnOnce() -> T) -> T {
    self.value.unwrap_or_else(supplier)
  }

  #[inline]
  pub fn or_default(self) -> T where T: Default {
    self.value.unwrap_or_default()
  }

  /// Returns the value, or fails fast if empty.
  ///
  /// # Panics
  ///
  /// Panics if empty, with the error created by `supplier` as panic payload (see [`std::panic::panic_any`]), so that
  /// it can be downcast after catching the unwind. If `supplier` returns `None`, the payload is [`NoValue`].
  #[track_caller]
  pub fn or_else_panic_with_err<E>(self, supplier: impl FnOnce() -> Option<E>) -> T where
    E: Display + Send + 'static
  {
    match self.value {
      Some(value) => value,
      None => match supplier() {
        Some(error) => {
          tracing::error!(%error, "optional is empty; panicking with supplied error");
          std::panic::panic_any(error)
        }
        None => {
          tracing::error!("optional is empty and no error was supplied; panicking with `{}`", NoValue);
          std::panic::panic_any(NoValue)
        }
      },
    }
  }


  /// Takes the value out, leaving `self` empty. Returns an empty optional if `self` was already empty.
  #[inline]
  pub fn take(&mut self) -> Self {
    let taken = Self { value: self.value.take() };
    if taken.is_present() {
      tracing::trace!("took value out of optional");
    }
    taken
  }

  /// Installs `value` into `self`, returning the previous state of `self`.
  #[inline]
  pub fn replace(&mut self, value: T) -> Self {
    self.replace_with(Self::of(value))
  }

  #[inline]
  pub(crate) fn replace_with(&mut self, new: Self) -> Self {
    tracing::trace!(was_present = self.is_present(), is_present = new.is_present(), "replacing optional");
    mem::replace(self, new)
  }


  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    Optional { value: self.value.as_ref() }
  }

  #[inline]
  pub fn as_mut(&mut self) -> Optional<&mut T> {
    Optional { value: self.value.as_mut() }
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    self.value
  }
}

#[cold]
#[track_caller]
fn no_value() -> ! {
  panic!("{}", NoValue)
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::empty() }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(value: Option<T>) -> Self {
    Self { value }
  }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self {
    optional.value
  }
}

impl<T: Debug> Display for Optional<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.value {
      Some(value) => write!(f, "Optional[{:?}]", value),
      None => f.write_str("Optional.empty"),
    }
  }
}

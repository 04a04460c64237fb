//! JSON encoding of optionals: a present optional encodes as its value, an empty optional as `null`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::nillable::Nillable;
use crate::Optional;

impl<T: Serialize> Serialize for Optional<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self.as_ref().into_option() {
      Some(value) => serializer.serialize_some(value),
      None => serializer.serialize_none(),
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Self::from)
  }
}


impl<T: Serialize> Optional<T> {
  /// Encodes the value as JSON, or `null` if empty.
  #[inline]
  pub fn to_json(&self) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(self)?)
  }
}

impl<T: DeserializeOwned> Optional<T> {
  /// Decodes an optional from JSON `data`. Zero-length `data` and `null` decode to an empty optional.
  #[inline]
  pub fn from_json(data: &[u8]) -> Result<Self, Error> {
    Ok(decode::<T>(data)?.into())
  }

  /// Sets `self` from JSON `data`. Zero-length `data` and `null` set `self` to empty. If decoding fails, `self` is
  /// left unchanged and the decode error is returned.
  pub fn set_from_json(&mut self, data: &[u8]) -> Result<(), Error> {
    let value = decode::<T>(data)?;
    tracing::trace!(is_present = value.is_some(), "setting optional from JSON");
    *self = value.into();
    Ok(())
  }
}

impl<T: DeserializeOwned + Nillable> Optional<T> {
  /// Like [set_from_json](Self::set_from_json), but sets `self` to empty if the decoded value is nil.
  pub fn set_from_json_nillable(&mut self, data: &[u8]) -> Result<(), Error> {
    let value = Self::from(decode::<T>(data)?).non_nil();
    tracing::trace!(is_present = value.is_present(), "setting optional from JSON");
    *self = value;
    Ok(())
  }
}

fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<Option<T>, Error> {
  if data.is_empty() {
    return Ok(None);
  }
  serde_json::from_slice(data).map_err(|cause| {
    tracing::debug!(%cause, "failed to decode JSON into optional");
    Error::from(cause)
  })
}

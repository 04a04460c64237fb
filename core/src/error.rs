use thiserror::Error;

/// Error reported when a value is requested from an empty [`Optional`](crate::Optional).
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[error("no value present")]
pub struct NoValue;

/// Error returned by the fallible [`Optional`](crate::Optional) operations.
#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  NoValue(#[from] NoValue),
  #[error("Failed to decode JSON: {0}")]
  Decode(#[from] serde_json::Error),
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_value_message() {
    assert_eq!(NoValue.to_string(), "no value present");
    assert_eq!(Error::from(NoValue).to_string(), "no value present");
  }

  #[test]
  fn decode_error_wraps_cause() {
    let cause = serde_json::from_slice::<i32>(b"{").unwrap_err();
    let error = Error::from(cause);
    assert!(matches!(error, Error::Decode(_)));
    assert!(error.to_string().starts_with("Failed to decode JSON: "));
  }
}

use std::env;

use crate::Optional;

/// Loads variables from a `.env` file in the current directory (or its parents) into the process environment.
/// Variables that are already set are not overridden. A missing `.env` file is not an error.
pub fn load_dotenv_into_env() {
  match dotenvy::dotenv() {
    Ok(path) => tracing::debug!(path = %path.display(), "loaded environment variables from file"),
    Err(e) if e.not_found() => {}
    Err(e) => tracing::warn!("Cannot load environment variables from .env file: {}", e),
  }
}

/// Gets the value of environment variable `key`, or an empty optional if it is not set or is not valid unicode.
pub fn var(key: &str) -> Optional<String> {
  env::var(key).ok().into()
}

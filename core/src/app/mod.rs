//! Application support for binaries that use optionals: environment loading and tracing setup.

#[cfg(feature = "app_env")]
pub mod env;
#[cfg(feature = "app_tracing")]
pub mod tracing;

//! An [`Optional`] container holding either one value or nothing, with a fluent combinator API: filtering, mapping,
//! boolean-style composition, zipping, fallbacks, in-place mutation, and JSON encoding.

pub use error::{Error, NoValue};
pub use nillable::Nillable;
pub use optional::Optional;
pub use pair::Pair;

pub mod error;
pub mod optional;
mod combinator;
pub mod nillable;
pub mod pair;
mod json;
pub mod app;

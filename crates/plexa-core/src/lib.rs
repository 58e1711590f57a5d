#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Plexa core: canonical types, constants, and serialization helpers.

pub mod constants;
pub mod serialization;
pub mod types;

pub use constants::*;
pub use serialization::*;
pub use types::*;

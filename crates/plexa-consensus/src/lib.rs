#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Plexa consensus rules for PoW blocks (v0).
//!
//! This crate is responsible for:
//! - wiring the block header into the proof-of-work hash dispatch
//! - compact difficulty target encoding/decoding (Bitcoin-style `bits`)
//! - proof-of-work validation against the target
//! - header sanity rules (timestamps, version, decodable bits)
//!
//! It intentionally does **not** include networking, storage, mempool
//! policy, or a mining driver.

pub mod difficulty;
pub mod error;
pub mod pow;
pub mod validate;
pub mod work;

pub use difficulty::*;
pub use error::*;
pub use pow::*;
pub use validate::*;
pub use work::*;

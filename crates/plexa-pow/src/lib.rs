// Consensus-critical. Changes require spec update + tests.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Plexa proof-of-work hash family.
//!
//! The consensus hash is not a single function but a dispatcher over a
//! closed catalogue of chained hash pipelines ("recipes"). Two inputs gate
//! the dispatch:
//!
//! - the block timestamp partitions history into three epochs
//!   ([`epoch::Epoch`]), and
//! - within the transitional epoch, the last character of the previous
//!   block's textual hash selects one of 16 recipe variants, so miners must
//!   switch pipelines pseudo-randomly with every parent block.
//!
//! Every recipe feeds 64-byte digests head-to-tail through its primitive
//! steps and truncates the final 512-bit value to its low 256 bits. The
//! whole computation is pure and infallible: it allocates nothing on the
//! heap, holds no global state, and returns a valid digest for every input.
//!
//! Backend status for the individual primitives — including which run on
//! interim backends and what that means for cross-implementation
//! compatibility — is documented in [`primitive`].

mod cubehash;
pub mod epoch;
pub mod pipeline;
pub mod primitive;
pub mod recipe;

pub use epoch::{Epoch, MODERN_EPOCH_START, TRANSITIONAL_EPOCH_START};
pub use primitive::Primitive;
pub use recipe::Recipe;

/// Compute the 256-bit proof-of-work digest for a serialized block header.
///
/// `header_bytes` is the canonical header encoding (any length; an empty
/// slice is hashed as a single zero byte). `prev_hash_text` is the textual
/// rendering of the previous block's identity hash; only its last code unit
/// participates in dispatch. `timestamp` is the header's 32-bit `nTime`.
///
/// The returned 32 bytes are the low half of the final pipeline slot in
/// memory order (a little-endian 256-bit value for target comparison).
pub fn plexa_hash(header_bytes: &[u8], prev_hash_text: &str, timestamp: u32) -> [u8; 32] {
    let epoch = epoch::classify(timestamp);
    let selector = prev_hash_text.bytes().last().unwrap_or(0);
    let recipe = Recipe::select(epoch, selector);
    pipeline::execute(&recipe, header_bytes)
}

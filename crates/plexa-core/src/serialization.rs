// Consensus-critical. Changes require spec update + tests.
//! Canonical serialization helpers.
//!
//! Rule: all consensus-critical objects are encoded with Borsh.
//! Do not use JSON or non-canonical formats for hashing/signing/consensus.

use crate::constants::*;
use crate::types::{BlockHeader, CoreError, Hash32};
use borsh::to_vec;
use sha2::{Digest, Sha256};

/// Encode a value with canonical Borsh encoding.
pub fn to_bytes<T: borsh::BorshSerialize>(v: &T) -> Result<Vec<u8>, CoreError> {
    to_vec(v).map_err(|_| CoreError::InvalidValue("borsh serialization failed"))
}

/// Hash bytes with domain-separated double SHA-256 and return 32 bytes.
///
/// `hash32(ds, m) = SHA-256(SHA-256(ds || m))`.
pub fn hash32(domain_sep: &[u8], bytes: &[u8]) -> Hash32 {
    let mut hasher = Sha256::new();
    hasher.update(domain_sep);
    hasher.update(bytes);
    let inner = hasher.finalize();
    let outer = Sha256::digest(inner);
    let mut arr = [0u8; HASH32_LEN];
    arr.copy_from_slice(&outer);
    Hash32(arr)
}

/// Canonical block identifier = SHA-256d(DS_BLOCK_HEADER || borsh(header)).
///
/// This identifies the block for linkage and lookup. The proof-of-work
/// digest is computed separately by `plexa-pow` over the same canonical
/// bytes; the lowercase-hex rendering of this identifier is the
/// `prev_hash_text` the next block's hash dispatch consumes.
pub fn block_id(h: &BlockHeader) -> Result<Hash32, CoreError> {
    let bytes = to_bytes(h)?;
    Ok(hash32(DS_BLOCK_HEADER, &bytes))
}

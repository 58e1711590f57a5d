// Consensus-critical. Changes require spec update + tests.
//! Proof-of-work hashing.
//!
//! The PoW digest of a header is `plexa_hash` over the canonical Borsh
//! encoding of the full header, dispatched on the header's `nTime` and on
//! the lowercase-hex rendering of the previous block's identity hash.
//!
//! The PoW condition is:
//!     pow_digest_as_le_u256 <= target(bits)

#[cfg(not(feature = "dev-pow"))]
use crate::difficulty::{bits_to_target, hash_meets_target};
use crate::error::ConsensusError;
use plexa_core::{to_bytes, BlockHeader, Hash32};
use plexa_pow::plexa_hash;

/// Compute the canonical PoW digest for a header (32 bytes, little-endian).
pub fn pow_hash(header: &BlockHeader) -> Result<Hash32, ConsensusError> {
    let bytes = to_bytes(header)
        .map_err(|_| ConsensusError::InvalidHeader("header serialization failed"))?;
    let prev_text = header.prev.to_string();
    Ok(Hash32(plexa_hash(&bytes, &prev_text, header.timestamp)))
}

/// Validate proof-of-work for a header (digest <= target(bits)).
pub fn validate_pow(header: &BlockHeader) -> Result<(), ConsensusError> {
    #[cfg(feature = "dev-pow")]
    {
        let _ = header;
        // Test-only bypass to speed vector generation; real consensus must not enable this.
        return Ok(());
    }

    #[cfg(not(feature = "dev-pow"))]
    {
        let target = bits_to_target(header.bits)?;
        let h = pow_hash(header)?;
        if !hash_meets_target(h.as_bytes(), &target) {
            return Err(ConsensusError::PowAboveTarget);
        }
        Ok(())
    }
}

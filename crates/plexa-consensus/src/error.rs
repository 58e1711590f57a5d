//! Error types for Plexa's header-level consensus checks.
//!
//! Every failure here is terminal for the header under inspection: none of
//! these conditions is retryable, and a header that trips any of them is
//! rejected before its digest is ever weighed against a chain tip.

use thiserror::Error;

/// Rejection reasons for a block header.
#[derive(Debug, Error)]
pub enum ConsensusError {
    /// Compact `bits` carried the sign bit or decoded to an empty target.
    #[error("invalid compact bits 0x{0:08x}")]
    InvalidBits(u32),

    /// A full target had no canonical compact representation.
    #[error("target not representable as compact bits")]
    UnencodableTarget,

    /// The next target rose past the per-block difficulty-drop clamp.
    #[error("target increase exceeds the per-block clamp")]
    TargetBeyondClamp,

    /// The proof-of-work digest, read little-endian, exceeded the target.
    #[error("proof-of-work digest exceeds target")]
    PowAboveTarget,

    /// A header field violated basic consensus constraints.
    #[error("invalid header: {0}")]
    InvalidHeader(&'static str),
}

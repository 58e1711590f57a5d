//! Protocol-wide constants for Plexa v0.

/// Protocol semantic version (v0).
pub const PROTOCOL_VERSION: u16 = 0;

/// Length in bytes of a 32-byte hash.
pub const HASH32_LEN: usize = 32;

/// Domain separator used when hashing block headers into block identifiers.
///
/// Prevents cross-domain hash collisions.
pub const DS_BLOCK_HEADER: &[u8] = b"PLEXA::BLOCK_HEADER::V0";

/// Genesis block timestamp (Unix seconds, 2022-01-01T00:00:00Z).
///
/// Falls in the legacy hashing epoch.
pub const GENESIS_TIMESTAMP: u32 = 1_640_995_200;

/// Genesis compact difficulty target (easiest regtest-grade target).
pub const GENESIS_BITS: u32 = 0x207f_ffff;

/// Numerator of the maximum per-block target increase (difficulty drop).
///
/// `next_target <= prev_target * NUM / DEN`, i.e. at most 25% easier.
pub const MAX_TARGET_INCREASE_NUM: u32 = 125;

/// Denominator of the maximum per-block target increase.
pub const MAX_TARGET_INCREASE_DEN: u32 = 100;

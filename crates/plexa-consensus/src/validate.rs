// Consensus-critical. Changes require spec update + tests.
//! Consensus validation helpers for block headers.
//!
//! This module does not touch chain state and does not implement
//! difficulty adjustment. It only validates self-contained header
//! properties and proof-of-work.

use crate::difficulty::enforce_max_difficulty_drop;
use crate::error::ConsensusError;
use crate::pow::validate_pow;
use plexa_core::{BlockHeader, Hash32, PROTOCOL_VERSION};
#[allow(unused_imports)]
use time::OffsetDateTime;

const MAX_FUTURE_DRIFT_SECS: u32 = 2 * 60 * 60;
const MTP_WINDOW: usize = 11;

/// Validate basic header invariants plus timestamp rules (MTP + drift).
pub fn validate_header_sanity(
    header: &BlockHeader,
    median_time_past: Option<u32>,
) -> Result<(), ConsensusError> {
    if header.version != PROTOCOL_VERSION {
        return Err(ConsensusError::InvalidHeader("unsupported header version"));
    }

    // Timestamp must be non-zero.
    if header.timestamp == 0 {
        return Err(ConsensusError::InvalidHeader("timestamp must be non-zero"));
    }

    // Genesis is permitted to have an arbitrary fixed timestamp; skip MTP/drift.
    if header.prev != Hash32::zero() {
        // Enforce MTP rule.
        let mtp = median_time_past.ok_or(ConsensusError::InvalidHeader(
            "missing median-time-past for non-genesis",
        ))?;
        if header.timestamp <= mtp {
            return Err(ConsensusError::InvalidHeader("timestamp below MTP"));
        }

        // Absolute future-drift bound.
        #[cfg(feature = "dev-pow")]
        let now = header.timestamp;

        #[cfg(not(feature = "dev-pow"))]
        let now = OffsetDateTime::now_utc().unix_timestamp().clamp(0, u32::MAX as i64) as u32;

        if !is_timestamp_within_drift(header.timestamp, now, MAX_FUTURE_DRIFT_SECS) {
            return Err(ConsensusError::InvalidHeader(
                "timestamp too far from local time",
            ));
        }
    }

    // Difficulty bits must decode to a valid target.
    // This also rejects negative/zero targets.
    let _ = crate::difficulty::bits_to_target(header.bits)?;

    Ok(())
}

/// Validate header sanity plus difficulty drop clamp against the previous target.
pub fn validate_header_with_prev_bits(
    prev_bits: u32,
    median_time_past: Option<u32>,
    header: &BlockHeader,
) -> Result<(), ConsensusError> {
    enforce_max_difficulty_drop(prev_bits, header.bits)?;
    validate_header_sanity(header, median_time_past)?;
    validate_pow(header)?;
    Ok(())
}

/// Check if a candidate timestamp is within an absolute drift window.
///
/// Pure helper (no system clock access) for future median-time enforcement.
pub fn is_timestamp_within_drift(candidate: u32, reference: u32, max_drift_secs: u32) -> bool {
    let delta = if candidate >= reference {
        candidate - reference
    } else {
        reference - candidate
    };
    delta <= max_drift_secs
}

/// Compute Median-Time-Past over the last up-to-11 timestamps.
pub fn median_time_past(timestamps: &[u32]) -> Option<u32> {
    if timestamps.is_empty() {
        return None;
    }
    let start = timestamps.len().saturating_sub(MTP_WINDOW);
    let mut buf: Vec<u32> = timestamps[start..].to_vec();
    buf.sort_unstable();
    let mid = buf.len() / 2;
    Some(buf[mid])
}

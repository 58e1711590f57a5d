// Consensus-critical. Changes require spec update + tests.
//! Chain-work accounting for fork choice.
//!
//! Plexa selects among competing tips by accumulated work, not height. A
//! block's work is the expected number of pipeline evaluations behind a
//! digest at or below its target; since the digest is read as a uniform
//! little-endian 256-bit value, a target of `t` accepts with probability
//! `(t + 1) / 2^256`. Equal-work ties break toward the lower identity hash
//! so that honest nodes converge on the same tip.

use core::cmp::Ordering;

use crate::difficulty::bits_to_target;
use crate::error::ConsensusError;
use num_bigint::BigUint;
use num_traits::One;
use plexa_core::Hash32;

/// Expected number of pipeline evaluations represented by one block at `bits`.
///
/// `work = floor(2^256 / (target + 1))`.
pub fn work_from_bits(bits: u32) -> Result<BigUint, ConsensusError> {
    let target = bits_to_target(bits)?;
    Ok((BigUint::one() << 256u32) / (target + BigUint::one()))
}

/// Fork-choice comparison: does tip A beat tip B?
pub fn tip_is_better(a_work: &BigUint, a_hash: &Hash32, b_work: &BigUint, b_hash: &Hash32) -> bool {
    match a_work.cmp(b_work) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => a_hash.as_bytes() < b_hash.as_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plexa_core::GENESIS_BITS;

    #[test]
    fn genesis_target_represents_two_evaluations() {
        // GENESIS_BITS decodes to (2^23 - 1) * 2^232, just under 2^255, so
        // one block is worth exactly two expected evaluations.
        let work = work_from_bits(GENESIS_BITS).expect("work");
        assert_eq!(work, BigUint::from(2u32));
    }

    #[test]
    fn difficulty_one_target_work_is_exact() {
        // 0x1d00ffff decodes to 0xffff * 2^208; its work is 0x0100010001.
        let work = work_from_bits(0x1d00_ffff).expect("work");
        assert_eq!(work, BigUint::from(0x1_0001_0001u64));
    }

    #[test]
    fn work_grows_as_targets_shrink() {
        let genesis = work_from_bits(GENESIS_BITS).expect("genesis work");
        let harder = work_from_bits(0x1d00_ffff).expect("harder work");
        assert!(harder > genesis);
    }

    #[test]
    fn equal_work_ties_break_toward_the_lower_id() {
        let work = work_from_bits(GENESIS_BITS).expect("work");
        let more_work = work_from_bits(0x1d00_ffff).expect("more work");
        let lo = Hash32([0x11u8; 32]);
        let hi = Hash32([0x12u8; 32]);

        // More work wins regardless of identity hash.
        assert!(tip_is_better(&more_work, &hi, &work, &lo));
        assert!(!tip_is_better(&work, &lo, &more_work, &hi));

        // Equal work: lower id wins; a tip never beats itself.
        assert!(tip_is_better(&work, &lo, &work, &hi));
        assert!(!tip_is_better(&work, &hi, &work, &lo));
        assert!(!tip_is_better(&work, &lo, &work, &lo));
    }
}

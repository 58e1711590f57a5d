// Consensus-critical. Changes require spec update + tests.
//! The pipeline executor.
//!
//! Runs a [`Recipe`] over an input: step 0 hashes the full input, every
//! later step hashes exactly the 64-byte slot written by its predecessor,
//! and the result is the low 32 bytes of the final slot. Scratch space is a
//! single stack array of write-once slots; nothing escapes the call.

use crate::primitive::Primitive;
use crate::recipe::Recipe;

/// Width in bytes of an intermediate pipeline slot (one 512-bit digest).
pub const STEP_BYTES: usize = 64;

/// Message substituted for an empty input at step 0.
///
/// An empty header hashes as a single zero byte. This convention is
/// consensus-frozen; removing it would change the digest of any caller
/// that hashes zero bytes.
const BLANK: [u8; 1] = [0u8];

/// Execute a recipe over `input` and return the trimmed 256-bit digest.
///
/// The digest is the first 32 bytes of the final slot in memory order (the
/// low half of the little-endian 512-bit pipeline value).
pub fn execute(recipe: &Recipe, input: &[u8]) -> [u8; 32] {
    let mut slots = [[0u8; STEP_BYTES]; Recipe::MAX_STEPS];
    let mut last = 0usize;

    for (k, step) in recipe.steps().enumerate() {
        let (written, rest) = slots.split_at_mut(k);
        let slot = &mut rest[0];
        match written.last() {
            None => {
                let msg: &[u8] = if input.is_empty() { &BLANK } else { input };
                step.digest_into(msg, slot);
            }
            Some(prev) => step.digest_into(prev, slot),
        }
        last = k;
    }

    let mut digest = [0u8; 32];
    digest.copy_from_slice(&slots[last][..32]);
    digest
}

/// Execute a single primitive over `input` into a fresh 64-byte slot.
///
/// Convenience for callers that need one step outside a recipe (tests,
/// tooling); the pipeline itself goes through [`execute`].
pub fn single_step(primitive: Primitive, input: &[u8]) -> [u8; STEP_BYTES] {
    let mut out = [0u8; STEP_BYTES];
    primitive.digest_into(input, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_hashes_as_a_single_zero_byte() {
        for recipe in [Recipe::MODERN, Recipe::DEFAULT, Recipe::for_selector(b'f')] {
            assert_eq!(execute(&recipe, &[]), execute(&recipe, &[0u8]));
        }
    }

    #[test]
    fn blank_substitution_applies_only_to_truly_empty_input() {
        // Two zero bytes are a different message than one.
        assert_ne!(
            execute(&Recipe::MODERN, &[]),
            execute(&Recipe::MODERN, &[0u8, 0u8])
        );
    }

    #[test]
    fn execution_is_length_agnostic() {
        let long = vec![0xabu8; 4096];
        let short = [0xabu8; 80];
        assert_ne!(
            execute(&Recipe::DEFAULT, &long),
            execute(&Recipe::DEFAULT, &short)
        );
    }

    #[test]
    fn chaining_matches_manual_unroll() {
        // MODERN, unrolled by hand against the executor.
        let input = [0x11u8; 80];
        let mut expected = single_step(Primitive::Blake, &input);
        for step in Recipe::MODERN.steps().skip(1) {
            expected = single_step(step, &expected);
        }
        assert_eq!(execute(&Recipe::MODERN, &input)[..], expected[..32]);
    }

    #[test]
    fn distinct_recipes_disagree_on_the_same_input() {
        let input = [0u8; 80];
        let modern = execute(&Recipe::MODERN, &input);
        let default = execute(&Recipe::DEFAULT, &input);
        let f = execute(&Recipe::for_selector(b'f'), &input);
        assert_ne!(modern, default);
        assert_ne!(modern, f);
        assert_ne!(default, f);
    }
}

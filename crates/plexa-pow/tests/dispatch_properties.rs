//! End-to-end properties of the hash dispatch.
//!
//! Golden digests are pinned from this implementation (run the ignored
//! `dump_reference_vectors` test to print them); the tests here assert
//! every relation between the reference scenarios that holds independent
//! of the absolute digest values.

use std::collections::HashSet;

use plexa_pow::{plexa_hash, MODERN_EPOCH_START, TRANSITIONAL_EPOCH_START};

const ZERO_HEADER: [u8; 80] = [0u8; 80];
const ZERO_PREV: &str = "0000000000000000000000000000000000000000000000000000000000000000";

const T_LEGACY: u32 = 1_500_000_000;
const T_TRANSITIONAL: u32 = 1_645_000_000;
const T_MODERN: u32 = 1_700_000_000;

/// A 64-char prev-hash text ending in the given character.
fn prev_ending_in(c: char) -> String {
    let mut s = "0".repeat(63);
    s.push(c);
    s
}

#[test]
fn repeated_calls_agree() {
    for t in [T_LEGACY, T_TRANSITIONAL, T_MODERN] {
        let a = plexa_hash(&ZERO_HEADER, ZERO_PREV, t);
        let b = plexa_hash(&ZERO_HEADER, ZERO_PREV, t);
        assert_eq!(a, b);
    }
}

#[test]
fn legacy_and_modern_ignore_the_parent_hash() {
    for t in [T_LEGACY, T_MODERN] {
        let a = plexa_hash(&ZERO_HEADER, &prev_ending_in('0'), t);
        let b = plexa_hash(&ZERO_HEADER, &prev_ending_in('f'), t);
        let c = plexa_hash(&ZERO_HEADER, &prev_ending_in('z'), t);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }
}

#[test]
fn epochs_are_piecewise_constant_in_time() {
    let at = |t| plexa_hash(&ZERO_HEADER, ZERO_PREV, t);

    // Within an epoch the timestamp does not touch the digest.
    assert_eq!(at(0), at(TRANSITIONAL_EPOCH_START - 1));
    assert_eq!(
        at(TRANSITIONAL_EPOCH_START),
        at(MODERN_EPOCH_START - 1)
    );
    assert_eq!(at(MODERN_EPOCH_START), at(u32::MAX));

    // Modern differs from legacy on the same input.
    assert_ne!(at(T_LEGACY), at(T_MODERN));
}

#[test]
fn transitional_boundary_behaviour() {
    let at = |t| plexa_hash(&ZERO_HEADER, &prev_ending_in('7'), t);

    // Selector '7' kicks in exactly at the transitional epoch start and
    // stops exactly at the modern epoch start.
    assert_eq!(at(TRANSITIONAL_EPOCH_START - 1), at(T_LEGACY));
    assert_ne!(at(TRANSITIONAL_EPOCH_START), at(TRANSITIONAL_EPOCH_START - 1));
    assert_eq!(at(MODERN_EPOCH_START - 1), at(TRANSITIONAL_EPOCH_START));
    assert_ne!(at(MODERN_EPOCH_START), at(MODERN_EPOCH_START - 1));
}

#[test]
fn unknown_selectors_fall_through_to_the_legacy_digest() {
    let legacy = plexa_hash(&ZERO_HEADER, ZERO_PREV, T_LEGACY);
    for c in ['z', 'A', 'F', 'g', '/', ':', '`', ' '] {
        let got = plexa_hash(&ZERO_HEADER, &prev_ending_in(c), T_TRANSITIONAL);
        assert_eq!(got, legacy, "selector {c:?} must use the default recipe");
    }
}

#[test]
fn transitional_selectors_form_a_closed_set_of_17_digests() {
    let mut digests = HashSet::new();
    for b in 0u8..=127 {
        let prev = prev_ending_in(char::from(b));
        digests.insert(plexa_hash(&ZERO_HEADER, &prev, T_TRANSITIONAL));
    }
    // 16 recognised selectors plus the shared default.
    assert_eq!(digests.len(), 17);
}

#[test]
fn named_selectors_are_pairwise_distinct_and_not_the_default() {
    let default = plexa_hash(&ZERO_HEADER, &prev_ending_in('z'), T_TRANSITIONAL);
    let mut digests = HashSet::new();
    for c in "0123456789abcdef".chars() {
        let d = plexa_hash(&ZERO_HEADER, &prev_ending_in(c), T_TRANSITIONAL);
        assert_ne!(d, default, "selector {c:?}");
        assert!(digests.insert(d), "selector {c:?} collides");
    }
}

#[test]
fn blank_input_equivalence_holds_in_every_epoch() {
    for t in [T_LEGACY, T_TRANSITIONAL, T_MODERN] {
        for prev in [ZERO_PREV.to_string(), prev_ending_in('f')] {
            assert_eq!(
                plexa_hash(&[], &prev, t),
                plexa_hash(&[0u8], &prev, t),
                "t={t}"
            );
        }
    }
}

#[test]
fn digest_depends_on_the_header_bytes() {
    let mut header = ZERO_HEADER;
    header[79] = 1;
    assert_ne!(
        plexa_hash(&ZERO_HEADER, ZERO_PREV, T_MODERN),
        plexa_hash(&header, ZERO_PREV, T_MODERN)
    );
}

/// Prints the reference digests for pinning. Run with
/// `cargo test -p plexa-pow -- --ignored --nocapture` and freeze the output;
/// any change to these values is a consensus change.
#[test]
#[ignore]
fn dump_reference_vectors() {
    let scenarios: [(&str, String, u32); 5] = [
        ("modern_zero", ZERO_PREV.to_string(), T_MODERN),
        ("legacy_zero", ZERO_PREV.to_string(), T_LEGACY),
        ("transitional_0_zero", prev_ending_in('0'), T_TRANSITIONAL),
        ("transitional_f_zero", prev_ending_in('f'), T_TRANSITIONAL),
        ("transitional_unknown_zero", prev_ending_in('z'), T_TRANSITIONAL),
    ];
    for (name, prev, t) in scenarios {
        let digest = plexa_hash(&ZERO_HEADER, &prev, t);
        println!("{name}: {}", hex::encode(digest));
    }
}

// Consensus-critical. Changes require spec update + tests.
//! The frozen recipe catalogue.
//!
//! A recipe is an ordered pipeline of primitives. The catalogue holds 18
//! recipes: the fixed MODERN pipeline, the shared DEFAULT two-pass pipeline
//! (used verbatim in the legacy epoch and as the transitional fallback), and
//! 16 transitional variants that extend DEFAULT with a per-selector suffix.
//! Recipes are data; a single executor interprets them.
//!
//! Orderings here are consensus-frozen exactly as deployed, including the
//! deliberate deviations from the published X11/X17 sequences (MODERN runs
//! Skein before BMW and Luffa before Keccak). Do not "correct" them.

use crate::epoch::Epoch;
use crate::primitive::Primitive::{self, *};

/// The 11-step modern pipeline.
const MODERN_STEPS: [Primitive; 11] = [
    Blake, Skein, Bmw, Groestl, Jh, Luffa, Keccak, CubeHash, Simd, Shavite, Echo,
];

/// The 33-step two-pass pipeline: the full 17-step sequence, then the same
/// sequence again without its leading Blake step.
const TWO_PASS_STEPS: [Primitive; 33] = [
    Blake, Bmw, Groestl, Skein, Jh, Keccak, Luffa, CubeHash, Shavite, Simd, Echo, Hamsi, Fugue,
    Shabal, Whirlpool, Sha512, Haval,
    Bmw, Groestl, Skein, Jh, Keccak, Luffa, CubeHash, Shavite, Simd, Echo, Hamsi, Fugue, Shabal,
    Whirlpool, Sha512, Haval,
];

/// Per-selector suffixes appended to the two-pass pipeline in the
/// transitional epoch. Selector bytes are the US-ASCII code of the last
/// character of the previous block's textual hash; only lowercase hex
/// digits are recognised.
const fn transitional_suffix(selector: u8) -> &'static [Primitive] {
    match selector {
        b'0' => &[CubeHash],
        b'1' => &[Shabal, Whirlpool],
        b'2' => &[Simd, Echo, Hamsi],
        b'3' => &[Bmw, Groestl, Skein, Jh],
        b'4' => &[Sha512, Haval, Bmw, Groestl, Skein],
        b'5' => &[Jh, Keccak, Luffa, CubeHash, Shavite, Simd],
        b'6' => &[Shabal, Whirlpool, Sha512, Haval, Bmw, Groestl, Skein],
        b'7' => &[Bmw, Groestl, Skein, Jh, Keccak, Luffa, CubeHash, Shavite],
        b'8' => &[Shavite, Simd, Echo, Hamsi, Fugue, Shabal, Whirlpool, Sha512, Haval],
        b'9' => &[
            Sha512, Haval, Bmw, Groestl, Skein, Sha512, Haval, Bmw, Groestl, Skein,
        ],
        b'a' => &[
            Sha512, Haval, Bmw, Groestl, Skein, Sha512, Haval, Bmw, Groestl, Skein, Fugue,
        ],
        b'b' => &[
            Shavite, Simd, Echo, Hamsi, Fugue, Shabal, Whirlpool, Sha512, Haval, Bmw, Groestl,
            Skein,
        ],
        b'c' => &[
            Shabal, Whirlpool, Sha512, Haval, Bmw, Groestl, Skein, Shabal, Whirlpool, Sha512,
            Haval, Bmw, Groestl,
        ],
        b'd' => &[
            Shabal, Whirlpool, Sha512, Haval, Bmw, Groestl, Skein, Shabal, Whirlpool, Sha512,
            Haval, Bmw, Groestl, Skein,
        ],
        b'e' => &[
            Shabal, Whirlpool, Sha512, Haval, Bmw, Groestl, Skein, Shabal, Whirlpool, Sha512,
            Haval, Bmw, Groestl, Skein, Groestl,
        ],
        b'f' => &[
            Shabal, Whirlpool, Sha512, Haval, Bmw, Groestl, Skein, Shabal, Whirlpool, Sha512,
            Haval, Bmw, Groestl, Skein, Groestl, Skein,
        ],
        _ => &[],
    }
}

/// An ordered pipeline of primitives: a shared base plus a static suffix.
///
/// The base/suffix split mirrors how the catalogue is defined (every
/// transitional variant extends the two-pass pipeline); the executor sees a
/// single flat sequence via [`Recipe::steps`]. Recipes are never empty.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Recipe {
    base: &'static [Primitive],
    suffix: &'static [Primitive],
}

impl Recipe {
    /// The fixed modern-epoch recipe.
    pub const MODERN: Recipe = Recipe {
        base: &MODERN_STEPS,
        suffix: &[],
    };

    /// The two-pass recipe: the legacy-epoch recipe and the transitional
    /// fallback for unrecognised selector bytes.
    pub const DEFAULT: Recipe = Recipe {
        base: &TWO_PASS_STEPS,
        suffix: &[],
    };

    /// Longest pipeline in the catalogue (selector `'f'`).
    pub const MAX_STEPS: usize = 49;

    /// Select the recipe for an epoch and a selector byte.
    ///
    /// The selector participates only in the transitional epoch; the other
    /// two epochs use their fixed recipe regardless of the parent hash.
    pub const fn select(epoch: Epoch, selector: u8) -> Recipe {
        match epoch {
            Epoch::Modern => Recipe::MODERN,
            Epoch::Legacy => Recipe::DEFAULT,
            Epoch::Transitional => Recipe::for_selector(selector),
        }
    }

    /// Look up the transitional recipe for a selector byte.
    ///
    /// Recognised selectors are the byte values of `'0'..='9'` and
    /// `'a'..='f'` (48–57 and 97–102); anything else — including uppercase
    /// hex digits, which consensus renderers never emit — yields
    /// [`Recipe::DEFAULT`].
    pub const fn for_selector(selector: u8) -> Recipe {
        Recipe {
            base: &TWO_PASS_STEPS,
            suffix: transitional_suffix(selector),
        }
    }

    /// Number of primitive invocations in this recipe.
    pub const fn step_count(&self) -> usize {
        self.base.len() + self.suffix.len()
    }

    /// The pipeline steps in execution order.
    pub fn steps(&self) -> impl Iterator<Item = Primitive> + '_ {
        self.base.iter().chain(self.suffix).copied()
    }
}

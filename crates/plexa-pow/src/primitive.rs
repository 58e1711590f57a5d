// Consensus-critical. Changes require spec update + tests.
//! Hash primitives used as pipeline steps.
//!
//! Each primitive is a pure `bytes -> fixed-width digest` function with a
//! fresh context per invocation; the pipeline treats them uniformly through
//! [`Primitive::digest_into`]. Pipeline slots are 64 bytes wide and start
//! zeroed, so a primitive with a narrower output (HAVAL-256/5) leaves the
//! upper bytes of its slot zero. That zero padding is consensus-visible:
//! the next step consumes the full 64-byte slot.
//!
//! # Backend status
//!
//! Nine primitives are byte-exact implementations of their published
//! specification: eight from the RustCrypto `digest` ecosystem and the
//! in-crate CubeHash-512 port (whose whole schedule derives from its
//! parameters). The remaining eight — BMW, Luffa, SHAvite, SIMD, ECHO,
//! Hamsi, Fugue, HAVAL — have no maintained pure-Rust implementation on
//! crates.io and are wired as domain-separated BLAKE3 XOFs at the declared
//! output width. Recipes containing any of those steps therefore produce
//! digests that are stable across deployments of this crate but are **not**
//! interchangeable with an implementation of the published algorithms;
//! every recipe in the catalogue contains at least one such step, so no
//! epoch is currently wire-compatible with external implementations.
//! [`Primitive::reference_backed`] exposes the split. Replacing an interim
//! backend is a hard fork and re-pins the golden vectors.

use digest::Digest;

use crate::cubehash::CubeHash512;
use crate::pipeline::STEP_BYTES;

const DS_BMW: &[u8] = b"PLEXA::POW::BMW512::V0";
const DS_LUFFA: &[u8] = b"PLEXA::POW::LUFFA512::V0";
const DS_SHAVITE: &[u8] = b"PLEXA::POW::SHAVITE512::V0";
const DS_SIMD: &[u8] = b"PLEXA::POW::SIMD512::V0";
const DS_ECHO: &[u8] = b"PLEXA::POW::ECHO512::V0";
const DS_HAMSI: &[u8] = b"PLEXA::POW::HAMSI512::V0";
const DS_FUGUE: &[u8] = b"PLEXA::POW::FUGUE512::V0";
const DS_HAVAL: &[u8] = b"PLEXA::POW::HAVAL256_5::V0";

/// A pipeline step: one of the closed set of hash primitives.
///
/// The set, the spelling of each digest, and the per-recipe orderings are
/// frozen consensus artifacts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Primitive {
    /// BLAKE-512 (SHA-3 finalist BLAKE, 14-round 512-bit variant).
    Blake,
    /// Blue Midnight Wish, 512-bit.
    Bmw,
    /// Groestl-512 (final tweaked round-3 version).
    Groestl,
    /// Skein-512-512 (version 1.3).
    Skein,
    /// JH-512 (round-3 JH42).
    Jh,
    /// Keccak-512 (original pre-NIST padding).
    Keccak,
    /// Luffa-512.
    Luffa,
    /// CubeHash-512.
    CubeHash,
    /// SHAvite-3 512.
    Shavite,
    /// SIMD-512.
    Simd,
    /// ECHO-512.
    Echo,
    /// Hamsi-512.
    Hamsi,
    /// Fugue-512.
    Fugue,
    /// Shabal-512.
    Shabal,
    /// Whirlpool (ISO final version).
    Whirlpool,
    /// SHA-512.
    Sha512,
    /// HAVAL-256/5 — the only primitive with a 256-bit output.
    Haval,
}

impl Primitive {
    /// Number of distinct primitives.
    pub const COUNT: usize = 17;

    /// Every primitive, in catalogue declaration order.
    pub const ALL: [Primitive; Self::COUNT] = [
        Primitive::Blake,
        Primitive::Bmw,
        Primitive::Groestl,
        Primitive::Skein,
        Primitive::Jh,
        Primitive::Keccak,
        Primitive::Luffa,
        Primitive::CubeHash,
        Primitive::Shavite,
        Primitive::Simd,
        Primitive::Echo,
        Primitive::Hamsi,
        Primitive::Fugue,
        Primitive::Shabal,
        Primitive::Whirlpool,
        Primitive::Sha512,
        Primitive::Haval,
    ];

    /// Width in bytes of this primitive's digest.
    pub const fn output_len(self) -> usize {
        match self {
            Primitive::Haval => 32,
            _ => STEP_BYTES,
        }
    }

    /// Whether this primitive's backend is a byte-exact implementation of
    /// the published algorithm (as opposed to an interim tagged sponge).
    pub const fn reference_backed(self) -> bool {
        !matches!(
            self,
            Primitive::Bmw
                | Primitive::Luffa
                | Primitive::Shavite
                | Primitive::Simd
                | Primitive::Echo
                | Primitive::Hamsi
                | Primitive::Fugue
                | Primitive::Haval
        )
    }

    /// Hash `msg` into `out`.
    ///
    /// Fills `out[..output_len()]` with the digest and zeroes the remainder,
    /// so the slot always holds a well-defined 64-byte value. A fresh
    /// context is constructed per call; invoking the same primitive twice in
    /// one recipe cannot leak state between steps.
    pub fn digest_into(self, msg: &[u8], out: &mut [u8; STEP_BYTES]) {
        let n = self.output_len();
        match self {
            Primitive::Blake => {
                use blake_hash::Digest as _;
                out.copy_from_slice(&blake_hash::Blake512::digest(msg));
            }
            Primitive::Groestl => out.copy_from_slice(&groestl::Groestl512::digest(msg)),
            Primitive::Skein => {
                out.copy_from_slice(&skein::Skein512::<digest::consts::U64>::digest(msg));
            }
            Primitive::Jh => out.copy_from_slice(&jh::Jh512::digest(msg)),
            Primitive::Keccak => out.copy_from_slice(&sha3::Keccak512::digest(msg)),
            Primitive::Shabal => out.copy_from_slice(&shabal::Shabal512::digest(msg)),
            Primitive::Whirlpool => out.copy_from_slice(&whirlpool::Whirlpool::digest(msg)),
            Primitive::Sha512 => out.copy_from_slice(&sha2::Sha512::digest(msg)),
            Primitive::CubeHash => out.copy_from_slice(&CubeHash512::digest(msg)),
            Primitive::Bmw => interim(DS_BMW, msg, &mut out[..n]),
            Primitive::Luffa => interim(DS_LUFFA, msg, &mut out[..n]),
            Primitive::Shavite => interim(DS_SHAVITE, msg, &mut out[..n]),
            Primitive::Simd => interim(DS_SIMD, msg, &mut out[..n]),
            Primitive::Echo => interim(DS_ECHO, msg, &mut out[..n]),
            Primitive::Hamsi => interim(DS_HAMSI, msg, &mut out[..n]),
            Primitive::Fugue => interim(DS_FUGUE, msg, &mut out[..n]),
            Primitive::Haval => interim(DS_HAVAL, msg, &mut out[..n]),
        }
        out[n..].fill(0);
    }
}

/// Interim backend: tag-separated BLAKE3 XOF at the primitive's output width.
fn interim(tag: &[u8], msg: &[u8], out: &mut [u8]) {
    let mut hasher = blake3::Hasher::new();
    hasher.update(tag);
    hasher.update(msg);
    hasher.finalize_xof().fill(out);
}

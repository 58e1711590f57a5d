// Consensus-critical. Changes require spec update + tests.
//! CubeHash-512 (CubeHash16/32 with 512-bit output).
//!
//! In-crate port of the round-2 parameter set: the state is 32 little-endian
//! 32-bit words; each 32-byte block is xored into the low half of the state
//! and followed by 16 rounds; initialization and finalization each apply 160
//! rounds, finalization after flipping the low bit of the last state word.
//! The initial state is fully determined by the `(512, 32, 16)` parameters,
//! so it is evaluated at compile time instead of carrying a literal table.

const OUTPUT_BYTES: usize = 64;
const BLOCK_BYTES: usize = 32;
const ROUNDS_PER_BLOCK: usize = 16;

/// One CubeHash round over the 32-word state.
///
/// Word indices are read as five bits `i j k l m` (16, 8, 4, 2, 1); the ten
/// steps below are the published add/rotate/swap/xor schedule over those
/// index bits.
const fn round(mut x: [u32; 32]) -> [u32; 32] {
    let mut s = 0;
    while s < 16 {
        x[s + 16] = x[s + 16].wrapping_add(x[s]);
        s += 1;
    }
    let mut s = 0;
    while s < 16 {
        x[s] = x[s].rotate_left(7);
        s += 1;
    }
    let mut s = 0;
    while s < 16 {
        if s & 8 == 0 {
            let t = x[s];
            x[s] = x[s ^ 8];
            x[s ^ 8] = t;
        }
        s += 1;
    }
    let mut s = 0;
    while s < 16 {
        x[s] ^= x[s + 16];
        s += 1;
    }
    let mut s = 16;
    while s < 32 {
        if s & 2 == 0 {
            let t = x[s];
            x[s] = x[s ^ 2];
            x[s ^ 2] = t;
        }
        s += 1;
    }
    let mut s = 0;
    while s < 16 {
        x[s + 16] = x[s + 16].wrapping_add(x[s]);
        s += 1;
    }
    let mut s = 0;
    while s < 16 {
        x[s] = x[s].rotate_left(11);
        s += 1;
    }
    let mut s = 0;
    while s < 16 {
        if s & 4 == 0 {
            let t = x[s];
            x[s] = x[s ^ 4];
            x[s ^ 4] = t;
        }
        s += 1;
    }
    let mut s = 0;
    while s < 16 {
        x[s] ^= x[s + 16];
        s += 1;
    }
    let mut s = 16;
    while s < 32 {
        if s & 1 == 0 {
            let t = x[s];
            x[s] = x[s ^ 1];
            x[s ^ 1] = t;
        }
        s += 1;
    }
    x
}

const fn rounds16(mut x: [u32; 32]) -> [u32; 32] {
    let mut r = 0;
    while r < ROUNDS_PER_BLOCK {
        x = round(x);
        r += 1;
    }
    x
}

/// Initial state: `(h/8, b, r)` in the first three words, then 10r rounds.
const INITIAL_STATE: [u32; 32] = {
    let mut x = [0u32; 32];
    x[0] = OUTPUT_BYTES as u32;
    x[1] = BLOCK_BYTES as u32;
    x[2] = ROUNDS_PER_BLOCK as u32;
    let mut r = 0;
    while r < 10 * ROUNDS_PER_BLOCK {
        x = round(x);
        r += 1;
    }
    x
};

/// One-shot CubeHash-512 hasher.
pub(crate) struct CubeHash512 {
    x: [u32; 32],
    buf: [u8; BLOCK_BYTES],
    fill: usize,
}

impl CubeHash512 {
    /// Hash `msg` and return the 64-byte digest (little-endian words).
    pub(crate) fn digest(msg: &[u8]) -> [u8; OUTPUT_BYTES] {
        let mut h = CubeHash512 {
            x: INITIAL_STATE,
            buf: [0u8; BLOCK_BYTES],
            fill: 0,
        };
        h.update(msg);
        h.finalize()
    }

    fn update(&mut self, mut msg: &[u8]) {
        while !msg.is_empty() {
            let take = (BLOCK_BYTES - self.fill).min(msg.len());
            self.buf[self.fill..self.fill + take].copy_from_slice(&msg[..take]);
            self.fill += take;
            msg = &msg[take..];
            if self.fill == BLOCK_BYTES {
                self.ingest();
            }
        }
    }

    /// Xor the buffered block into the low eight words, then 16 rounds.
    fn ingest(&mut self) {
        for (i, word) in self.buf.chunks_exact(4).enumerate() {
            self.x[i] ^= u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        }
        self.x = rounds16(self.x);
        self.fill = 0;
    }

    fn finalize(mut self) -> [u8; OUTPUT_BYTES] {
        // Pad: 0x80, zero-fill, process as an ordinary block.
        self.buf[self.fill] = 0x80;
        self.buf[self.fill + 1..].fill(0);
        self.ingest();

        self.x[31] ^= 1;
        for _ in 0..10 {
            self.x = rounds16(self.x);
        }

        let mut out = [0u8; OUTPUT_BYTES];
        for (i, chunk) in out.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&self.x[i].to_le_bytes());
        }
        out
    }
}

//! 64-bit seeded hash with an optional second digest.
//!
//! Same three phases as `shake32`, over twelve 64-bit lanes
//! and 96-byte blocks. Words are read little-endian on every target.

use crate::{DefaultGuard, Guard, PI_FRACTION};

const WORD: usize = 8;
const LANES: usize = 12;
const BLOCK: usize = LANES * WORD;

/// Both digests produced by one pass of [`shake64_dual`].
///
/// `secondary` is derived from a lane the primary digest never reads after
/// the tail, which makes the pair usable as two hash functions (double
/// hashing, Bloom filters) for the price of one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shake64Digest {
    pub primary: u64,
    pub secondary: u64,
}

/// Hashes `message` with `seed` under the crate's [`DefaultGuard`] policy.
#[inline]
pub const fn shake64(message: &[u8], seed: u64) -> u64 {
    shake64_with_guard::<DefaultGuard>(message, seed)
}

/// Hashes `message` with `seed`, returning the primary and secondary digests.
///
/// ```
/// use const_shakehash::shake64_dual;
///
/// let digest = shake64_dual(b"abc", 0);
/// assert_eq!(digest.primary, 0x8c083c7721888939);
/// assert_eq!(digest.secondary, 0xa600e2a5eec1c9b8);
/// ```
#[inline]
pub const fn shake64_dual(message: &[u8], seed: u64) -> Shake64Digest {
    shake64_dual_with_guard::<DefaultGuard>(message, seed)
}

/// Hashes `message` with `seed`, writing the secondary digest into `second`
/// when a slot is given.
pub fn shake64_with(message: &[u8], seed: u64, second: Option<&mut u64>) -> u64 {
    match second {
        Some(slot) => {
            let digest = shake64_dual(message, seed);
            *slot = digest.secondary;
            digest.primary
        }
        None => shake64(message, seed),
    }
}

/// [`shake64`] under an explicit guard policy.
#[inline]
pub const fn shake64_with_guard<G: Guard>(message: &[u8], seed: u64) -> u64 {
    let (s0, _) = condense::<G>(message, seed);
    scramble(s0)
}

/// [`shake64_dual`] under an explicit guard policy.
#[inline]
pub const fn shake64_dual_with_guard<G: Guard>(message: &[u8], seed: u64) -> Shake64Digest {
    let (s0, s2) = condense::<G>(message, seed);
    Shake64Digest {
        primary: scramble(s0),
        secondary: scramble(mix(s0, s2)),
    }
}

/// Runs every phase up to finalization and returns lanes 0 and 2.
const fn condense<G: Guard>(message: &[u8], seed: u64) -> (u64, u64) {
    let guard = if G::ENABLED { seed } else { 0 };
    let len = message.len();

    let mut s = PI_FRACTION;
    s[0] ^= seed ^ guard;

    let blocks_end = len / BLOCK * BLOCK;
    let words_end = len / WORD * WORD;

    let mut at = 0;
    while at < blocks_end {
        s = permute(s, message, at);
        at += BLOCK;
    }

    s[0] = mix(s[0], guard.wrapping_add(len as u64));

    if len >= BLOCK {
        let mut i = 0;
        while i < 6 {
            s[i] = mix(s[i], s[i + 6]);
            i += 1;
        }
        let mut i = 0;
        while i < 3 {
            s[i] = mix(s[i], s[i + 4]);
            i += 1;
        }

        s[0] = mix(s[0], s[1]);
        s[2] = mix(s[2], s[3]);

        s[0] = mix(s[0], s[2]);
    }

    while at < words_end {
        s[0] = mix(s[0] ^ guard, read_u64(message, at));
        at += WORD;
    }

    if at < len {
        s[0] = mix(s[0], read_tail_u64(message, at));
    }

    (s[0], s[2])
}

/// Absorbs the block starting at `at` into all twelve lanes.
///
/// Word `j` lands on lane `j`; each step also couples lanes `j+1..=j+7`
/// (mod 12) so one input bit reaches every lane within the block.
#[inline(always)]
const fn permute(mut s: [u64; LANES], block: &[u8], at: usize) -> [u64; LANES] {
    let mut j = 0;
    while j < LANES {
        s[j] = s[j].wrapping_add(read_u64(block, at + j * WORD));
        s[(j + 2) % LANES] ^= s[(j + 1) % LANES];
        s[(j + 3) % LANES] = s[(j + 3) % LANES].rotate_left(17);
        s[(j + 4) % LANES] ^= s[(j + 7) % LANES];
        s[(j + 5) % LANES] = s[(j + 5) % LANES].wrapping_add(s[(j + 6) % LANES]);
        j += 1;
    }
    s
}

/// Add-rotate-xor combiner of a lane `h` with a word `k`.
#[inline(always)]
pub(crate) const fn mix(h: u64, k: u64) -> u64 {
    let k = k
        .wrapping_mul(0x6e615aece563607d) // 7 * 640687 * 1773484309013
        .rotate_left(14)
        .wrapping_mul(0xbcc369a20fa0b113); // 23 * 2903 * 203714769494179

    (h ^ k).rotate_left(5).wrapping_mul(9)
}

/// Final avalanche.
///
/// The middle step multiplies `n` by `(n + 1) / 2`, halving whichever factor
/// is even. `u64::MAX` is the one input where `n + 1` wraps; its product is
/// `2^63`.
#[inline(always)]
#[allow(clippy::manual_div_ceil)]
pub(crate) const fn scramble(mut n: u64) -> u64 {
    n ^= n >> 32;
    n = n.wrapping_mul(0x0dcfe0adfa6866c1);
    n = if n & 1 == 1 {
        if n == u64::MAX {
            0x8000000000000000
        } else {
            n.wrapping_mul((n + 1) / 2)
        }
    } else {
        (n + 1).wrapping_mul(n / 2)
    };
    n ^= n >> 32;
    n
}

#[inline(always)]
const fn read_u64(bytes: &[u8], at: usize) -> u64 {
    u64::from_le_bytes([
        bytes[at],
        bytes[at + 1],
        bytes[at + 2],
        bytes[at + 3],
        bytes[at + 4],
        bytes[at + 5],
        bytes[at + 6],
        bytes[at + 7],
    ])
}

/// Little-endian value of `bytes[at..]`, fewer than eight bytes.
#[inline(always)]
const fn read_tail_u64(bytes: &[u8], at: usize) -> u64 {
    let mut out = 0;
    let mut i = 0;
    while at + i < bytes.len() {
        out |= (bytes[at + i] as u64) << (8 * i);
        i += 1;
    }
    out
}

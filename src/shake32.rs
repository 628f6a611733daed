//! 32-bit seeded hash.
//!
//! The message is consumed as 16-byte blocks spread over four lanes, then as
//! whole 4-byte words folded into the first lane, then as a final 1 to 3 byte
//! tail. Words are read little-endian on every target.

use crate::{DefaultGuard, Guard, PI_FRACTION};

const WORD: usize = 4;
const BLOCK: usize = 4 * WORD;

/// Hashes `message` with `seed` under the crate's [`DefaultGuard`] policy.
///
/// With the guard enabled the seed enters through the bulk and whole-word
/// steps only, so messages shorter than four bytes hash the same under every
/// seed.
///
/// ```
/// use const_shakehash::shake32;
///
/// const KEY: u32 = shake32(b"abc", 0);
/// assert_eq!(KEY, 0x7b43e4bb);
/// ```
#[inline]
pub const fn shake32(message: &[u8], seed: u32) -> u32 {
    shake32_with_guard::<DefaultGuard>(message, seed)
}

/// Hashes `message` with `seed` under an explicit guard policy.
pub const fn shake32_with_guard<G: Guard>(message: &[u8], seed: u32) -> u32 {
    let guard = if G::ENABLED { seed } else { 0 };
    let len = message.len();

    // Cancels to the bare constant when guarded.
    let mut s0 = ((PI_FRACTION[0] >> 32) as u32)
        .wrapping_add(seed)
        .wrapping_sub(guard);
    let mut s1 = PI_FRACTION[0] as u32;
    let mut s2 = (PI_FRACTION[1] >> 32) as u32;
    let mut s3 = PI_FRACTION[1] as u32;

    let blocks_end = len / BLOCK * BLOCK;
    let words_end = len / WORD * WORD;

    let mut at = 0;
    while at < blocks_end {
        s0 = combine(s0.wrapping_add(guard), read_u32(message, at));
        s1 = combine(s1.wrapping_add(guard), read_u32(message, at + WORD));
        s2 = combine(s2.wrapping_add(guard), read_u32(message, at + 2 * WORD));
        s3 = combine(s3.wrapping_add(guard), read_u32(message, at + 3 * WORD));
        at += BLOCK;
    }

    s0 = combine(s0, len as u32);

    if len >= BLOCK {
        s0 = combine(s0, s1);
        s2 = combine(s2, s3);

        s0 = combine(s0, s2);
    }

    while at < words_end {
        s0 = mix(s0.wrapping_add(guard), read_u32(message, at));
        at += WORD;
    }

    if at < len {
        s0 = combine(s0, read_tail_u32(message, at));
    }

    scramble(s0)
}

/// Multiply-rotate-multiply step used for blocks, length and sub-word tail.
#[inline(always)]
pub(crate) const fn combine(n: u32, k: u32) -> u32 {
    n.wrapping_add(k.wrapping_mul(0x6ff9766f))
        .rotate_left(14)
        .wrapping_mul(0x525bd4ab)
}

/// Deeper variant of [`combine`] used for whole-word tails.
#[inline(always)]
pub(crate) const fn mix(n: u32, k: u32) -> u32 {
    let mut n = n.wrapping_add(k.wrapping_mul(0x5e6aca55));
    n = n.rotate_left(16);
    n = n.wrapping_mul(0x53987a97);
    n = n.rotate_left(15);
    n.wrapping_mul(0xe3522d45)
}

#[inline(always)]
pub(crate) const fn scramble(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0xeb1bcb4b);
    h ^= h >> 15;
    h = h.wrapping_mul(0x5b15a697);
    h ^= h >> 16;
    h
}

#[inline(always)]
const fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Little-endian value of `bytes[at..]`, fewer than four bytes.
#[inline(always)]
const fn read_tail_u32(bytes: &[u8], at: usize) -> u32 {
    let mut out = 0;
    let mut i = 0;
    while at + i < bytes.len() {
        out |= (bytes[at + i] as u32) << (8 * i);
        i += 1;
    }
    out
}

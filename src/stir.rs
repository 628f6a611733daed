//! Seedless multiply-add byte accumulator.
//!
//! `stir` has no block structure, no length fold and no finalizer: it is meant
//! to be called over several fragments in turn, with the caller applying any
//! avalanche step afterwards. It carries no hash-flood guard; fold a secret
//! starting value in (see [`BuildStir`]) before feeding it untrusted input.

use core::hash;

/// Per-byte multiplier.
pub const MULTIPLIER: u32 = 0xab64a9b3;

/// Folds every byte of `key` into the running `hash`, in order.
///
/// ```
/// use const_shakehash::stir;
///
/// assert_eq!(stir(b"abc", 0), 0x230df972);
/// assert_eq!(stir(b"c", stir(b"ab", 0)), stir(b"abc", 0));
/// ```
pub const fn stir(key: &[u8], mut hash: u32) -> u32 {
    let mut i = 0;
    while i < key.len() {
        hash = hash.wrapping_mul(MULTIPLIER).wrapping_add(key[i] as u32);
        i += 1;
    }
    hash
}

/// Running [`stir`] state usable as a [`core::hash::Hasher`].
///
/// Integer writes fold their little-endian bytes, `usize` as eight bytes, so
/// the state is the same on every target. `finish` returns the running value
/// widened to 64 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stir {
    hash: u32,
}

impl Stir {
    /// Creates a `Stir` starting from zero.
    #[inline]
    pub const fn new() -> Stir {
        Stir::with_hash(0)
    }

    /// Creates a `Stir` resuming from a previous running value.
    #[inline]
    pub const fn with_hash(hash: u32) -> Stir {
        Stir { hash }
    }

    /// Folds `bytes` in and returns the updated state.
    #[inline]
    #[must_use]
    pub const fn stir(self, bytes: &[u8]) -> Stir {
        Stir {
            hash: stir(bytes, self.hash),
        }
    }

    /// Current running value.
    #[inline]
    pub const fn hash(&self) -> u32 {
        self.hash
    }
}

impl hash::Hasher for Stir {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.hash = stir(bytes, self.hash);
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.write(&[i]);
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.write(&i.to_le_bytes());
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.write(&i.to_le_bytes());
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.write(&i.to_le_bytes());
    }

    #[inline]
    fn write_u128(&mut self, i: u128) {
        self.write(&i.to_le_bytes());
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash as u64
    }
}

/// Builds [`Stir`] hashers that all start from `seed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildStir {
    seed: u32,
}

impl BuildStir {
    #[inline]
    pub const fn new(seed: u32) -> BuildStir {
        BuildStir { seed }
    }

    /// Draws a process-random seed from the standard library's `RandomState`.
    #[cfg(feature = "std")]
    pub fn random() -> BuildStir {
        use std::hash::{BuildHasher as _, Hasher as _};

        let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
        hasher.write_u32(MULTIPLIER);
        BuildStir::new(hasher.finish() as u32)
    }

    #[inline]
    pub const fn seed(&self) -> u32 {
        self.seed
    }
}

impl hash::BuildHasher for BuildStir {
    type Hasher = Stir;

    #[inline]
    fn build_hasher(&self) -> Stir {
        Stir::with_hash(self.seed)
    }
}

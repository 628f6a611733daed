#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::many_single_char_names)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod shake32;
pub mod shake64;
pub mod stir;


pub use crate::shake32::shake32;
pub use crate::shake64::{shake64, shake64_dual, shake64_with, Shake64Digest};
pub use crate::stir::{stir, BuildStir, Stir};

/// Fractional hexadecimal digits of pi.
///
/// Initial lane values for both shake families. `shake32` takes the first four
/// 32-bit halves.
pub(crate) const PI_FRACTION: [u64; 12] = [
    0x243f6a8885a308d3,
    0x13198a2e03707344,
    0xa4093822299f31d0,
    0x082efa98ec4e6c89,
    0x452821e638d01377,
    0xbe5466cf34e90c6c,
    0xc0ac29b7c97c50dd,
    0x3f84d5b5b5470917,
    0x9216d5d98979fb1b,
    0xd1310ba698dfb5ac,
    0x2ffd72dbd01adfb7,
    0xb8e1afed6a267e96,
];

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Guarded {}
    impl Sealed for super::Unguarded {}
}

/// Hash-flood guard policy.
///
/// When `ENABLED`, the seed is folded into every bulk and tail mixing step, so
/// a party that does not know the seed cannot precompute colliding inputs.
/// Digests are only comparable between callers using the same policy.
pub trait Guard: sealed::Sealed {
    const ENABLED: bool;
}

/// Seed perturbs every mixing step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Guarded;

impl Guard for Guarded {
    const ENABLED: bool = true;
}

/// Seed only perturbs the initial state. Only for inputs nobody can choose
/// maliciously.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unguarded;

impl Guard for Unguarded {
    const ENABLED: bool = false;
}

/// Policy used by [`shake32()`], [`shake64()`] and friends.
#[cfg(not(feature = "no_hashdos_guard"))]
pub type DefaultGuard = Guarded;

/// Policy used by [`shake32()`], [`shake64()`] and friends.
#[cfg(feature = "no_hashdos_guard")]
pub type DefaultGuard = Unguarded;

#[cfg(any(feature = "serde", feature = "serde_std", feature = "serde_no_std"))]
pub mod reexports {
    pub use serde;
    #[cfg(feature = "serde_json")]
    pub use serde_json;
}

pub mod prelude {
    pub use core::hash::BuildHasher as _;
    pub use core::hash::Hasher as _;

    pub use crate::{shake32, shake64, stir};
    pub use crate::{Guard, Guarded, Unguarded};
}

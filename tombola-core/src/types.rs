//! core types for tombola

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Private secret, freshly generated values fit in 31 bits.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Secret(u32);

impl Secret {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Private nullifier, same width and lifecycle as [`Secret`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Nullifier(u32);

impl Nullifier {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Public commitment, `secret^2 + nullifier^2` without modular reduction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Commitment(u64);

impl Commitment {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Public nullifier hash, `nullifier^2`, consumed on-chain to block double claims.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct NullifierHash(u64);

impl NullifierHash {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

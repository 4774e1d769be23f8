// SPDX-License-Identifier: CC0-1.0

//! Quark
//!
//! Nine rounds of 512-bit hashing over six algorithms. Three of the rounds
//! pick their algorithm from bit 3 of the previous digest. The first 32
//! bytes of the last digest are the result.
//!

use sha3::{Digest, Keccak512};

use super::blake::blake512;
use super::bmw::bmw512;
use super::groestl::groestl512;
use super::jh::jh512;
use super::skein::skein512;

fn keccak512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Keccak512::digest(data));
    out
}

/// The digest is read as a little-endian number masked with 8.
fn branch(digest: &[u8; 64]) -> bool {
    digest[0] & 0x08 != 0
}

/// Quark hash of `data`.
pub fn hash(data: &[u8]) -> [u8; 32] {
    let h = blake512(data);
    let h = bmw512(&h);
    let h = if branch(&h) { groestl512(&h) } else { skein512(&h) };
    let h = groestl512(&h);
    let h = jh512(&h);
    let h = if branch(&h) { blake512(&h) } else { bmw512(&h) };
    let h = keccak512(&h);
    let h = skein512(&h);
    let h = if branch(&h) { keccak512(&h) } else { jh512(&h) };

    let mut out = [0u8; 32];
    out.copy_from_slice(&h[..32]);
    out
}

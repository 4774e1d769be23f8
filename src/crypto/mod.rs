// SPDX-License-Identifier: CC0-1.0

//! Cryptography
//!
//! The 512-bit hash functions chained by the Quark header hash. Keccak comes
//! from the `sha3` crate, the others are implemented here.
//!

mod blake;
mod bmw;
mod groestl;
mod jh;
mod skein;
pub mod quark;

fn u64_be(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[..8]);
    u64::from_be_bytes(word)
}

fn u64_le(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(word)
}

#[cfg(test)]
mod test_helpers {
    /// Hex of a 64-byte digest.
    pub fn hex64(digest: [u8; 64]) -> String {
        ::hex::encode(&digest[..])
    }

    /// The bytes 0, 1, .. 63.
    pub fn counting_block() -> Vec<u8> {
        (0u8..64).collect()
    }
}

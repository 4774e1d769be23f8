// SPDX-License-Identifier: CC0-1.0

//! Skein-512-512, built from Threefish-512 in UBI chaining mode.
//!

use super::u64_le;

const BLOCK_LEN: usize = 64;

/// Chaining value after the configuration block for 512-bit output.
const IV: [u64; 8] = [
    0x4903adff749c51ce, 0x0d95de399746df03, 0x8fd1934127c79bce, 0x9a255629ff352cb1,
    0x5db62599df6ca7b0, 0xeabe394ca9d5c3f4, 0x991112c71a75b523, 0xae18a40b660fcc33,
];

const KEY_SCHEDULE_PARITY: u64 = 0x1bd11bdaa9fc1a22;

const ROTATIONS: [[u32; 4]; 8] = [
    [46, 36, 19, 37],
    [33, 27, 14, 42],
    [17, 49, 36, 39],
    [44, 9, 54, 56],
    [39, 30, 34, 24],
    [13, 50, 10, 17],
    [25, 29, 39, 43],
    [8, 35, 56, 22],
];

const PERMUTATION: [usize; 8] = [2, 1, 4, 7, 6, 5, 0, 3];

const ROUNDS: usize = 72;

const TYPE_MESSAGE: u64 = 48;
const TYPE_OUTPUT: u64 = 63;

fn threefish(key: &[u64; 8], tweak: [u64; 2], plain: &[u64; 8]) -> [u64; 8] {
    let mut k = [0u64; 9];
    k[..8].copy_from_slice(key);
    k[8] = key.iter().fold(KEY_SCHEDULE_PARITY, |acc, word| acc ^ word);
    let t = [tweak[0], tweak[1], tweak[0] ^ tweak[1]];

    let subkey = |s: usize| {
        let mut sk = [0u64; 8];
        for (i, word) in sk.iter_mut().enumerate() {
            *word = k[(s + i) % 9];
        }
        sk[5] = sk[5].wrapping_add(t[s % 3]);
        sk[6] = sk[6].wrapping_add(t[(s + 1) % 3]);
        sk[7] = sk[7].wrapping_add(s as u64);
        sk
    };
    let inject = |v: &mut [u64; 8], s: usize| {
        for (word, key) in v.iter_mut().zip(subkey(s).iter()) {
            *word = word.wrapping_add(*key);
        }
    };

    let mut v = *plain;
    for d in 0..ROUNDS {
        if d % 4 == 0 {
            inject(&mut v, d / 4);
        }
        for j in 0..4 {
            let x0 = v[2 * j].wrapping_add(v[2 * j + 1]);
            let x1 = v[2 * j + 1].rotate_left(ROTATIONS[d % 8][j]) ^ x0;
            v[2 * j] = x0;
            v[2 * j + 1] = x1;
        }
        let before = v;
        for (i, word) in v.iter_mut().enumerate() {
            *word = before[PERMUTATION[i]];
        }
    }
    inject(&mut v, ROUNDS / 4);
    v
}

/// Unique block iteration of `msg` with type `kind` over chaining value `g`.
fn ubi(g: [u64; 8], msg: &[u8], kind: u64) -> [u64; 8] {
    let block_count = if msg.is_empty() { 1 } else { (msg.len() + BLOCK_LEN - 1) / BLOCK_LEN };

    let mut g = g;
    let mut position: u64 = 0;
    for index in 0..block_count {
        let start = index * BLOCK_LEN;
        let end = msg.len().min(start + BLOCK_LEN);
        let mut block = [0u8; BLOCK_LEN];
        if start < end {
            block[..end - start].copy_from_slice(&msg[start..end]);
            position += (end - start) as u64;
        }

        let mut tweak_high = kind << 56;
        if index == 0 {
            tweak_high |= 1 << 62;
        }
        if index == block_count - 1 {
            tweak_high |= 1 << 63;
        }

        let mut words = [0u64; 8];
        for (word, bytes) in words.iter_mut().zip(block.chunks_exact(8)) {
            *word = u64_le(bytes);
        }
        let encrypted = threefish(&g, [position, tweak_high], &words);
        for i in 0..8 {
            g[i] = encrypted[i] ^ words[i];
        }
    }
    g
}

/// Skein-512 with 512 bits of output.
pub fn skein512(data: &[u8]) -> [u8; 64] {
    let g = ubi(IV, data, TYPE_MESSAGE);
    let g = ubi(g, &[0u8; 8], TYPE_OUTPUT);

    let mut out = [0u8; 64];
    for (bytes, word) in out.chunks_exact_mut(8).zip(g.iter()) {
        bytes.copy_from_slice(&word.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_helpers::{counting_block, hex64};

    const TYPE_CONFIG: u64 = 4;

    #[test]
    fn iv_from_config_block() {
        let mut config = [0u8; 32];
        config[..4].copy_from_slice(b"SHA3");
        config[4] = 1;
        config[8..16].copy_from_slice(&512u64.to_le_bytes());
        assert_eq!(ubi([0; 8], &config, TYPE_CONFIG), IV);
    }

    #[test]
    fn skein512_vectors() {
        assert_eq!(
            hex64(skein512(&[])),
            "bc5b4c50925519c290cc634277ae3d6257212395cba733bbad37a4af0fa06af4\
             1fca7903d06564fea7a2d3730dbdb80c1f85562dfcc070334ea4d1d9e72cba7a"
        );
        assert_eq!(
            hex64(skein512(&counting_block())),
            "78cfdbdb2bd125f49d26146e208ebc7ceae57619bd68a2e4e9cdb1db198c995e\
             3795fadbccaabb000463525eee2e1e7f6e8309c765a61e19fccdb18f5284c070"
        );
        assert_eq!(
            hex64(skein512(&[0; 200])),
            "19625ba64a1d089b71dfb99db4eb5f72288e8ce6c0ba168cbb666a27a46a1045\
             db920d2a7abd6c8372ddb8e2cfef7fbc065aedcc2c6c53a33b38342ebf949319"
        );
    }
}

// SPDX-License-Identifier: CC0-1.0

//! BLAKE-512, the 16 round SHA-3 finalist.
//!

use super::u64_be;

const IV: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

// Leading digits of pi.
const C: [u64; 16] = [
    0x243f6a8885a308d3, 0x13198a2e03707344, 0xa4093822299f31d0, 0x082efa98ec4e6c89,
    0x452821e638d01377, 0xbe5466cf34e90c6c, 0xc0ac29b7c97c50dd, 0x3f84d5b5b5470917,
    0x9216d5d98979fb1b, 0xd1310ba698dfb5ac, 0x2ffd72dbd01adfb7, 0xb8e1afed6a267e96,
    0xba7c9045f12c7f99, 0x24a19947b3916cf7, 0x0801f2e2858efc16, 0x636920d871574e69,
];

const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

// Columns, then diagonals.
const G_LANES: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

const ROUNDS: usize = 16;
const BLOCK_LEN: usize = 128;

fn compress(h: &mut [u64; 8], block: &[u8], counter: u128) {
    let mut m = [0u64; 16];
    for (word, bytes) in m.iter_mut().zip(block.chunks_exact(8)) {
        *word = u64_be(bytes);
    }

    let t0 = counter as u64;
    let t1 = (counter >> 64) as u64;
    let mut v = [0u64; 16];
    v[..8].copy_from_slice(&h[..]);
    v[8..12].copy_from_slice(&C[..4]);
    v[12] = t0 ^ C[4];
    v[13] = t0 ^ C[5];
    v[14] = t1 ^ C[6];
    v[15] = t1 ^ C[7];

    for round in 0..ROUNDS {
        let s = &SIGMA[round % 10];
        for (i, lane) in G_LANES.iter().enumerate() {
            let [a, b, c, d] = *lane;
            let (x, y) = (s[2 * i], s[2 * i + 1]);
            v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[x] ^ C[y]);
            v[d] = (v[d] ^ v[a]).rotate_right(32);
            v[c] = v[c].wrapping_add(v[d]);
            v[b] = (v[b] ^ v[c]).rotate_right(25);
            v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[y] ^ C[x]);
            v[d] = (v[d] ^ v[a]).rotate_right(16);
            v[c] = v[c].wrapping_add(v[d]);
            v[b] = (v[b] ^ v[c]).rotate_right(11);
        }
    }

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }
}

/// BLAKE-512 of `data`.
pub fn blake512(data: &[u8]) -> [u8; 64] {
    let mut h = IV;
    let bits = data.len() as u128 * 8;

    let mut blocks = data.chunks_exact(BLOCK_LEN);
    let mut counted: u128 = 0;
    for block in &mut blocks {
        counted += BLOCK_LEN as u128 * 8;
        compress(&mut h, block, counted);
    }

    // A final block holding no message bits is compressed with a zero counter.
    let rest = blocks.remainder();
    let mut tail = [0u8; 2 * BLOCK_LEN];
    tail[..rest.len()].copy_from_slice(rest);
    tail[rest.len()] = 0x80;
    let tail_len = if rest.len() < BLOCK_LEN - 16 { BLOCK_LEN } else { 2 * BLOCK_LEN };
    tail[tail_len - 17] |= 0x01;
    tail[tail_len - 16..tail_len].copy_from_slice(&bits.to_be_bytes());

    compress(&mut h, &tail[..BLOCK_LEN], if rest.is_empty() { 0 } else { bits });
    if tail_len == 2 * BLOCK_LEN {
        compress(&mut h, &tail[BLOCK_LEN..], 0);
    }

    let mut out = [0u8; 64];
    for (bytes, word) in out.chunks_exact_mut(8).zip(h.iter()) {
        bytes.copy_from_slice(&word.to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_helpers::{counting_block, hex64};

    #[test]
    fn blake512_vectors() {
        assert_eq!(
            hex64(blake512(&[])),
            "a8cfbbd73726062df0c6864dda65defe58ef0cc52a5625090fa17601e1eecd1b\
             628e94f396ae402a00acc9eab77b4d4c2e852aaaa25a636d80af3fc7913ef5b8"
        );
        assert_eq!(
            hex64(blake512(&[0])),
            "97961587f6d970faba6d2478045de6d1fabd09b61ae50932054d52bc29d31be4\
             ff9102b9f69e2bbdb83be13d4b9c06091e5fa0b48bd081b634058be0ec49beb3"
        );
        assert_eq!(
            hex64(blake512(&counting_block())),
            "4d47291b807750d2ce6ced17ae71dc24f5a3205f4fe309537488242c4420cd32\
             d997beda4d560200cbcf3e9d68143e69f08c54b82ce77db7c22d0e17b5a1363e"
        );
    }

    #[test]
    fn blake512_padding_block() {
        // a full block leaves the padding to a block of its own
        assert_eq!(
            hex64(blake512(&[0x61; 128])),
            "e9c1faf06ba46df441c96d4a1eaa97342c6c8e84a32405ef4920f697213f15d8\
             ae9fe8446fa0574108704a853511523bfcc58bf67aafaa6101e2f70e393d542e"
        );
        assert_eq!(
            hex64(blake512(&[0; 200])),
            "e7026cb2fc4e25fec5179cb40a2565597ee683094a7fabd370c13d1ca1ee70b6\
             85644e86c26662fc031ba2e7240f1e277a55f4fae70669ed5017247db3549b4a"
        );
    }
}

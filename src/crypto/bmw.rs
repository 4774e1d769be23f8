// SPDX-License-Identifier: CC0-1.0

//! Blue Midnight Wish, 512-bit variant.
//!

use super::u64_le;

const BLOCK_LEN: usize = 128;

const K: u64 = 0x0555_5555_5555_5555;

const FINAL: [u64; 16] = [
    0xaaaaaaaaaaaaaaa0, 0xaaaaaaaaaaaaaaa1, 0xaaaaaaaaaaaaaaa2, 0xaaaaaaaaaaaaaaa3,
    0xaaaaaaaaaaaaaaa4, 0xaaaaaaaaaaaaaaa5, 0xaaaaaaaaaaaaaaa6, 0xaaaaaaaaaaaaaaa7,
    0xaaaaaaaaaaaaaaa8, 0xaaaaaaaaaaaaaaa9, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaab,
    0xaaaaaaaaaaaaaaac, 0xaaaaaaaaaaaaaaad, 0xaaaaaaaaaaaaaaae, 0xaaaaaaaaaaaaaaaf,
];

// Rotations applied to every other word in the second expansion.
const R: [u32; 7] = [5, 11, 27, 32, 37, 43, 53];

/// `W_i` as signed sums of `M_j ^ H_j`: `(j, subtract)`.
const W_TERMS: [[(usize, bool); 5]; 16] = [
    [(5, false), (7, true), (10, false), (13, false), (14, false)],
    [(6, false), (8, true), (11, false), (14, false), (15, true)],
    [(0, false), (7, false), (9, false), (12, true), (15, false)],
    [(0, false), (1, true), (8, false), (10, true), (13, false)],
    [(1, false), (2, false), (9, false), (11, true), (14, true)],
    [(3, false), (2, true), (10, false), (12, true), (15, false)],
    [(4, false), (0, true), (3, true), (11, true), (13, false)],
    [(1, false), (4, true), (5, true), (12, true), (14, true)],
    [(2, false), (5, true), (6, true), (13, false), (15, true)],
    [(0, false), (3, true), (6, false), (7, true), (14, false)],
    [(8, false), (1, true), (4, true), (7, true), (15, false)],
    [(8, false), (0, true), (2, true), (5, true), (9, false)],
    [(1, false), (3, false), (6, true), (9, true), (10, false)],
    [(2, false), (4, false), (7, false), (10, false), (11, false)],
    [(3, false), (5, true), (8, false), (11, true), (12, true)],
    [(12, false), (4, true), (6, true), (9, true), (13, false)],
];

fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}

fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}

fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}

fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}

fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}

fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

fn add_element(m: &[u64; 16], h: &[u64; 16], j: usize) -> u64 {
    let rotated = |k: usize| m[k].rotate_left(k as u32 + 1);
    rotated((j - 16) % 16)
        .wrapping_add(rotated((j - 13) % 16))
        .wrapping_sub(rotated((j - 6) % 16))
        .wrapping_add((j as u64).wrapping_mul(K))
        ^ h[(j - 9) % 16]
}

fn compress(h: &[u64; 16], m: &[u64; 16]) -> [u64; 16] {
    let mut x = [0u64; 16];
    for i in 0..16 {
        x[i] = m[i] ^ h[i];
    }

    let mut q = [0u64; 32];
    for i in 0..16 {
        let w = W_TERMS[i].iter().fold(0u64, |w, &(j, subtract)| {
            if subtract {
                w.wrapping_sub(x[j])
            } else {
                w.wrapping_add(x[j])
            }
        });
        let s = match i % 5 {
            0 => s0(w),
            1 => s1(w),
            2 => s2(w),
            3 => s3(w),
            _ => s4(w),
        };
        q[i] = s.wrapping_add(h[(i + 1) % 16]);
    }

    for j in 16..32 {
        let mut sum = 0u64;
        if j < 18 {
            for k in 0..16 {
                let word = q[j - 16 + k];
                let s = match k % 4 {
                    0 => s1(word),
                    1 => s2(word),
                    2 => s3(word),
                    _ => s0(word),
                };
                sum = sum.wrapping_add(s);
            }
        } else {
            for k in 0..14 {
                let word = q[j - 16 + k];
                let term = if k % 2 == 0 { word } else { word.rotate_left(R[k / 2]) };
                sum = sum.wrapping_add(term);
            }
            sum = sum.wrapping_add(s4(q[j - 2])).wrapping_add(s5(q[j - 1]));
        }
        q[j] = sum.wrapping_add(add_element(m, h, j));
    }

    let xl = q[16..24].iter().fold(0u64, |acc, w| acc ^ w);
    let xh = xl ^ q[24..32].iter().fold(0u64, |acc, w| acc ^ w);

    let mut out = [0u64; 16];
    out[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    out[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    out[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    out[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    out[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    out[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    out[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    out[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);

    out[8] = out[4].rotate_left(9).wrapping_add(xh ^ q[24] ^ m[8]).wrapping_add((xl << 8) ^ q[23] ^ q[8]);
    out[9] = out[5].rotate_left(10).wrapping_add(xh ^ q[25] ^ m[9]).wrapping_add((xl >> 6) ^ q[16] ^ q[9]);
    out[10] = out[6].rotate_left(11).wrapping_add(xh ^ q[26] ^ m[10]).wrapping_add((xl << 6) ^ q[17] ^ q[10]);
    out[11] = out[7].rotate_left(12).wrapping_add(xh ^ q[27] ^ m[11]).wrapping_add((xl << 4) ^ q[18] ^ q[11]);
    out[12] = out[0].rotate_left(13).wrapping_add(xh ^ q[28] ^ m[12]).wrapping_add((xl >> 3) ^ q[19] ^ q[12]);
    out[13] = out[1].rotate_left(14).wrapping_add(xh ^ q[29] ^ m[13]).wrapping_add((xl >> 4) ^ q[20] ^ q[13]);
    out[14] = out[2].rotate_left(15).wrapping_add(xh ^ q[30] ^ m[14]).wrapping_add((xl >> 7) ^ q[21] ^ q[14]);
    out[15] = out[3].rotate_left(16).wrapping_add(xh ^ q[31] ^ m[15]).wrapping_add((xl >> 2) ^ q[22] ^ q[15]);
    out
}

fn iv() -> [u64; 16] {
    let mut iv = [0u64; 16];
    for (i, word) in iv.iter_mut().enumerate() {
        // bytes 0x80, 0x81, .. 0xff read big-endian
        let first = 0x80 + 8 * i as u64;
        *word = (0..8u64).fold(0u64, |acc, b| (acc << 8) | (first + b));
    }
    iv
}

/// BMW-512 of `data`.
pub fn bmw512(data: &[u8]) -> [u8; 64] {
    let mut padded = data.to_vec();
    padded.push(0x80);
    while padded.len() % BLOCK_LEN != BLOCK_LEN - 8 {
        padded.push(0);
    }
    padded.extend_from_slice(&(data.len() as u64 * 8).to_le_bytes());

    let mut h = iv();
    for block in padded.chunks_exact(BLOCK_LEN) {
        let mut m = [0u64; 16];
        for (word, bytes) in m.iter_mut().zip(block.chunks_exact(8)) {
            *word = u64_le(bytes);
        }
        h = compress(&h, &m);
    }
    let h = compress(&FINAL, &h);

    let mut out = [0u8; 64];
    for (bytes, word) in out.chunks_exact_mut(8).zip(h[8..].iter()) {
        bytes.copy_from_slice(&word.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_helpers::{counting_block, hex64};

    #[test]
    fn bmw512_iv() {
        let iv = iv();
        assert_eq!(iv[0], 0x8081828384858687);
        assert_eq!(iv[15], 0xf8f9fafbfcfdfeff);
    }

    #[test]
    fn bmw512_vectors() {
        assert_eq!(
            hex64(bmw512(&[])),
            "6a725655c42bc8a2a20549dd5a233a6a2beb01616975851fd122504e604b46af\
             7d96697d0b6333db1d1709d6df328d2a6c786551b0cce2255e8c7332b4819c0e"
        );
        assert_eq!(
            hex64(bmw512(&counting_block())),
            "824168671c2e3f35ebba82b63b9e6c42b8411cdcda1041264bb5f50abd507d18\
             27edcfff050f6c8675cb8ccba8699c843dcf5fb81ccadab1deef0d9cf4770257"
        );
        assert_eq!(
            hex64(bmw512(&[0; 200])),
            "b620b2f45649503d6dc065f733695693c495f6b25aeac1e6639afbcf8ab2bf64\
             4f69a67f4f537fda0535df85c216cf3b953f17f9385338f5d8ebca0d930bc412"
        );
    }
}

// SPDX-License-Identifier: CC0-1.0

//! Grøstl-512
//!
//! Byte oriented: the 1024-bit state is an 8x16 byte matrix stored column
//! by column.
//!

const BLOCK_LEN: usize = 128;
const COLUMNS: usize = 16;
const ROUNDS: u8 = 14;

// The AES S-box.
const SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

// First row of the circulant MixBytes matrix.
const MIX: [u8; 8] = [2, 2, 3, 4, 5, 3, 5, 7];

const SHIFT_P: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 11];
const SHIFT_Q: [usize; 8] = [1, 3, 5, 11, 0, 2, 4, 6];

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Permutation {
    P,
    Q,
}

fn xtime(a: u8) -> u8 {
    (a << 1) ^ if a & 0x80 != 0 { 0x1b } else { 0 }
}

fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

fn permute(state: &mut [u8; BLOCK_LEN], permutation: Permutation) {
    let shifts = match permutation {
        Permutation::P => &SHIFT_P,
        Permutation::Q => &SHIFT_Q,
    };

    for round in 0..ROUNDS {
        for col in 0..COLUMNS {
            let constant = ((col as u8) << 4) ^ round;
            match permutation {
                Permutation::P => state[8 * col] ^= constant,
                Permutation::Q => {
                    for row in 0..8 {
                        state[8 * col + row] ^= 0xff;
                    }
                    state[8 * col + 7] ^= constant;
                }
            }
        }

        for byte in state.iter_mut() {
            *byte = SBOX[*byte as usize];
        }

        let shifted = *state;
        for col in 0..COLUMNS {
            for row in 0..8 {
                state[8 * col + row] = shifted[8 * ((col + shifts[row]) % COLUMNS) + row];
            }
        }

        for col in state.chunks_exact_mut(8) {
            let column = [col[0], col[1], col[2], col[3], col[4], col[5], col[6], col[7]];
            for (row, out) in col.iter_mut().enumerate() {
                *out = column
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (k, &byte)| acc ^ gf_mul(byte, MIX[(k + 8 - row) % 8]));
            }
        }
    }
}

/// Grøstl-512 of `data`.
pub fn groestl512(data: &[u8]) -> [u8; 64] {
    let mut padded = data.to_vec();
    padded.push(0x80);
    while (padded.len() + 8) % BLOCK_LEN != 0 {
        padded.push(0);
    }
    let blocks = (padded.len() + 8) / BLOCK_LEN;
    padded.extend_from_slice(&(blocks as u64).to_be_bytes());

    // output length in bits, big-endian in the last bytes
    let mut h = [0u8; BLOCK_LEN];
    h[BLOCK_LEN - 2] = 0x02;

    for block in padded.chunks_exact(BLOCK_LEN) {
        let mut p = h;
        let mut q = [0u8; BLOCK_LEN];
        q.copy_from_slice(block);
        for (x, m) in p.iter_mut().zip(block) {
            *x ^= m;
        }
        permute(&mut p, Permutation::P);
        permute(&mut q, Permutation::Q);
        for i in 0..BLOCK_LEN {
            h[i] ^= p[i] ^ q[i];
        }
    }

    let mut x = h;
    permute(&mut x, Permutation::P);
    let mut out = [0u8; 64];
    for i in 0..64 {
        out[i] = x[64 + i] ^ h[64 + i];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_helpers::{counting_block, hex64};

    #[test]
    fn field_multiplication() {
        assert_eq!(gf_mul(0x57, 0x83), 0xc1);
        assert_eq!(gf_mul(0x57, 0x13), 0xfe);
        assert_eq!(xtime(0x80), 0x1b);
    }

    #[test]
    fn groestl512_vectors() {
        assert_eq!(
            hex64(groestl512(&[])),
            "6d3ad29d279110eef3adbd66de2a0345a77baede1557f5d099fce0c03d6dc2ba\
             8e6d4a6633dfbd66053c20faa87d1a11f39a7fbe4a6c2f009801370308fc4ad8"
        );
        assert_eq!(
            hex64(groestl512(&counting_block())),
            "6e8c9b90e36cea68c029a7d8b95b718c84205d81be227ba61510f567d46b83ed\
             d11f301bf1e7041be991b22fdbee82dbdce7ab0e0ee42a795ca965a439532a39"
        );
        assert_eq!(
            hex64(groestl512(&[0; 200])),
            "0cc3616dd83bf61dc61fbc3559cf9723c8f663d1a0cdc41f9973515e9cf6f646\
             34d0459d52ac495153e9515b0967ac67947e778db137a301c27a230a98dde3ac"
        );
    }
}

// SPDX-License-Identifier: CC0-1.0

//! JH-512
//!
//! The bit-grouped form of the E8 permutation: the 1024-bit state is
//! handled as 256 four-bit elements, with one bit of round constant per
//! element choosing its S-box.
//!

const BLOCK_LEN: usize = 64;
const ELEMENTS: usize = 256;
const ROUNDS: usize = 42;

const SBOX: [[u8; 16]; 2] = [
    [9, 0, 4, 11, 13, 12, 3, 15, 1, 10, 2, 6, 7, 5, 8, 14],
    [3, 12, 6, 13, 5, 7, 1, 9, 15, 2, 0, 4, 11, 10, 14, 8],
];

// Round constant of the first round, one element per nibble.
const C0: [u8; 32] = [
    0x6a, 0x09, 0xe6, 0x67, 0xf3, 0xbc, 0xc9, 0x08, 0xb2, 0xfb, 0x13, 0x66, 0xea, 0x95, 0x7d, 0x3e,
    0x3a, 0xde, 0xc1, 0x75, 0x12, 0x77, 0x50, 0x99, 0xda, 0x2f, 0x59, 0x0b, 0x06, 0x67, 0x32, 0x2a,
];

/// The MDS layer on a pair of elements.
fn linear(pair: &mut [u8]) {
    let (a, b) = (pair[0], pair[1]);
    let b = b ^ (((a << 1) ^ (a >> 3) ^ ((a >> 2) & 2)) & 0xf);
    let a = a ^ (((b << 1) ^ (b >> 3) ^ ((b >> 2) & 2)) & 0xf);
    pair[0] = a;
    pair[1] = b;
}

/// Linear transformation and permutation of one round, over any even
/// number of elements.
fn mix(elements: &mut [u8]) {
    for pair in elements.chunks_exact_mut(2) {
        linear(pair);
    }
    for quad in elements.chunks_exact_mut(4) {
        quad.swap(2, 3);
    }
    let before = elements.to_vec();
    let half = elements.len() / 2;
    for i in 0..half {
        elements[i] = before[2 * i];
        elements[i + half] = before[2 * i + 1];
    }
    for i in (half..elements.len()).step_by(2) {
        elements.swap(i, i + 1);
    }
}

fn bit(state: &[u8; 128], i: usize) -> u8 {
    (state[i >> 3] >> (7 - (i & 7))) & 1
}

fn group(state: &[u8; 128], i: usize) -> u8 {
    (bit(state, i) << 3) | (bit(state, i + 256) << 2) | (bit(state, i + 512) << 1) | bit(state, i + 768)
}

fn ungroup(state: &mut [u8; 128], i: usize, element: u8) {
    for j in 0..4 {
        let pos = i + 256 * j;
        state[pos >> 3] |= ((element >> (3 - j)) & 1) << (7 - (pos & 7));
    }
}

fn e8(state: &mut [u8; 128]) {
    let mut a = [0u8; ELEMENTS];
    for i in 0..ELEMENTS / 2 {
        a[2 * i] = group(state, i);
        a[2 * i + 1] = group(state, i + ELEMENTS / 2);
    }

    let mut constant = [0u8; ELEMENTS / 4];
    for (i, byte) in C0.iter().enumerate() {
        constant[2 * i] = byte >> 4;
        constant[2 * i + 1] = byte & 0xf;
    }

    for _ in 0..ROUNDS {
        for (i, element) in a.iter_mut().enumerate() {
            let select = (constant[i >> 2] >> (3 - (i & 3))) & 1;
            *element = SBOX[select as usize][*element as usize];
        }
        mix(&mut a);

        for element in constant.iter_mut() {
            *element = SBOX[0][*element as usize];
        }
        mix(&mut constant);
    }

    let mut out = [0u8; 128];
    for i in 0..ELEMENTS / 2 {
        ungroup(&mut out, i, a[2 * i]);
        ungroup(&mut out, i + ELEMENTS / 2, a[2 * i + 1]);
    }
    *state = out;
}

fn compress(state: &mut [u8; 128], block: &[u8]) {
    for (h, m) in state[..BLOCK_LEN].iter_mut().zip(block) {
        *h ^= m;
    }
    e8(state);
    for (h, m) in state[BLOCK_LEN..].iter_mut().zip(block) {
        *h ^= m;
    }
}

/// JH-512 of `data`.
pub fn jh512(data: &[u8]) -> [u8; 64] {
    // Padding always adds at least one block.
    let total = (data.len() + BLOCK_LEN - 1) / BLOCK_LEN * BLOCK_LEN + BLOCK_LEN;
    let mut padded = data.to_vec();
    padded.push(0x80);
    padded.resize(total - 16, 0);
    padded.extend_from_slice(&(data.len() as u128 * 8).to_be_bytes());

    // the output length in bits opens the initial state
    let mut state = [0u8; 128];
    state[0] = 0x02;
    compress(&mut state, &[0u8; BLOCK_LEN]);

    for block in padded.chunks_exact(BLOCK_LEN) {
        compress(&mut state, block);
    }

    let mut out = [0u8; 64];
    out.copy_from_slice(&state[BLOCK_LEN..]);
    out
}

// SPDX-License-Identifier: CC0-1.0

//! Blocks
//!
//! A block is a bundle of transactions with a proof-of-work attached,
//! which commits to an earlier block to form the blockchain. This
//! module describes structures and functions needed to describe
//! these blocks and the blockchain.
//!
//! Headers before version 4 are identified by their Quark hash. From
//! version 4 onward the header carries an accumulator checkpoint and is
//! hashed with double SHA256. Other hashers plug in through the
//! [`HeaderHasher`] trait.
//!

use std::io;

use hashes::{sha256d, Hash, HashEngine};
use rug::integer::Order;
use rug::Integer;

use crate::blockdata::transaction::Transaction;
use crate::consensus::encode::{self, serialize, Encodable};
use crate::crypto::quark;

/// A block hash.
pub type BlockHash = sha256d::Hash;
/// A node of the transaction merkle tree.
pub type TxMerkleNode = sha256d::Hash;

/// Block header version from which the accumulator checkpoint is serialized.
pub const ACCUMULATOR_HEADER_VERSION: i32 = 4;

/// A block header, which contains all the block's information except
/// the actual transactions
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub struct BlockHeader {
    /// The protocol version. Should always be 1 for the genesis block.
    pub version: i32,
    /// Reference to the previous block in the chain
    pub prev_blockhash: BlockHash,
    /// The root hash of the merkle tree of transactions in the block
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the block, as claimed by the miner
    pub time: u32,
    /// The target value below which the blockhash must lie, encoded as a
    /// a float (with well-defined rounding, of course)
    pub bits: u32,
    /// The nonce, selected to obtain a low enough blockhash
    pub nonce: u32,
    /// Accumulator checkpoint, only serialized for headers of
    /// [`ACCUMULATOR_HEADER_VERSION`] and above
    pub accumulator_checkpoint: sha256d::Hash,
}

impl Encodable for BlockHeader {
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, encode::Error> {
        let mut len = 0;
        len += self.version.consensus_encode(&mut s)?;
        len += self.prev_blockhash.consensus_encode(&mut s)?;
        len += self.merkle_root.consensus_encode(&mut s)?;
        len += self.time.consensus_encode(&mut s)?;
        len += self.bits.consensus_encode(&mut s)?;
        len += self.nonce.consensus_encode(&mut s)?;
        if self.version >= ACCUMULATOR_HEADER_VERSION {
            len += self.accumulator_checkpoint.consensus_encode(&mut s)?;
        }
        Ok(len)
    }
}

/// Computes the identifying hash of a block header.
///
/// Any `Fn(&BlockHeader) -> BlockHash` is a `HeaderHasher`.
pub trait HeaderHasher {
    /// Returns the hash identifying `header`.
    fn hash_header(&self, header: &BlockHeader) -> BlockHash;
}

impl<F: Fn(&BlockHeader) -> BlockHash> HeaderHasher for F {
    fn hash_header(&self, header: &BlockHeader) -> BlockHash {
        self(header)
    }
}

/// Double SHA256 over the consensus encoding of the header.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sha256dHasher;

impl HeaderHasher for Sha256dHasher {
    fn hash_header(&self, header: &BlockHeader) -> BlockHash {
        let mut engine = BlockHash::engine();
        header.consensus_encode(&mut engine).expect("engines don't error");
        BlockHash::from_engine(engine)
    }
}

/// Quark over the consensus encoding of the header.
#[derive(Copy, Clone, Debug, Default)]
pub struct QuarkHasher;

impl HeaderHasher for QuarkHasher {
    fn hash_header(&self, header: &BlockHeader) -> BlockHash {
        BlockHash::from_inner(quark::hash(&serialize(header)))
    }
}

/// A difficulty target decoded from its compact `nBits` representation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CompactTarget {
    /// The 256-bit target
    pub value: Integer,
    /// The sign bit was set on a non-zero mantissa
    pub negative: bool,
    /// The encoded value does not fit in 256 bits
    pub overflow: bool,
}

impl CompactTarget {
    /// Decodes the compact representation used in block headers.
    pub fn from_compact(bits: u32) -> CompactTarget {
        let size = bits >> 24;
        let mut word = bits & 0x007f_ffff;
        let value = if size <= 3 {
            word >>= 8 * (3 - size);
            Integer::from(word)
        } else {
            Integer::from(word) << (8 * (size - 3))
        };
        let negative = word != 0 && (bits & 0x0080_0000) != 0;
        let overflow = word != 0
            && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
        CompactTarget { value, negative, overflow }
    }
}

impl BlockHeader {
    /// The hash identifying this header: Quark below
    /// [`ACCUMULATOR_HEADER_VERSION`], double SHA256 from it on.
    pub fn block_hash(&self) -> BlockHash {
        if self.version < ACCUMULATOR_HEADER_VERSION {
            self.block_hash_with(&QuarkHasher)
        } else {
            self.block_hash_with(&Sha256dHasher)
        }
    }

    /// Computes the header hash with the given hasher.
    pub fn block_hash_with<H: HeaderHasher + ?Sized>(&self, hasher: &H) -> BlockHash {
        hasher.hash_header(self)
    }

    /// Decodes the difficulty target of this header.
    pub fn target(&self) -> CompactTarget {
        CompactTarget::from_compact(self.bits)
    }
}

/// Interprets a hash as a 256-bit little-endian number.
pub fn hash_to_integer(hash: &sha256d::Hash) -> Integer {
    Integer::from_digits(&hash.into_inner()[..], Order::Lsf)
}

/// Checks that `hash` satisfies the compact target `bits` and that the
/// target itself is no easier than `pow_limit`.
pub fn check_proof_of_work(hash: &BlockHash, bits: u32, pow_limit: &Integer) -> bool {
    let target = CompactTarget::from_compact(bits);
    if target.negative || target.overflow || target.value == 0 || target.value > *pow_limit {
        return false;
    }
    hash_to_integer(hash) <= target.value
}

/// Computes the merkle root of a list of transaction ids, duplicating the
/// last entry of every odd-sized level. Returns `None` for an empty list.
pub fn merkle_root<I: IntoIterator<Item = sha256d::Hash>>(hashes: I) -> Option<TxMerkleNode> {
    let mut level: Vec<sha256d::Hash> = hashes.into_iter().collect();
    if level.is_empty() {
        return None;
    }
    while level.len() > 1 {
        if level.len() % 2 == 1 {
            let last = level[level.len() - 1];
            level.push(last);
        }
        level = level
            .chunks(2)
            .map(|pair| {
                let mut engine = sha256d::Hash::engine();
                engine.input(&pair[0].into_inner());
                engine.input(&pair[1].into_inner());
                sha256d::Hash::from_engine(engine)
            })
            .collect();
    }
    Some(level[0])
}

/// A block, a collection of transactions with an attached proof of work
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Block {
    /// The block header
    pub header: BlockHeader,
    /// List of transactions contained in the block
    pub txdata: Vec<Transaction>,
}

impl Block {
    /// Computes the merkle root of the block's transactions.
    pub fn compute_merkle_root(&self) -> Option<TxMerkleNode> {
        merkle_root(self.txdata.iter().map(Transaction::txid))
    }

    /// Checks that the header commits to the block's transactions.
    pub fn check_merkle_root(&self) -> bool {
        self.compute_merkle_root() == Some(self.header.merkle_root)
    }
}

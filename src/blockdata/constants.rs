// SPDX-License-Identifier: CC0-1.0

//! Blockdata constants
//!
//! This module provides various constants relating to the blockchain and
//! consensus code. In particular, it defines the genesis block and its
//! single transaction.
//!

use hashes::hex::FromHex;
use hashes::Hash;

use crate::blockdata::block::{Block, BlockHash, BlockHeader};
use crate::blockdata::opcodes;
use crate::blockdata::script;
use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};

/// The maximum allowable sequence number
pub const MAX_SEQUENCE: u32 = 0xFFFFFFFF;
/// How many satoshis are in one coin
pub const COIN_VALUE: i64 = 100_000_000;
/// How many satoshis are in one cent
pub const CENT_VALUE: i64 = 1_000_000;

/// Headline committed to by the genesis coinbase.
pub const GENESIS_TIMESTAMP_MESSAGE: &str = "July 15 2019 - Watchdog Official Blockchain Launch";
/// Public key paid by the genesis coinbase output.
pub const GENESIS_OUTPUT_KEY: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";

/// Constructs and returns the coinbase (and only) transaction of the genesis block
fn genesis_tx() -> Transaction {
    // Base
    let mut ret = Transaction {
        version: 1,
        lock_time: 0,
        input: vec![],
        output: vec![],
    };

    // Inputs
    let in_script = script::Builder::new()
        .push_int(486604799)
        .push_scriptint(4)
        .push_slice(GENESIS_TIMESTAMP_MESSAGE.as_bytes())
        .into_script();
    ret.input.push(TxIn {
        previous_output: OutPoint::null(),
        script_sig: in_script,
        sequence: MAX_SEQUENCE,
    });

    // Outputs
    let out_script = script::Builder::new()
        .push_slice(&Vec::<u8>::from_hex(GENESIS_OUTPUT_KEY).expect("genesis output key is hex"))
        .push_opcode(opcodes::all::OP_CHECKSIG)
        .into_script();
    ret.output.push(TxOut {
        value: 0,
        script_pubkey: out_script,
    });

    // end
    ret
}

/// Constructs and returns the genesis block for the given header fields.
///
/// Every network shares the same coinbase; only the header time, difficulty
/// bits and nonce may differ.
pub fn genesis_block(time: u32, bits: u32, nonce: u32) -> Block {
    let txdata = vec![genesis_tx()];
    let merkle_root = txdata[0].txid();
    Block {
        header: BlockHeader {
            version: 1,
            prev_blockhash: BlockHash::from_inner([0u8; 32]),
            merkle_root,
            time,
            bits,
            nonce,
            accumulator_checkpoint: Hash::from_inner([0u8; 32]),
        },
        txdata,
    }
}

#[cfg(test)]
mod test {
    use hashes::Hash;
    use hex::decode as hex_decode;

    use crate::blockdata::block::BlockHash;

    use crate::blockdata::constants::{genesis_block, genesis_tx};
    use crate::blockdata::constants::{COIN_VALUE, MAX_SEQUENCE};
    use crate::consensus::encode::serialize;

    #[test]
    fn genesis_first_transaction() {
        let gen = genesis_tx();

        assert_eq!(gen.version, 1);
        assert!(gen.is_coin_base());
        assert_eq!(gen.input.len(), 1);
        assert_eq!(gen.input[0].previous_output.vout, 0xFFFFFFFF);
        assert_eq!(serialize(&gen.input[0].script_sig),
                   hex_decode("3a04ffff001d0104324a756c792031352032303139202d205761746368646f67204f6666696369616c20426c6f636b636861696e204c61756e6368").unwrap());

        assert_eq!(gen.input[0].sequence, MAX_SEQUENCE);
        assert_eq!(gen.output.len(), 1);
        assert_eq!(serialize(&gen.output[0].script_pubkey),
                   hex_decode("434104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac").unwrap());
        assert_eq!(gen.output[0].value, 0 * COIN_VALUE);
        assert_eq!(gen.lock_time, 0);

        assert_eq!(format!("{:x}", gen.txid()),
                   "a3deea737fbc22e13807e64d3a8e54fe6f7a15a0c41d0fa2c70eb208c8f0c411".to_string());
    }

    #[test]
    fn genesis_full_block() {
        let gen = genesis_block(1563220800, 0x1e0ffff0, 667381);

        assert_eq!(gen.header.version, 1);
        assert_eq!(gen.header.prev_blockhash, BlockHash::from_inner([0u8; 32]));
        assert_eq!(format!("{:x}", gen.header.merkle_root),
                   "a3deea737fbc22e13807e64d3a8e54fe6f7a15a0c41d0fa2c70eb208c8f0c411".to_string());
        assert!(gen.check_merkle_root());
        assert_eq!(gen.header.time, 1563220800);
        assert_eq!(gen.header.bits, 0x1e0ffff0);
        assert_eq!(gen.header.nonce, 667381);
        assert_eq!(serialize(&gen.header).len(), 80);
    }
}

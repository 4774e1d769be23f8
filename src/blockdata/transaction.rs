// SPDX-License-Identifier: CC0-1.0

//! Bitcoin Transaction
//!
//! A transaction describes a transfer of money. It consumes previously-unspent
//! transaction outputs and produces new ones, satisfying the condition to spend
//! the old outputs (typically a digital signature with a specific key must be
//! provided) and defining the condition to spend the new ones.
//!
//! Only what is needed to build and hash a coinbase transaction lives here.
//!

use std::io;

use hashes::{sha256d, Hash};

use crate::blockdata::script::Script;
use crate::consensus::encode::{self, encode_list, Encodable};

/// A transaction identifier: the double SHA256 of its consensus encoding.
pub type Txid = sha256d::Hash;

/// A reference to a transaction output
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OutPoint {
    /// The referenced transaction's txid
    pub txid: Txid,
    /// The index of the referenced output in its transaction's vout
    pub vout: u32,
}
impl_consensus_encoding!(OutPoint, txid, vout);

impl OutPoint {
    /// Creates a "null" `OutPoint`.
    ///
    /// This value is used for coinbase transactions because they don't have
    /// any previous outputs.
    #[inline]
    pub fn null() -> OutPoint {
        OutPoint {
            txid: Txid::from_inner([0u8; 32]),
            vout: u32::max_value(),
        }
    }

    /// Checks if an `OutPoint` is "null".
    #[inline]
    pub fn is_null(&self) -> bool {
        *self == OutPoint::null()
    }
}

/// A transaction input, which defines old coins to be consumed
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TxIn {
    /// The reference to the previous output that is being used an an input
    pub previous_output: OutPoint,
    /// The script which pushes values on the stack which will cause
    /// the referenced output's script to accept
    pub script_sig: Script,
    /// The sequence number, which suggests to miners which of two
    /// conflicting transactions should be preferred, or 0xFFFFFFFF
    /// to ignore this feature. This is generally never used since
    /// the miner behaviour cannot be enforced.
    pub sequence: u32,
}
impl_consensus_encoding!(TxIn, previous_output, script_sig, sequence);

/// A transaction output, which defines new coins to be created from old ones.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TxOut {
    /// The value of the output, in satoshis
    pub value: i64,
    /// The script which must satisfy for the output to be spent
    pub script_pubkey: Script,
}
impl_consensus_encoding!(TxOut, value, script_pubkey);

/// A Bitcoin transaction, which describes an authenticated movement of coins
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Transaction {
    /// The protocol version, is currently expected to be 1.
    pub version: i32,
    /// List of inputs
    pub input: Vec<TxIn>,
    /// List of outputs
    pub output: Vec<TxOut>,
    /// Block number before which this transaction is valid, or 0 for
    /// valid immediately.
    pub lock_time: u32,
}

impl Transaction {
    /// Computes the txid.
    pub fn txid(&self) -> Txid {
        let mut enc = Txid::engine();
        self.consensus_encode(&mut enc).expect("engines don't error");
        Txid::from_engine(enc)
    }

    /// Is this a coin base transaction?
    pub fn is_coin_base(&self) -> bool {
        self.input.len() == 1 && self.input[0].previous_output.is_null()
    }
}

impl Encodable for Transaction {
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, encode::Error> {
        let mut len = 0;
        len += self.version.consensus_encode(&mut s)?;
        len += encode_list(&self.input, &mut s)?;
        len += encode_list(&self.output, &mut s)?;
        len += self.lock_time.consensus_encode(&mut s)?;
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockdata::script::Builder;
    use crate::consensus::encode::serialize;

    #[test]
    fn outpoint_null() {
        let null = OutPoint::null();
        assert!(null.is_null());
        assert_eq!(null.vout, 0xFFFFFFFF);
        let mut other = null;
        other.vout = 0;
        assert!(!other.is_null());
        assert_eq!(serialize(&null).len(), 36);
    }

    #[test]
    fn coinbase_txid() {
        let tx = Transaction {
            version: 1,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: Builder::new().push_int(1).into_script(),
                sequence: 0xFFFFFFFF,
            }],
            output: vec![TxOut { value: 0, script_pubkey: Script::new() }],
            lock_time: 0,
        };
        assert!(tx.is_coin_base());

        let bytes = serialize(&tx);
        // version, 1 input (36 + 2 + 4), 1 output (8 + 1), lock time
        assert_eq!(bytes.len(), 4 + 1 + 42 + 1 + 9 + 4);
        assert_eq!(tx.txid(), Txid::hash(&bytes));
    }
}
